//! 应用主状态

use std::sync::{Arc, Mutex};

use binip_app::Store;
use binip_core::{OperationalMode, PrimaryState, StateMachine};

use super::{Form, FormOwner};

/// 应用主状态
pub struct App {
    /// 会话状态机（唯一的状态所有者）
    pub machine: StateMachine,

    /// 当前表单
    pub form: Option<Form>,

    /// 记录列表中的光标位置
    pub record_cursor: usize,

    /// 是否展开完整帮助
    pub show_full_help: bool,

    /// 是否开启调试日志（在展开的帮助中显示）
    pub debug: bool,

    /// 存储
    pub store: Arc<Store>,

    /// 最近一次渲染的存储内容，由后台命令刷新
    pub dump: Arc<Mutex<String>>,
}

impl App {
    /// 创建新的应用实例，会话从网段选择开始
    pub fn new(store: Arc<Store>, debug: bool) -> Self {
        Self {
            machine: StateMachine::new(Some(store.handle())),
            form: None,
            record_cursor: 0,
            show_full_help: false,
            debug,
            store,
            dump: Arc::new(Mutex::new(String::new())),
        }
    }

    /// 是否应该退出
    pub fn should_quit(&self) -> bool {
        self.machine.is_quitting()
    }

    /// 当前子状态或模式，用作表单归属
    pub fn form_owner(&self) -> Option<FormOwner> {
        match self.machine.primary() {
            PrimaryState::Onboarding => self.machine.onboarding().map(FormOwner::Onboarding),
            PrimaryState::Operational => self.machine.mode().map(FormOwner::Operational),
            PrimaryState::Quitting => None,
        }
    }

    /// 丢弃不属于当前状态的表单
    pub fn drop_stale_form(&mut self) {
        let owner = self.form_owner();
        if self.form.as_ref().is_some_and(|f| Some(f.owner) != owner) {
            log::debug!("form dropped on state change");
            self.form = None;
        }
    }

    /// 记录列表变化后修正光标
    pub fn clamp_cursor(&mut self) {
        let len = self.machine.record_ids().len();
        if self.record_cursor >= len {
            self.record_cursor = len.saturating_sub(1);
        }
    }

    /// 光标所在记录
    pub fn cursor_record(&self) -> Option<&str> {
        self.machine
            .record_ids()
            .get(self.record_cursor)
            .map(String::as_str)
    }

    /// 编辑 / 删除的目标：详情页为当前记录，列表页为光标所在记录
    pub fn target_record(&self) -> String {
        let target = match self.machine.mode() {
            Some(OperationalMode::List) => self.cursor_record(),
            _ => self.machine.selected_record(),
        };
        target.unwrap_or_default().to_string()
    }

    /// 渲染用的存储内容
    pub fn dump_text(&self) -> String {
        self.dump
            .lock()
            .map(|text| text.clone())
            .unwrap_or_default()
    }
}
