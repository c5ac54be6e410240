//! 表单状态
//!
//! 表单由 `PromptRequested` 创建，归属于请求它的子状态或模式；
//! 状态机离开该状态后表单即被丢弃。选中项、输入缓冲区等临时字段
//! 只存在于表单内部，从不持久化。

use binip_core::types::{OnboardingSubState, OperationalMode, Prompt};
use binip_core::utils::cidr::{validate_prefix, CUSTOM_PREFIX_OPTION};
use binip_core::Event;

/// 表单所属的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOwner {
    Onboarding(OnboardingSubState),
    Operational(OperationalMode),
}

/// 表单控件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    /// 单选列表
    Select {
        options: Vec<String>,
        selected: usize,
    },
    /// 带校验的文本输入
    Input {
        placeholder: &'static str,
        description: &'static str,
        value: String,
        error: Option<String>,
    },
    /// 是 / 否
    Confirm {
        affirmative: &'static str,
        negative: &'static str,
        value: bool,
    },
    /// 只读说明，Enter 继续
    Note { description: String },
}

/// 当前显示的表单
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    pub owner: FormOwner,
    pub title: String,
    pub kind: FormKind,
    prompt: Prompt,
}

impl Form {
    /// 根据提示请求构建表单
    pub fn from_prompt(prompt: Prompt, owner: FormOwner) -> Self {
        let (title, kind) = match &prompt {
            Prompt::SelectPrefix { options } => (
                "Select IP Range".to_string(),
                FormKind::Select {
                    options: options.clone(),
                    selected: 0,
                },
            ),
            Prompt::CustomPrefix => (
                "Enter custom network prefix".to_string(),
                FormKind::Input {
                    placeholder: "e.g., 192.168.1.0/24",
                    description: "Must be in CIDR notation",
                    value: String::new(),
                    error: None,
                },
            ),
            Prompt::ConfirmPrefix { prefix } => (
                format!("Use this network prefix?\n\n  {prefix}"),
                FormKind::Confirm {
                    affirmative: "Yes",
                    negative: "No, choose again",
                    value: true,
                },
            ),
            Prompt::CreateRecord => (
                "Create Record".to_string(),
                FormKind::Note {
                    description: "Form to be designed".to_string(),
                },
            ),
            Prompt::EditRecord { id } => (
                "Edit Record".to_string(),
                FormKind::Note {
                    description: format!("Form to be designed for record: {id}"),
                },
            ),
            Prompt::ConfirmDelete { id } => (
                format!("Delete record {id}?"),
                FormKind::Confirm {
                    affirmative: "Yes, delete",
                    negative: "Cancel",
                    value: false,
                },
            ),
        };

        Self {
            owner,
            title,
            kind,
            prompt,
        }
    }

    pub fn select_previous(&mut self) {
        if let FormKind::Select { options, selected } = &mut self.kind {
            *selected = selected.checked_sub(1).unwrap_or(options.len().saturating_sub(1));
        }
    }

    pub fn select_next(&mut self) {
        if let FormKind::Select { options, selected } = &mut self.kind {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    pub fn toggle(&mut self) {
        if let FormKind::Confirm { value, .. } = &mut self.kind {
            *value = !*value;
        }
    }

    /// 直接回答是 / 否并提交
    pub fn answer(&mut self, yes: bool) -> Option<Event> {
        match &mut self.kind {
            FormKind::Confirm { value, .. } => {
                *value = yes;
                self.submit()
            }
            _ => None,
        }
    }

    pub fn input(&mut self, c: char) {
        if let FormKind::Input { value, error, .. } = &mut self.kind {
            value.push(c);
            *error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let FormKind::Input { value, error, .. } = &mut self.kind {
            value.pop();
            *error = None;
        }
    }

    /// 是否在接收自由文本（此时字符键不作为快捷键）
    pub fn is_text_input(&self) -> bool {
        matches!(self.kind, FormKind::Input { .. })
    }

    /// 提交表单，返回需要投递的事件。
    ///
    /// 输入未通过校验时记录错误并返回 `None`，表单保持打开。
    pub fn submit(&mut self) -> Option<Event> {
        match (&self.prompt, &mut self.kind) {
            (Prompt::SelectPrefix { .. }, FormKind::Select { options, selected }) => {
                let prefix = options.get(*selected)?.clone();
                let is_custom = prefix == CUSTOM_PREFIX_OPTION;
                Some(Event::PrefixChosen { prefix, is_custom })
            }
            (Prompt::CustomPrefix, FormKind::Input { value, error, .. }) => {
                let prefix = value.trim().to_string();
                match validate_prefix(&prefix) {
                    Ok(()) => Some(Event::CustomPrefixEntered {
                        prefix,
                        valid: true,
                    }),
                    Err(e) => {
                        *error = Some(e.to_string());
                        None
                    }
                }
            }
            (Prompt::ConfirmPrefix { prefix }, FormKind::Confirm { value, .. }) => {
                Some(Event::PrefixConfirmed {
                    confirmed: *value,
                    prefix: prefix.clone(),
                })
            }
            (Prompt::CreateRecord, _) => Some(Event::RecordCreated { error: None }),
            (Prompt::EditRecord { id }, _) => Some(Event::RecordUpdated {
                id: id.clone(),
                error: None,
            }),
            (Prompt::ConfirmDelete { id }, FormKind::Confirm { value, .. }) => Some(if *value {
                Event::RecordDeleted {
                    id: id.clone(),
                    error: None,
                }
            } else {
                Event::EnterDetail { id: id.clone() }
            }),
            _ => None,
        }
    }

    /// Esc：放弃表单时投递的事件
    pub fn cancel(&self) -> Option<Event> {
        match &self.prompt {
            Prompt::CreateRecord => Some(Event::EnterList),
            Prompt::EditRecord { id } | Prompt::ConfirmDelete { id } => {
                Some(Event::EnterDetail { id: id.clone() })
            }
            Prompt::SelectPrefix { .. } | Prompt::CustomPrefix | Prompt::ConfirmPrefix { .. } => {
                None
            }
        }
    }
}
