//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift（`?` 在多数布局下需要 Shift）。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT),
            _ => key.modifiers,
        };
        modifiers == self.modifiers && key.code == self.code
    }

    /// 匹配任意一个绑定
    pub fn any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
        bindings.iter().any(|b| b.matches(key))
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 列表导航
    pub const UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const CONFIRM: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 是 / 否
    pub const TOGGLE: [KeyBinding; 5] = [
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('h')),
        KeyBinding::key(KeyCode::Char('l')),
        KeyBinding::key(KeyCode::Tab),
    ];
    pub const YES: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const NO: KeyBinding = KeyBinding::key(KeyCode::Char('n'));

    // 记录操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const ACTION_LIST: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
}
