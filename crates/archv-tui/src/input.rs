use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};
use crate::pages::Page;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextPage,
    PrevPage,
    GoTo(Page),
    /// Stow or reveal the navigation links
    ToggleNav,
    ToggleTheme,
    /// Flip reduced motion at runtime
    ToggleMotion,
    /// Re-run the current page's entrance animations
    Replay,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);
    if let Some(action) = keymap.get(&binding) {
        return *action;
    }

    // Some terminals report uppercase letters without the shift modifier
    if let KeyCode::Char(c) = key.code {
        if c.is_ascii_uppercase() && key.modifiers == KeyModifiers::NONE {
            if let Some(action) = keymap.get(&KeyBinding::shift(key.code)) {
                return *action;
            }
        }
    }

    Action::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_default_bindings() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &keymap),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Right, KeyModifiers::NONE), &keymap),
            Action::NextPage
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3'), KeyModifiers::NONE), &keymap),
            Action::GoTo(Page::Security)
        );
    }

    #[test]
    fn test_uppercase_without_shift() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('L'), KeyModifiers::SHIFT), &keymap),
            Action::GoTo(Page::Login)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('L'), KeyModifiers::NONE), &keymap),
            Action::GoTo(Page::Login)
        );
    }

    #[test]
    fn test_unbound_key() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('z'), KeyModifiers::NONE), &keymap),
            Action::None
        );
    }
}
