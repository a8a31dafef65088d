use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        // Shift is already folded into the character itself
        let modifiers = match code {
            KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn char(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Parse names like `ArrowLeft`, `C-ArrowRight`, `A-x` or `q`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = s;
        loop {
            if let Some(r) = rest.strip_prefix("C-") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("A-") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "ArrowLeft" => KeyCode::Left,
            "ArrowRight" => KeyCode::Right,
            "ArrowUp" => KeyCode::Up,
            "ArrowDown" => KeyCode::Down,
            "Home" => KeyCode::Home,
            "End" => KeyCode::End,
            "Escape" => KeyCode::Esc,
            "Enter" => KeyCode::Enter,
            "Space" => KeyCode::Char(' '),
            _ => {
                let mut chars = rest.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return Err(Error::InvalidKey(s.to_string())),
                }
            }
        };

        Ok(Self::new(code, modifiers))
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            f.write_str("C-")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            f.write_str("A-")?;
        }
        match self.code {
            KeyCode::Left => f.write_str("ArrowLeft"),
            KeyCode::Right => f.write_str("ArrowRight"),
            KeyCode::Up => f.write_str("ArrowUp"),
            KeyCode::Down => f.write_str("ArrowDown"),
            KeyCode::Home => f.write_str("Home"),
            KeyCode::End => f.write_str("End"),
            KeyCode::Esc => f.write_str("Escape"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            _ => f.write_str("?"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Quit,
}

impl Action {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "move_left" => Ok(Action::MoveLeft),
            "move_right" => Ok(Action::MoveRight),
            "move_up" => Ok(Action::MoveUp),
            "move_down" => Ok(Action::MoveDown),
            "quit" => Ok(Action::Quit),
            _ => Err(Error::UnknownAction(name.to_string())),
        }
    }
}

/// Key to action table.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<Key, Action>,
}

impl Keymap {
    pub fn bind(&mut self, key: &str, action: &str) -> Result<()> {
        let key = Key::parse(key)?;
        let action = Action::from_name(action)?;
        self.bindings.insert(key, action);
        Ok(())
    }

    pub fn unbind(&mut self, key: &str) -> Result<()> {
        let key = Key::parse(key)?;
        self.bindings.remove(&key);
        Ok(())
    }

    pub fn lookup(&self, key: Key) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Apply configured overrides in order. Entries with an empty action
    /// remove the binding. Bad entries are skipped and returned.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<Error>
    where
        I: IntoIterator<Item = &'a (String, String)>,
    {
        let mut errors = Vec::new();
        for (key, action) in overrides {
            let result = if action.is_empty() {
                self.unbind(key)
            } else {
                self.bind(key, action)
            };
            if let Err(e) = result {
                tracing::warn!(%key, %action, error = %e, "skipping keybind");
                errors.push(e);
            }
        }
        errors
    }
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(Key::plain(KeyCode::Left), Action::MoveLeft);
        bindings.insert(Key::plain(KeyCode::Right), Action::MoveRight);
        bindings.insert(Key::plain(KeyCode::Up), Action::MoveUp);
        bindings.insert(Key::plain(KeyCode::Down), Action::MoveDown);
        bindings.insert(Key::ctrl('c'), Action::Quit);
        bindings.insert(Key::ctrl('q'), Action::Quit);
        bindings.insert(Key::char('q'), Action::Quit);
        Self { bindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arrows_move() {
        let keymap = Keymap::default();
        assert_eq!(keymap.lookup(Key::plain(KeyCode::Left)), Some(Action::MoveLeft));
        assert_eq!(keymap.lookup(Key::plain(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(keymap.lookup(Key::ctrl('c')), Some(Action::Quit));
        assert_eq!(keymap.lookup(Key::char('x')), None);
    }

    #[test]
    fn parse_named_keys() {
        assert_eq!(Key::parse("ArrowUp").unwrap(), Key::plain(KeyCode::Up));
        assert_eq!(Key::parse("q").unwrap(), Key::char('q'));
        assert_eq!(
            Key::parse("C-ArrowRight").unwrap(),
            Key::new(KeyCode::Right, KeyModifiers::CONTROL)
        );
        assert_eq!(
            Key::parse("C-A-x").unwrap(),
            Key::new(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT)
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!(matches!(Key::parse("Arrow"), Err(Error::InvalidKey(_))));
        assert!(matches!(Key::parse(""), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn display_uses_ctrl_prefix() {
        assert_eq!(Key::ctrl('c').to_string(), "C-c");
        assert_eq!(
            Key::new(KeyCode::Left, KeyModifiers::CONTROL).to_string(),
            "C-ArrowLeft"
        );
        assert_eq!(Key::char(' ').to_string(), "Space");
    }

    #[test]
    fn shift_is_ignored_for_chars() {
        let event = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(Key::from(event), Key::char('Q'));
    }

    #[test]
    fn bind_and_unbind() {
        let mut keymap = Keymap::default();
        keymap.bind("C-ArrowRight", "move_right").unwrap();
        assert_eq!(
            keymap.lookup(Key::new(KeyCode::Right, KeyModifiers::CONTROL)),
            Some(Action::MoveRight)
        );
        keymap.unbind("q").unwrap();
        assert_eq!(keymap.lookup(Key::char('q')), None);
    }

    #[test]
    fn bind_rejects_unknown_action() {
        let mut keymap = Keymap::default();
        assert!(matches!(
            keymap.bind("x", "delete_line"),
            Err(Error::UnknownAction(_))
        ));
    }

    #[test]
    fn overrides_skip_bad_entries() {
        let mut keymap = Keymap::default();
        let overrides = vec![
            ("h".to_string(), "move_left".to_string()),
            ("q".to_string(), String::new()),
            ("Nope".to_string(), "quit".to_string()),
        ];
        let errors = keymap.apply_overrides(&overrides);
        assert_eq!(errors.len(), 1);
        assert_eq!(keymap.lookup(Key::char('h')), Some(Action::MoveLeft));
        assert_eq!(keymap.lookup(Key::char('q')), None);
    }

    #[test]
    fn later_override_wins_across_spellings() {
        let mut keymap = Keymap::default();
        let overrides = vec![
            ("C-A-x".to_string(), "quit".to_string()),
            ("A-C-x".to_string(), "move_up".to_string()),
            ("C-q".to_string(), String::new()),
            ("C-q".to_string(), "move_down".to_string()),
        ];
        assert!(keymap.apply_overrides(&overrides).is_empty());
        let alt_ctrl = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(
            keymap.lookup(Key::new(KeyCode::Char('x'), alt_ctrl)),
            Some(Action::MoveUp)
        );
        assert_eq!(keymap.lookup(Key::ctrl('q')), Some(Action::MoveDown));
    }
}
