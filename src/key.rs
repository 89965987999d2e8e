//! Key bindings shared by the field widget and the cells that host it.
//!
//! Bindings are declared with human readable key names such as `"ctrl+x"`
//! or `"enter"` and matched against incoming [`KeyMsg`]s.
//!
//! ```rust
//! use bubbletea_rows::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let clear = new_binding(vec![with_keys_str(&["ctrl+x"]), with_help("ctrl+x", "clear")]);
//! let msg = KeyMsg { key: KeyCode::Char('x'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &clear));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key together with the modifiers that must be held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key name like `"left"`, `"ctrl+u"` or `"alt+d"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(name: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "enter" => KeyCode::Enter,
            "esc" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => KeyCode::Char(ch),
                    _ => return None,
                }
            }
        };

        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key && self.modifiers == msg.modifiers
    }
}

/// Short help text shown next to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// The key as displayed, e.g. `"ctrl+x"`.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A named set of key presses that trigger one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// The key presses that trigger this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding can currently fire.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Replaces the help description, keeping the displayed key.
    pub fn set_help_desc(&mut self, desc: &str) {
        self.help.desc = desc.to_string();
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Adds key presses given by name. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys.extend(parsed))
}

/// Sets the help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Reports whether `msg` triggers `binding`.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key: code, modifiers }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(
            KeyPress::parse("enter"),
            Some(KeyPress {
                code: KeyCode::Enter,
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            KeyPress::parse("ctrl+alt+d"),
            Some(KeyPress {
                code: KeyCode::Char('d'),
                modifiers: KeyModifiers::CONTROL | KeyModifiers::ALT
            })
        );
        assert_eq!(KeyPress::parse("nonsense"), None);
        assert_eq!(KeyPress::parse(""), None);
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let b = new_binding(vec![with_keys_str(&["ctrl+x"])]);
        assert!(matches_binding(
            &key(KeyCode::Char('x'), KeyModifiers::CONTROL),
            &b
        ));
        assert!(!matches_binding(&key(KeyCode::Char('x'), KeyModifiers::NONE), &b));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = new_binding(vec![with_keys_str(&["enter"])]);
        let enter = key(KeyCode::Enter, KeyModifiers::NONE);
        b.set_enabled(false);
        assert!(!matches_binding(&enter, &b));
        b.set_enabled(true);
        assert!(matches_binding(&enter, &b));
    }

    #[test]
    fn test_help_text() {
        let b = new_binding(vec![with_keys_str(&["home"]), with_help("home", "line start")]);
        assert_eq!(b.help().key, "home");
        assert_eq!(b.help().desc, "line start");
        assert_eq!(b.keys().len(), 1);
    }

    #[test]
    fn test_set_help_desc_keeps_key() {
        let mut b = new_binding(vec![with_keys_str(&["enter"]), with_help("enter", "done")]);
        b.set_help_desc("next");
        assert_eq!(b.help().key, "enter");
        assert_eq!(b.help().desc, "next");
    }
}
