//! Key bindings for the field component.

use super::types::ReturnKeyType;
use crate::key::{new_binding, with_help, with_keys_str, Binding};

/// KeyMap is the key bindings for different actions within the field.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Move cursor one character right.
    pub character_forward: Binding,
    /// Move cursor one character left.
    pub character_backward: Binding,
    /// Delete one character backward.
    pub delete_character_backward: Binding,
    /// Delete one character forward.
    pub delete_character_forward: Binding,
    /// Move to start of line.
    pub line_start: Binding,
    /// Move to end of line.
    pub line_end: Binding,
    /// Press the clear control.
    pub clear: Binding,
    /// Return key; ends editing when the delegate agrees.
    pub submit: Binding,
}

/// The default set of key bindings for the field.
pub fn default_key_map() -> KeyMap {
    KeyMap {
        character_forward: new_binding(vec![with_keys_str(&["right", "ctrl+f"])]),
        character_backward: new_binding(vec![with_keys_str(&["left", "ctrl+b"])]),
        delete_character_backward: new_binding(vec![with_keys_str(&["backspace", "ctrl+h"])]),
        delete_character_forward: new_binding(vec![with_keys_str(&["delete", "ctrl+d"])]),
        line_start: new_binding(vec![with_keys_str(&["home", "ctrl+a"])]),
        line_end: new_binding(vec![with_keys_str(&["end", "ctrl+e"])]),
        clear: new_binding(vec![
            with_keys_str(&["ctrl+x"]),
            with_help("ctrl+x", "clear"),
        ]),
        submit: new_binding(vec![
            with_keys_str(&["enter"]),
            with_help("enter", ReturnKeyType::default().label()),
        ]),
    }
}
