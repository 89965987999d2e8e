//! Core model implementation for the field component.

use super::keymap::{default_key_map, KeyMap};
use super::types::{ClearButtonMode, ReturnKeyType, TextAlignment};
use crate::config::FieldConfig;
use crate::keyboard::KeyboardType;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;

/// A single-line editable text field.
///
/// The field is the editing surface a [`TextFieldCell`](crate::cell::TextFieldCell)
/// shows as its accessory. It owns the text, the cursor and the focus flag,
/// and asks a [`TextFieldDelegate`](super::TextFieldDelegate) before every
/// change so the host can veto keystrokes.
///
/// # Examples
///
/// ```rust
/// use bubbletea_rows::field::new;
///
/// let mut field = new();
/// field.set_text("12");
/// field.set_placeholder("0");
/// assert_eq!(field.text(), "12");
/// assert_eq!(field.position(), 2);
/// ```
pub struct Model {
    /// Placeholder shown while the text is empty.
    pub placeholder: String,
    /// Input class copied from the bound row.
    pub keyboard_type: KeyboardType,
    /// When the clear control is available.
    pub clear_button_mode: ClearButtonMode,
    pub(super) return_key_type: ReturnKeyType,
    /// Where text sits inside the field.
    pub alignment: TextAlignment,

    /// Style of entered text.
    pub text_style: Style,
    /// Style of the placeholder.
    pub placeholder_style: Style,
    /// Style of the character under the cursor.
    pub cursor_style: Style,

    /// KeyMap encodes the keybindings.
    pub key_map: KeyMap,

    pub(super) value: Vec<char>,
    pub(super) pos: usize,
    pub(super) focus: bool,

    /// Columns available for text.
    pub(super) width: usize,
    /// Blank columns on each side of the text.
    pub(super) padding: usize,
    pub(super) border: bool,
}

/// Creates a field sized and colored from the default [`FieldConfig`].
pub fn new() -> Model {
    with_config(&FieldConfig::default())
}

/// Creates a field sized and colored from `config`.
pub fn with_config(config: &FieldConfig) -> Model {
    Model {
        placeholder: String::new(),
        keyboard_type: KeyboardType::Default,
        clear_button_mode: ClearButtonMode::WhileEditing,
        return_key_type: ReturnKeyType::Done,
        alignment: TextAlignment::Right,
        text_style: config.text_style(),
        placeholder_style: config.placeholder_style(),
        cursor_style: Style::new().reverse(true),
        key_map: default_key_map(),
        value: Vec::new(),
        pos: 0,
        focus: false,
        width: config.text_width(),
        padding: usize::from(config.padding),
        border: config.border,
    }
}

impl Default for Model {
    fn default() -> Self {
        new()
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("text", &self.text())
            .field("placeholder", &self.placeholder)
            .field("keyboard_type", &self.keyboard_type)
            .field("pos", &self.pos)
            .field("focus", &self.focus)
            .finish()
    }
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
