//! Core methods for the field Model.

use super::model::Model;
use super::types::{AcceptAll, ClearButtonMode, PasteMsg, ReturnKeyType, TextFieldDelegate};
use crate::key::matches_binding;
use crate::keyboard::KeyboardType;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::ops::Range;

impl Model {
    /// Replaces the whole text without consulting any delegate.
    ///
    /// Programmatic updates are not user edits; the cursor moves to the end.
    pub fn set_text(&mut self, s: &str) {
        self.value = s.chars().collect();
        self.pos = self.value.len();
    }

    /// Returns the current text.
    pub fn text(&self) -> String {
        self.value.iter().collect()
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Sets the placeholder shown while the field is empty.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the input class.
    pub fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        self.keyboard_type = keyboard_type;
    }

    /// Label of the return key.
    pub fn return_key_type(&self) -> ReturnKeyType {
        self.return_key_type
    }

    /// Sets the return key label and the submit binding's help with it.
    pub fn set_return_key_type(&mut self, return_key_type: ReturnKeyType) {
        self.return_key_type = return_key_type;
        self.key_map.submit.set_help_desc(return_key_type.label());
    }

    /// Cursor position as a character index.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value.len());
    }

    /// Moves the cursor to the start of the text.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end of the text.
    pub fn cursor_end(&mut self) {
        self.set_cursor(self.value.len());
    }

    /// Whether the field is being edited.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Starts an editing session.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Ends the editing session without telling anyone.
    pub fn blur(&mut self) {
        self.blur_with(&mut AcceptAll);
    }

    /// Ends the editing session and reports the final text to `delegate`.
    ///
    /// Does nothing when the field is not focused.
    pub fn blur_with(&mut self, delegate: &mut dyn TextFieldDelegate) {
        if !self.focus {
            return;
        }
        self.focus = false;
        delegate.did_end_editing(&self.text());
    }

    /// Whether the clear control is currently shown.
    pub fn clear_button_visible(&self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        match self.clear_button_mode {
            ClearButtonMode::Never => false,
            ClearButtonMode::WhileEditing => self.focus,
            ClearButtonMode::UnlessEditing => !self.focus,
            ClearButtonMode::Always => true,
        }
    }

    /// Presses the clear control.
    ///
    /// The text is emptied only if `delegate` agrees. Returns whether it did.
    pub fn clear_with(&mut self, delegate: &mut dyn TextFieldDelegate) -> bool {
        if !delegate.should_clear() {
            return false;
        }
        self.value.clear();
        self.pos = 0;
        true
    }

    /// Replaces the characters in `range` with `replacement` if `delegate`
    /// allows it. Returns whether the replacement was applied.
    ///
    /// The range is clamped to the text. The cursor ends up after the
    /// inserted text.
    pub fn replace_range(
        &mut self,
        range: Range<usize>,
        replacement: &str,
        delegate: &mut dyn TextFieldDelegate,
    ) -> bool {
        let end = range.end.min(self.value.len());
        let start = range.start.min(end);
        if !delegate.should_change_characters(start..end, replacement) {
            return false;
        }
        let inserted: Vec<char> = replacement.chars().collect();
        let count = inserted.len();
        self.value.splice(start..end, inserted);
        self.pos = start + count;
        true
    }

    /// Handles a message with a permissive delegate.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update_with(msg, &mut AcceptAll)
    }

    /// Handles a message, consulting `delegate` before changing anything.
    ///
    /// Unfocused fields ignore all input.
    ///
    /// ```rust
    /// use bubbletea_rows::field::{new, TextFieldDelegate};
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// struct DigitsOnly;
    /// impl TextFieldDelegate for DigitsOnly {
    ///     fn should_change_characters(&mut self, _r: std::ops::Range<usize>, s: &str) -> bool {
    ///         s.chars().all(|c| c.is_ascii_digit())
    ///     }
    /// }
    ///
    /// let mut field = new();
    /// field.focus();
    /// for ch in ['4', 'x', '2'] {
    ///     let msg = KeyMsg { key: KeyCode::Char(ch), modifiers: KeyModifiers::NONE };
    ///     field.update_with(Box::new(msg), &mut DigitsOnly);
    /// }
    /// assert_eq!(field.text(), "42");
    /// ```
    pub fn update_with(&mut self, msg: Msg, delegate: &mut dyn TextFieldDelegate) -> Option<Cmd> {
        if !self.focus {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.handle_control_keys(key_msg, delegate) {
                return None;
            }
            self.handle_deletion_keys(key_msg, delegate);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg, delegate);
        } else if let Some(paste) = msg.downcast_ref::<PasteMsg>() {
            let pos = self.pos;
            self.replace_range(pos..pos, &paste.0, delegate);
        }

        None
    }

    /// Return and clear. Returns true when the key was consumed.
    fn handle_control_keys(
        &mut self,
        key_msg: &KeyMsg,
        delegate: &mut dyn TextFieldDelegate,
    ) -> bool {
        if matches_binding(key_msg, &self.key_map.submit) {
            if delegate.should_return() {
                self.blur_with(delegate);
            }
            return true;
        }
        if matches_binding(key_msg, &self.key_map.clear) {
            if self.clear_button_visible() {
                self.clear_with(delegate);
            }
            return true;
        }
        false
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg, delegate: &mut dyn TextFieldDelegate) {
        if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            if self.pos > 0 {
                let pos = self.pos;
                self.replace_range(pos - 1..pos, "", delegate);
            }
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            if self.pos < self.value.len() {
                let pos = self.pos;
                self.replace_range(pos..pos + 1, "", delegate);
            }
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.character_backward) {
            if self.pos > 0 {
                self.set_cursor(self.pos - 1);
            }
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg, delegate: &mut dyn TextFieldDelegate) {
        // Shift is carried in the character's case; ctrl/alt chords are commands.
        if let KeyCode::Char(ch) = key_msg.key {
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                let pos = self.pos;
                self.replace_range(pos..pos, ch.encode_utf8(&mut [0; 4]), delegate);
            }
        }
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
