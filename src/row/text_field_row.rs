//! A row whose value is edited in a text field.
//!
//! ```rust
//! use bubbletea_rows::keyboard::KeyboardType;
//! use bubbletea_rows::row::TextFieldRow;
//!
//! let mut row = TextFieldRow::new("Retries", "3")
//!     .with_placeholder("1")
//!     .with_keyboard_type(KeyboardType::NumberPad)
//!     .with_on_change(|row| println!("{} is now {}", row.text(), row.text_field_value()));
//!
//! // Unchanged values produce no command.
//! assert!(row.set_text_field_value("3").is_none());
//! // A change hands back a command; the runtime turns it into a
//! // `ValueChangedMsg` that the owner's `update` dispatches.
//! assert!(row.set_text_field_value("5").is_some());
//! assert_eq!(row.text_field_value(), "5");
//! ```

use super::types::{AccessoryType, CellStyle, DetailText, Icon};
use super::{Row, RowStyle, TextFieldRowCompatible};
use crate::cell::TextFieldCell;
use crate::keyboard::KeyboardType;
use bubbletea_rs::{Cmd, Msg};
use std::fmt;
use std::sync::Arc;

/// Closure run after a row's value changed. Receives the row as it was right
/// after the change.
pub type RowAction = Arc<dyn Fn(&TextFieldRow) + Send + Sync>;

/// A row with a title and an editable text value.
///
/// Two rows compare equal when their title, value, placeholder, keyboard
/// type and icon are equal. Detail text and the change closure do not take
/// part, so a table can diff rows that were rebuilt with fresh closures.
#[derive(Clone)]
pub struct TextFieldRow {
    text: String,
    detail_text: Option<DetailText>,
    text_field_value: String,
    placeholder: String,
    keyboard_type: KeyboardType,
    icon: Option<Icon>,
    on_change: Option<RowAction>,
}

impl TextFieldRow {
    /// Creates a row with a title and an initial value.
    pub fn new(text: impl Into<String>, text_field_value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail_text: None,
            text_field_value: text_field_value.into(),
            placeholder: String::new(),
            keyboard_type: KeyboardType::Default,
            icon: None,
            on_change: None,
        }
    }

    /// Sets the detail text.
    pub fn with_detail_text(mut self, detail_text: DetailText) -> Self {
        self.detail_text = Some(detail_text);
        self
    }

    /// Sets the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the input class.
    pub fn with_keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the closure run after every change of the value.
    pub fn with_on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(&TextFieldRow) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(on_change));
        self
    }

    /// Title of the row.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current value.
    pub fn text_field_value(&self) -> &str {
        &self.text_field_value
    }

    /// Placeholder, also used as the empty-value fallback by cells.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Input class.
    pub fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    /// Replaces the placeholder. Does not notify.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Replaces the input class. Does not notify.
    pub fn set_keyboard_type(&mut self, keyboard_type: KeyboardType) {
        self.keyboard_type = keyboard_type;
    }

    /// Stores a new value.
    ///
    /// Returns `None` when `value` equals the current value. Otherwise the
    /// value is stored immediately and, if the row has a change closure, a
    /// command is returned that yields a [`ValueChangedMsg`] carrying a
    /// snapshot of the updated row. Hand the command back to the bubbletea
    /// runtime from `update`; when the message comes back, pass it to
    /// [`dispatch_value_changed`] so the closure runs on the UI loop, after
    /// the current update has finished.
    pub fn set_text_field_value(&mut self, value: impl Into<String>) -> Option<Cmd> {
        let value = value.into();
        if value == self.text_field_value {
            return None;
        }
        self.text_field_value = value;

        self.on_change.as_ref()?;
        let snapshot = self.clone();
        tracing::trace!(row = %self.text, value = %self.text_field_value, "deferring change action");
        Some(Box::pin(async move {
            Some(Box::new(ValueChangedMsg { row: snapshot }) as Msg)
        }))
    }
}

/// Message produced by the command [`TextFieldRow::set_text_field_value`]
/// returns. Carries the row as it was right after the change.
#[derive(Debug, Clone)]
pub struct ValueChangedMsg {
    row: TextFieldRow,
}

impl ValueChangedMsg {
    /// The row snapshot.
    pub fn row(&self) -> &TextFieldRow {
        &self.row
    }

    /// Runs the row's change closure with the snapshot.
    pub fn perform(&self) {
        if let Some(action) = &self.row.on_change {
            tracing::trace!(row = %self.row.text, "running change action");
            action(&self.row);
        }
    }
}

impl From<ValueChangedMsg> for Msg {
    fn from(msg: ValueChangedMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// Runs the change closure if `msg` is a [`ValueChangedMsg`].
///
/// Call this from the application's `update`. Returns whether the message
/// was a row change.
pub fn dispatch_value_changed(msg: &Msg) -> bool {
    match msg.downcast_ref::<ValueChangedMsg>() {
        Some(changed) => {
            changed.perform();
            true
        }
        None => false,
    }
}

impl PartialEq for TextFieldRow {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
            && self.text_field_value == other.text_field_value
            && self.placeholder == other.placeholder
            && self.keyboard_type == other.keyboard_type
            && self.icon == other.icon
    }
}

impl fmt::Debug for TextFieldRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextFieldRow")
            .field("text", &self.text)
            .field("detail_text", &self.detail_text)
            .field("text_field_value", &self.text_field_value)
            .field("placeholder", &self.placeholder)
            .field("keyboard_type", &self.keyboard_type)
            .field("icon", &self.icon)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Row for TextFieldRow {
    fn text(&self) -> &str {
        &self.text
    }

    fn detail_text(&self) -> Option<&DetailText> {
        self.detail_text.as_ref()
    }
}

impl RowStyle for TextFieldRow {
    fn cell_reuse_identifier(&self) -> &str {
        TextFieldCell::REUSE_IDENTIFIER
    }

    fn cell_style(&self) -> CellStyle {
        CellStyle::Subtitle
    }

    fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    fn accessory_type(&self) -> AccessoryType {
        AccessoryType::None
    }

    fn is_selectable(&self) -> bool {
        false
    }

    fn as_text_field(&self) -> Option<&dyn TextFieldRowCompatible> {
        Some(self)
    }
}

impl TextFieldRowCompatible for TextFieldRow {
    fn text_field_value(&self) -> &str {
        &self.text_field_value
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn keyboard_type(&self) -> KeyboardType {
        self.keyboard_type
    }

    fn set_text_field_value(&mut self, value: String) -> Option<Cmd> {
        TextFieldRow::set_text_field_value(self, value)
    }
}
