#![warn(missing_docs)]

//! # bubbletea-rows
//!
//! Declarative table rows and reusable cells for [bubbletea-rs] applications.
//!
//! [bubbletea-rs]: https://github.com/joshka/bubbletea-rs
//!
//! ## Overview
//!
//! A settings screen is a list of **rows**, small value objects that say what
//! to show, and a handful of **cells** that draw rows and take input. Cells
//! are recycled: the same cell is configured with one row after another as
//! the table scrolls.
//!
//! The crate's centre is the text-field pair:
//!
//! - [`TextFieldRow`] holds a title and an editable value. Changing the value
//!   hands back a command whose [`ValueChangedMsg`] comes back through
//!   `update`, where [`dispatch_value_changed`] runs the row's change closure;
//!   setting the same value again does nothing.
//! - [`TextFieldCell`] shows the value in an embedded [`field`], refuses
//!   keystrokes containing letters, and reports committed text to a
//!   [`TextFieldCellDelegate`]. Empty commits report the row's placeholder.
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_rows::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Default)]
//! struct Pending(Mutex<Option<String>>);
//!
//! impl TextFieldCellDelegate for Pending {
//!     fn text_field_did_change(&self, _cell: &TextFieldCell, text: &str) {
//!         *self.0.lock().unwrap() = Some(text.to_string());
//!     }
//! }
//!
//! struct App {
//!     row: TextFieldRow,
//!     cell: TextFieldCell,
//!     pending: Arc<Pending>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let row = TextFieldRow::new("Workers", "4")
//!             .with_placeholder("1")
//!             .with_on_change(|row| eprintln!("workers: {}", row.text_field_value()));
//!         let pending = Arc::new(Pending::default());
//!         let mut cell = TextFieldCell::new();
//!         cell.set_delegate(&pending);
//!         cell.configure(&row);
//!         let _ = cell.focus();
//!         (Self { row, cell, pending }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if dispatch_value_changed(&msg) {
//!             return None;
//!         }
//!         self.cell.update(msg);
//!         let committed = self.pending.0.lock().unwrap().take();
//!         let text = committed?;
//!         let cmd = self.row.set_text_field_value(text);
//!         self.cell.configure(&self.row);
//!         cmd
//!     }
//!
//!     fn view(&self) -> String {
//!         self.cell.view()
//!     }
//! }
//! ```

pub mod cell;
pub mod config;
pub mod error;
pub mod field;
pub mod key;
pub mod keyboard;
pub mod row;

use bubbletea_rs::Cmd;

/// Components that can take and give up keyboard focus.
///
/// A focused component receives key messages; a blurred one ignores them.
/// For a [`TextFieldCell`], blurring is also how an edit is committed.
///
/// ```rust
/// use bubbletea_rows::prelude::*;
///
/// let mut cell = TextFieldCell::new();
/// assert!(!cell.focused());
/// let _ = cell.focus();
/// assert!(cell.focused());
/// cell.blur();
/// assert!(!cell.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for the runtime.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use cell::{
    accepts_replacement, CellState, Configurable, TextFieldCell, TextFieldCellDelegate,
};
pub use config::FieldConfig;
pub use error::{Error, Result};
pub use field::{
    ClearButtonMode, Model as TextField, PasteMsg, ReturnKeyType, TextAlignment,
    TextFieldDelegate,
};
pub use keyboard::KeyboardType;
pub use row::{
    dispatch_value_changed, AccessoryType, CellStyle, DetailText, Icon, Row, RowStyle,
    TextFieldRow, TextFieldRowCompatible, ValueChangedMsg,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_rows::prelude::*;
///
/// let row = TextFieldRow::new("Timeout", "30").with_keyboard_type(KeyboardType::NumberPad);
/// let mut cell = TextFieldCell::new();
/// cell.configure(&row);
/// assert_eq!(cell.state(), CellState::Bound);
/// ```
pub mod prelude {
    pub use crate::cell::{
        accepts_replacement, CellState, Configurable, TextFieldCell, TextFieldCellDelegate,
    };
    pub use crate::config::FieldConfig;
    pub use crate::field::{ClearButtonMode, Model as TextField, PasteMsg, TextFieldDelegate};
    pub use crate::keyboard::KeyboardType;
    pub use crate::row::{
        dispatch_value_changed, DetailText, Icon, Row, RowStyle, TextFieldRow,
        TextFieldRowCompatible, ValueChangedMsg,
    };
    pub use crate::Component;
}
