//! Reusable cell that edits a row's value in an embedded text field.
//!
//! # Binding
//!
//! A table calls [`Configurable::configure`] whenever it hands a cell a row.
//! For text-field rows the cell copies the value, placeholder and keyboard
//! type into its field and remembers the placeholder as the fallback for
//! empty commits. Rows without a text field are accepted too; the field then
//! keeps whatever it showed before.
//!
//! # Editing
//!
//! Forward messages to [`TextFieldCell::update`] while the cell is focused.
//! Keystrokes are filtered by [`accepts_replacement`]. When editing ends
//! (return, or [`Component::blur`](crate::Component::blur)) the cell reports
//! the field's text to its [`TextFieldCellDelegate`], substituting the
//! fallback for an empty field. The field itself keeps showing what the user
//! left in it; re-configure the cell from the updated row to show the
//! fallback. The clear control always reports the fallback.
//!
//! The cell never touches the row. Applying the reported text to the row,
//! and with it the row's own change closure, is up to the owner.

pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use model::TextFieldCell;
pub use types::{
    accepts_replacement, resolve_commit, CellState, Configurable, TextFieldCellDelegate,
};
