//! Declarative rows.
//!
//! A row is a value object describing one table entry: what to show and which
//! cell type shows it. Cells read rows through the traits in this module and
//! never keep a reference to them.
//!
//! Capabilities beyond the basic [`Row`]/[`RowStyle`] pair are exposed as
//! facets. A cell that edits text asks [`RowStyle::as_text_field`] and only
//! populates its field when the row answers with a
//! [`TextFieldRowCompatible`] view of itself.

pub mod text_field_row;
pub mod types;

pub use text_field_row::{dispatch_value_changed, RowAction, TextFieldRow, ValueChangedMsg};
pub use types::{AccessoryType, CellStyle, DetailText, Icon};

use crate::keyboard::KeyboardType;
use bubbletea_rs::Cmd;

/// Content every row provides.
pub trait Row: Send + Sync {
    /// Title of the row.
    fn text(&self) -> &str;

    /// Secondary text, if any.
    fn detail_text(&self) -> Option<&DetailText>;
}

/// How a row wants to be displayed.
pub trait RowStyle: Row {
    /// Reuse identifier of the cell type that displays this row.
    fn cell_reuse_identifier(&self) -> &str;

    /// Layout of the title and detail text.
    fn cell_style(&self) -> CellStyle {
        self.detail_text()
            .map(DetailText::style)
            .unwrap_or_default()
    }

    /// Icon drawn in front of the title.
    fn icon(&self) -> Option<&Icon> {
        None
    }

    /// Trailing accessory.
    fn accessory_type(&self) -> AccessoryType {
        AccessoryType::None
    }

    /// Whether the table lets the user select this row.
    fn is_selectable(&self) -> bool {
        true
    }

    /// The text-field facet of this row, when it has one.
    fn as_text_field(&self) -> Option<&dyn TextFieldRowCompatible> {
        None
    }
}

/// Rows whose content is edited in a text field.
pub trait TextFieldRowCompatible: Row {
    /// Current content of the field.
    fn text_field_value(&self) -> &str;

    /// Hint shown while the field is empty; also the value reported for an
    /// empty commit.
    fn placeholder(&self) -> &str;

    /// Input class of the field.
    fn keyboard_type(&self) -> KeyboardType;

    /// Stores a new value. Returns a command when the change has to be
    /// announced; `None` when the value is unchanged or nobody listens.
    fn set_text_field_value(&mut self, value: String) -> Option<Cmd>;
}
