//! Traits and small types for text-field cells.

use super::model::TextFieldCell;
use crate::row::RowStyle;

/// Receives the text a [`TextFieldCell`] commits.
///
/// Cells hold their delegate weakly, so implementors are shared through an
/// `Arc` owned elsewhere (usually by the application model). Methods take
/// `&self`; use interior mutability to record what arrives.
pub trait TextFieldCellDelegate: Send + Sync {
    /// Tells the delegate that `cell` produced new text.
    fn text_field_did_change(&self, cell: &TextFieldCell, text: &str);
}

/// Binding of a row into a reusable cell.
///
/// This is the single entry point a table uses for every row/cell pair, so
/// it takes the row by its generic interface. Cells look for the facets
/// they understand and ignore the rest.
pub trait Configurable {
    /// Copies what the cell needs from `row`.
    fn configure(&mut self, row: &dyn RowStyle);
}

/// Where a cell is in its reuse lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// Never configured.
    #[default]
    Unbound,
    /// Showing a row.
    Bound,
    /// The user changed the text and has not committed yet.
    Editing,
}

/// Keystroke filter: accepts a proposed replacement only if it contains no
/// alphabetic character.
///
/// Only the incoming text is inspected, not the text it would produce.
/// Deletions propose an empty replacement and always pass.
///
/// ```rust
/// use bubbletea_rows::cell::accepts_replacement;
///
/// assert!(accepts_replacement("12.5"));
/// assert!(accepts_replacement(""));
/// assert!(!accepts_replacement("1e3"));
/// ```
pub fn accepts_replacement(replacement: &str) -> bool {
    !replacement.chars().any(char::is_alphabetic)
}

/// The text reported for a commit: the field's text, or `fallback` when
/// the field is empty.
pub fn resolve_commit<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}
