//! Core model implementation for the text-field cell.

use super::types::{CellState, TextFieldCellDelegate};
use crate::config::FieldConfig;
use crate::field;
use crate::row::{CellStyle, DetailText, Icon};
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Weak;

// Lets delegates shared by several cells tell them apart.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

/// Fallback reported for empty commits before any row was bound.
pub(super) const INITIAL_EMPTY_DEFAULT: &str = "1";

/// A reusable cell that shows a text field as its accessory.
///
/// The cell is configured with one row at a time and may be re-bound to a
/// different row whenever the table recycles it. It keeps no reference to
/// the row: edits travel up only through its
/// [`TextFieldCellDelegate`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_rows::cell::{Configurable, TextFieldCell, TextFieldCellDelegate};
/// use bubbletea_rows::row::TextFieldRow;
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Settings(Mutex<Vec<String>>);
///
/// impl TextFieldCellDelegate for Settings {
///     fn text_field_did_change(&self, _cell: &TextFieldCell, text: &str) {
///         self.0.lock().unwrap().push(text.to_string());
///     }
/// }
///
/// let settings = Arc::new(Settings::default());
/// let mut cell = TextFieldCell::new();
/// cell.set_delegate(&settings);
/// cell.configure(&TextFieldRow::new("Threads", "").with_placeholder("4"));
///
/// assert!(cell.clear());
/// assert_eq!(*settings.0.lock().unwrap(), vec!["4".to_string()]);
/// ```
pub struct TextFieldCell {
    /// Style of the title.
    pub title_style: Style,
    /// Style of the detail text.
    pub detail_style: Style,

    pub(super) id: usize,
    pub(super) config: FieldConfig,
    pub(super) field: Option<field::Model>,
    pub(super) empty_default: String,
    pub(super) delegate: Option<Weak<dyn TextFieldCellDelegate>>,
    pub(super) state: CellState,

    pub(super) title: String,
    pub(super) detail_text: Option<DetailText>,
    pub(super) cell_style: CellStyle,
    pub(super) icon: Option<Icon>,
    pub(super) accessory_attached: bool,
}

impl TextFieldCell {
    /// Reuse identifier shared by all text-field cells.
    pub const REUSE_IDENTIFIER: &'static str = "TextFieldCell";

    /// Creates a cell sized from the default [`FieldConfig`].
    pub fn new() -> Self {
        Self::with_config(FieldConfig::default())
    }

    /// Creates a cell whose field is sized and colored from `config`.
    ///
    /// The field itself is built on first use.
    pub fn with_config(config: FieldConfig) -> Self {
        Self {
            title_style: Style::new(),
            detail_style: Style::new().foreground(Color::from("240")),
            id: next_id(),
            config,
            field: None,
            empty_default: INITIAL_EMPTY_DEFAULT.to_string(),
            delegate: None,
            state: CellState::Unbound,
            title: String::new(),
            detail_text: None,
            cell_style: CellStyle::Default,
            icon: None,
            accessory_attached: false,
        }
    }

    /// Unique id of this cell instance.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Where the cell is in its reuse lifetime.
    pub fn state(&self) -> CellState {
        self.state
    }

    /// Value reported when the user commits an empty field.
    pub fn empty_default(&self) -> &str {
        &self.empty_default
    }

    /// Whether the field is attached as the accessory.
    pub fn accessory_attached(&self) -> bool {
        self.accessory_attached
    }

    /// Title copied from the bound row.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The embedded field, built on first access.
    pub fn text_field(&mut self) -> &mut field::Model {
        let config = &self.config;
        self.field.get_or_insert_with(|| field::with_config(config))
    }

    /// The embedded field if it has been built.
    pub fn text_field_if_loaded(&self) -> Option<&field::Model> {
        self.field.as_ref()
    }
}

impl Default for TextFieldCell {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextFieldCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextFieldCell")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("empty_default", &self.empty_default)
            .field("title", &self.title)
            .field("field", &self.field)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl BubbleTeaModel for TextFieldCell {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
