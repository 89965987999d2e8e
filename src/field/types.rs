//! Core types for the field component.

use bubbletea_rs::Msg;
use std::ops::Range;

/// Message carrying text to insert at the cursor, as if pasted.
///
/// Applications read the clipboard themselves and forward the text; the
/// field runs it through the same change check as typed characters.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// When the clear control is shown and usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearButtonMode {
    /// Never shown.
    Never,
    /// Shown while the field is being edited and has text.
    #[default]
    WhileEditing,
    /// Shown while the field is not being edited and has text.
    UnlessEditing,
    /// Shown whenever the field has text.
    Always,
}

/// Label of the return key. Only shows up in the submit binding's help.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKeyType {
    /// Plain return.
    Default,
    /// Finishes editing.
    #[default]
    Done,
    /// Moves to the next field.
    Next,
}

impl ReturnKeyType {
    /// Help text for the return key.
    pub fn label(self) -> &'static str {
        match self {
            ReturnKeyType::Default => "return",
            ReturnKeyType::Done => "done",
            ReturnKeyType::Next => "next",
        }
    }
}

/// Horizontal placement of text inside the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Flush left.
    Left,
    /// Flush right.
    #[default]
    Right,
}

/// Hooks the field consults before and after edits.
///
/// Every method has a permissive default, so implementors only override what
/// they care about. The owner of a field passes an implementation to
/// [`Model::update_with`](super::Model::update_with) for the duration of one
/// message.
pub trait TextFieldDelegate {
    /// Asks whether `range` (in characters) may be replaced by `replacement`.
    ///
    /// Deletions arrive with an empty replacement.
    fn should_change_characters(&mut self, _range: Range<usize>, _replacement: &str) -> bool {
        true
    }

    /// Asks whether the field may be emptied by the clear control.
    fn should_clear(&mut self) -> bool {
        true
    }

    /// Asks whether the return key should end editing.
    fn should_return(&mut self) -> bool {
        true
    }

    /// Told after focus was lost, with the text the field holds.
    fn did_end_editing(&mut self, _text: &str) {}
}

/// Delegate that allows everything and ignores notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl TextFieldDelegate for AcceptAll {}
