//! Binding, editing and commit handling for the text-field cell.

use super::model::TextFieldCell;
use super::types::{
    accepts_replacement, resolve_commit, CellState, Configurable, TextFieldCellDelegate,
};
use crate::field::{self, TextFieldDelegate};
use crate::row::RowStyle;
use crate::Component;
use bubbletea_rs::{Cmd, Msg};
use std::ops::Range;
use std::sync::{Arc, Weak};
use tracing::debug;

/// The cell's answers to its field while one message is processed.
///
/// The field is borrowed mutably during that time, so anything meant for the
/// cell's own delegate is collected here and delivered afterwards.
struct EditSession<'a> {
    empty_default: &'a str,
    changed: bool,
    report: Option<String>,
}

/// What happened during an [`EditSession`].
struct Outcome {
    changed: bool,
    report: Option<String>,
}

impl<'a> EditSession<'a> {
    fn new(empty_default: &'a str) -> Self {
        Self {
            empty_default,
            changed: false,
            report: None,
        }
    }

    fn finish(self) -> Outcome {
        Outcome {
            changed: self.changed,
            report: self.report,
        }
    }
}

impl TextFieldDelegate for EditSession<'_> {
    fn should_change_characters(&mut self, range: Range<usize>, replacement: &str) -> bool {
        if !accepts_replacement(replacement) {
            debug!(?range, replacement, "rejected keystroke");
            return false;
        }
        self.changed = true;
        true
    }

    fn should_clear(&mut self) -> bool {
        self.report = Some(self.empty_default.to_string());
        true
    }

    fn should_return(&mut self) -> bool {
        true
    }

    fn did_end_editing(&mut self, text: &str) {
        self.report = Some(resolve_commit(text, self.empty_default).to_string());
    }
}

impl TextFieldCell {
    /// Registers the delegate. The cell keeps only a weak reference.
    pub fn set_delegate<D>(&mut self, delegate: &Arc<D>)
    where
        D: TextFieldCellDelegate + 'static,
    {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak as Weak<dyn TextFieldCellDelegate>);
    }

    /// Forgets the delegate.
    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if one is set and still alive.
    pub fn delegate(&self) -> Option<Arc<dyn TextFieldCellDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    /// Forwards a message to the field while it is focused.
    ///
    /// Keystrokes containing letters are refused. Return ends editing and
    /// reports the text, or the fallback when the text is empty. The clear
    /// key reports the fallback.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.with_session(|field, session| field.update_with(msg, session))
    }

    /// Presses the clear control.
    ///
    /// Reports the fallback to the delegate, empties the field and returns
    /// true.
    pub fn clear(&mut self) -> bool {
        self.with_session(|field, session| field.clear_with(session))
    }

    /// Runs `f` with the field and a fresh session, then applies what the
    /// session collected.
    fn with_session<R>(
        &mut self,
        f: impl FnOnce(&mut field::Model, &mut dyn TextFieldDelegate) -> R,
    ) -> R {
        let mut session = EditSession::new(&self.empty_default);
        let config = &self.config;
        let field = self.field.get_or_insert_with(|| field::with_config(config));
        let result = f(field, &mut session);
        let outcome = session.finish();
        self.apply(outcome);
        result
    }

    fn apply(&mut self, outcome: Outcome) {
        if outcome.changed && self.state == CellState::Bound {
            self.state = CellState::Editing;
        }
        if let Some(text) = outcome.report {
            if self.state == CellState::Editing {
                self.state = CellState::Bound;
            }
            self.call_delegate(&text);
        }
    }

    fn call_delegate(&self, changed_text: &str) {
        match self.delegate() {
            Some(delegate) => {
                debug!(cell = self.id, text = changed_text, "text field did change");
                delegate.text_field_did_change(self, changed_text);
            }
            None => debug!(cell = self.id, text = changed_text, "no delegate, change dropped"),
        }
    }
}

impl Configurable for TextFieldCell {
    /// Binds `row` into this cell.
    ///
    /// Text-field rows overwrite the field's text, placeholder and keyboard
    /// type and set the empty-value fallback to the placeholder. Other rows
    /// leave the field as it was. Either way the field is attached as the
    /// accessory and any edit in progress is dropped without a report.
    fn configure(&mut self, row: &dyn RowStyle) {
        self.title = row.text().to_string();
        self.detail_text = row.detail_text().cloned();
        self.cell_style = row.cell_style();
        self.icon = row.icon().cloned();

        let field = self.text_field();
        field.blur();

        match row.as_text_field() {
            Some(text_row) => {
                field.set_text(text_row.text_field_value());
                field.set_placeholder(text_row.placeholder());
                field.set_keyboard_type(text_row.keyboard_type());
                self.empty_default = text_row.placeholder().to_string();
                debug!(cell = self.id, row = row.text(), "configured text field row");
            }
            None => {
                debug!(cell = self.id, row = row.text(), "row has no text field, content kept");
            }
        }

        self.accessory_attached = true;
        self.state = CellState::Bound;
    }
}

impl Component for TextFieldCell {
    /// Starts editing.
    fn focus(&mut self) -> Option<Cmd> {
        self.text_field().focus();
        None
    }

    /// Ends editing and reports the committed text.
    fn blur(&mut self) {
        self.with_session(|field, session| field.blur_with(session));
    }

    fn focused(&self) -> bool {
        self.field.as_ref().is_some_and(field::Model::focused)
    }
}
