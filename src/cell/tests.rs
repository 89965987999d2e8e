//! Tests for the text-field cell.

use super::*;
use crate::field::{ClearButtonMode, PasteMsg};
use crate::keyboard::KeyboardType;
use crate::row::{DetailText, Icon, Row, RowStyle, TextFieldRow};
use crate::Component;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Recorder {
    changes: Mutex<Vec<(usize, String)>>,
}

impl Recorder {
    fn texts(&self) -> Vec<String> {
        self.changes
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }
}

impl TextFieldCellDelegate for Recorder {
    fn text_field_did_change(&self, cell: &TextFieldCell, text: &str) {
        self.changes
            .lock()
            .unwrap()
            .push((cell.id(), text.to_string()));
    }
}

/// A row with no text field.
struct TitleRow(String);

impl Row for TitleRow {
    fn text(&self) -> &str {
        &self.0
    }

    fn detail_text(&self) -> Option<&DetailText> {
        None
    }
}

impl RowStyle for TitleRow {
    fn cell_reuse_identifier(&self) -> &str {
        "TitleCell"
    }
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn typed(ch: char) -> Msg {
    key(KeyCode::Char(ch))
}

fn bound_cell(value: &str, placeholder: &str) -> (TextFieldCell, Arc<Recorder>) {
    let recorder = Arc::new(Recorder::default());
    let mut cell = TextFieldCell::new();
    cell.set_delegate(&recorder);
    cell.configure(&TextFieldRow::new("Amount", value).with_placeholder(placeholder));
    (cell, recorder)
}

#[test]
fn test_new_cell_is_unbound() {
    let cell = TextFieldCell::new();
    assert_eq!(cell.state(), CellState::Unbound);
    assert_eq!(cell.empty_default(), "1");
    assert!(!cell.accessory_attached());
    assert!(cell.text_field_if_loaded().is_none());
    assert!(!cell.focused());
}

#[test]
fn test_cells_have_distinct_ids() {
    let a = TextFieldCell::new();
    let b = TextFieldCell::new();
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_configure_copies_text_field_facet() {
    let mut cell = TextFieldCell::new();
    let row = TextFieldRow::new("Port", "8080")
        .with_placeholder("80")
        .with_keyboard_type(KeyboardType::NumberPad);
    cell.configure(&row);

    assert_eq!(cell.state(), CellState::Bound);
    assert_eq!(cell.empty_default(), "80");
    assert_eq!(cell.title(), "Port");
    assert!(cell.accessory_attached());
    let field = cell.text_field();
    assert_eq!(field.text(), "8080");
    assert_eq!(field.placeholder, "80");
    assert_eq!(field.keyboard_type, KeyboardType::NumberPad);
}

#[test]
fn test_reuse_leaves_no_residue() {
    let mut cell = TextFieldCell::new();
    cell.configure(&TextFieldRow::new("R1", "5").with_placeholder("1"));
    cell.configure(&TextFieldRow::new("R2", "").with_placeholder("9"));

    assert_eq!(cell.empty_default(), "9");
    assert_eq!(cell.title(), "R2");
    let field = cell.text_field();
    assert_eq!(field.text(), "");
    assert_eq!(field.placeholder, "9");
    assert_eq!(field.keyboard_type, KeyboardType::Default);
}

#[test]
fn test_non_text_row_keeps_field_content() {
    let mut cell = TextFieldCell::new();
    cell.configure(&TextFieldRow::new("R1", "5").with_placeholder("1"));
    cell.configure(&TitleRow("About".to_string()));

    assert_eq!(cell.state(), CellState::Bound);
    assert!(cell.accessory_attached());
    assert_eq!(cell.title(), "About");
    assert_eq!(cell.empty_default(), "1");
    assert_eq!(cell.text_field().text(), "5");
}

#[test]
fn test_non_text_row_on_fresh_cell() {
    let mut cell = TextFieldCell::new();
    cell.configure(&TitleRow("About".to_string()));
    assert!(cell.accessory_attached());
    assert_eq!(cell.empty_default(), "1");
    assert_eq!(cell.text_field().text(), "");
}

#[test]
fn test_filter_rejects_letters() {
    assert!(!accepts_replacement("a"));
    assert!(!accepts_replacement("12x"));
    assert!(!accepts_replacement("é"));
    assert!(!accepts_replacement("Ж"));
    assert!(accepts_replacement("0123456789"));
    assert!(accepts_replacement("-+.,/ %$"));
    assert!(accepts_replacement(""));
}

#[test]
fn test_resolve_commit() {
    assert_eq!(resolve_commit("", "N/A"), "N/A");
    assert_eq!(resolve_commit("7", "N/A"), "7");
}

#[test]
fn test_typing_filters_letters() {
    let (mut cell, _rec) = bound_cell("", "0");
    cell.focus();
    for ch in ['1', 'a', '.', 'B', '5'] {
        cell.update(typed(ch));
    }
    assert_eq!(cell.text_field().text(), "1.5");
}

#[test]
fn test_paste_with_letter_is_rejected_whole() {
    let (mut cell, _rec) = bound_cell("1", "0");
    cell.focus();
    cell.update(Box::new(PasteMsg("2a3".to_string())));
    assert_eq!(cell.text_field().text(), "1");
    cell.update(Box::new(PasteMsg("23".to_string())));
    assert_eq!(cell.text_field().text(), "123");
}

#[test]
fn test_first_keystroke_enters_editing() {
    let (mut cell, _rec) = bound_cell("", "0");
    cell.focus();
    assert_eq!(cell.state(), CellState::Bound);
    cell.update(typed('x'));
    assert_eq!(cell.state(), CellState::Bound);
    cell.update(typed('4'));
    assert_eq!(cell.state(), CellState::Editing);
}

#[test]
fn test_return_commits_text() {
    let (mut cell, rec) = bound_cell("", "0");
    cell.focus();
    cell.update(typed('4'));
    cell.update(typed('2'));
    cell.update(key(KeyCode::Enter));

    assert_eq!(rec.texts(), vec!["42".to_string()]);
    assert_eq!(cell.state(), CellState::Bound);
    assert!(!cell.focused());
}

#[test]
fn test_empty_commit_reports_fallback_but_field_stays_empty() {
    let (mut cell, rec) = bound_cell("3", "N/A");
    cell.focus();
    cell.update(key(KeyCode::Backspace));
    cell.blur();

    assert_eq!(rec.texts(), vec!["N/A".to_string()]);
    // The reported value and the displayed text disagree until the owner
    // re-configures the cell.
    assert_eq!(cell.text_field().text(), "");
}

#[test]
fn test_blur_without_focus_reports_nothing() {
    let (mut cell, rec) = bound_cell("3", "0");
    cell.blur();
    assert!(rec.texts().is_empty());
}

#[test]
fn test_clear_reports_fallback_and_returns_true() {
    let (mut cell, rec) = bound_cell("12", "0");
    assert!(cell.clear());
    assert_eq!(rec.texts(), vec!["0".to_string()]);
    assert_eq!(cell.text_field().text(), "");
}

#[test]
fn test_clear_key_while_editing() {
    let (mut cell, rec) = bound_cell("12", "0");
    cell.focus();
    cell.update(typed('3'));
    assert_eq!(cell.state(), CellState::Editing);
    cell.update(Box::new(KeyMsg {
        key: KeyCode::Char('x'),
        modifiers: KeyModifiers::CONTROL,
    }));

    assert_eq!(rec.texts(), vec!["0".to_string()]);
    assert_eq!(cell.text_field().text(), "");
    assert_eq!(cell.state(), CellState::Bound);
}

#[test]
fn test_clear_key_ignored_when_button_hidden() {
    let (mut cell, rec) = bound_cell("12", "0");
    cell.text_field().clear_button_mode = ClearButtonMode::Never;
    cell.focus();
    cell.update(Box::new(KeyMsg {
        key: KeyCode::Char('x'),
        modifiers: KeyModifiers::CONTROL,
    }));
    assert!(rec.texts().is_empty());
    assert_eq!(cell.text_field().text(), "12");
}

#[test]
fn test_missing_delegate_drops_notification() {
    let mut cell = TextFieldCell::new();
    cell.configure(&TextFieldRow::new("A", "1"));
    assert!(cell.clear());
    assert!(cell.delegate().is_none());
}

#[test]
fn test_delegate_is_not_retained() {
    let recorder = Arc::new(Recorder::default());
    let mut cell = TextFieldCell::new();
    cell.set_delegate(&recorder);
    assert!(cell.delegate().is_some());
    assert_eq!(Arc::strong_count(&recorder), 1);

    drop(recorder);
    assert!(cell.delegate().is_none());
    cell.configure(&TextFieldRow::new("A", "1"));
    assert!(cell.clear());
}

#[test]
fn test_delegate_receives_reporting_cell() {
    let recorder = Arc::new(Recorder::default());
    let mut first = TextFieldCell::new();
    let mut second = TextFieldCell::new();
    first.set_delegate(&recorder);
    second.set_delegate(&recorder);
    first.configure(&TextFieldRow::new("A", "").with_placeholder("a0"));
    second.configure(&TextFieldRow::new("B", "").with_placeholder("b0"));

    second.clear();
    first.clear();

    let changes = recorder.changes.lock().unwrap().clone();
    assert_eq!(
        changes,
        vec![(second.id(), "b0".to_string()), (first.id(), "a0".to_string())]
    );
}

#[test]
fn test_reconfigure_discards_edit_in_progress() {
    let (mut cell, rec) = bound_cell("1", "0");
    cell.focus();
    cell.update(typed('2'));
    assert_eq!(cell.state(), CellState::Editing);

    cell.configure(&TextFieldRow::new("Other", "9").with_placeholder("5"));
    assert_eq!(cell.state(), CellState::Bound);
    assert!(!cell.focused());
    assert!(rec.texts().is_empty());
    assert_eq!(cell.text_field().text(), "9");
}

#[test]
fn test_cell_and_row_paths_stay_separate() {
    let (mut cell, rec) = bound_cell("1", "0");
    let mut row = TextFieldRow::new("Amount", "1").with_placeholder("0");

    cell.focus();
    cell.update(typed('5'));
    cell.update(key(KeyCode::Enter));

    // The owner applies the reported text to its row.
    let reported = rec.texts().pop().unwrap();
    assert_eq!(reported, "15");
    assert!(row.set_text_field_value(reported).is_none());
    assert_eq!(row.text_field_value(), "15");
}

#[test]
fn test_unfocused_cell_ignores_keys() {
    let (mut cell, rec) = bound_cell("1", "0");
    cell.update(typed('2'));
    cell.update(key(KeyCode::Enter));
    assert_eq!(cell.text_field().text(), "1");
    assert!(rec.texts().is_empty());
}

#[test]
fn test_view_shows_title_field_and_subtitle() {
    let mut cell = TextFieldCell::new();
    cell.configure(
        &TextFieldRow::new("Volume", "11")
            .with_detail_text(DetailText::Subtitle("loudness".to_string()))
            .with_icon(Icon::Glyphs {
                normal: "♪".to_string(),
                highlighted: "♫".to_string(),
            }),
    );
    let view = cell.view();
    assert!(view.starts_with("♪ "));
    assert!(view.contains("Volume"));
    assert!(view.contains("11"));
    assert!(view.contains('\n'));
    assert!(view.contains("loudness"));

    cell.focus();
    assert!(cell.view().starts_with("♫ "));
}

#[test]
fn test_view_before_configure_has_no_field() {
    let cell = TextFieldCell::new();
    assert!(!cell.view().contains('['));
}

#[derive(Default)]
struct Counter(std::sync::atomic::AtomicUsize);

impl TextFieldCellDelegate for Counter {
    fn text_field_did_change(&self, _cell: &TextFieldCell, _text: &str) {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[test]
fn test_set_delegate_accepts_any_delegate_type() {
    let recorder = Arc::new(Recorder::default());
    let counter = Arc::new(Counter::default());
    let mut cell = TextFieldCell::new();
    cell.configure(&TextFieldRow::new("A", "").with_placeholder("0"));

    cell.set_delegate(&recorder);
    cell.clear();
    cell.set_delegate(&counter);
    cell.clear();

    assert_eq!(recorder.texts(), vec!["0".to_string()]);
    assert_eq!(counter.0.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(Arc::strong_count(&counter), 1);
}
