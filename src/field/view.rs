//! View rendering methods for the field component.

use super::model::Model;
use super::types::TextAlignment;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const CLEAR_GLYPH: &str = "×";

impl Model {
    /// View renders the field in its current state.
    ///
    /// The text is padded to the configured width and aligned per
    /// [`alignment`](Model::alignment). When the text is wider than the field
    /// the window scrolls to keep the cursor visible.
    pub fn view(&self) -> String {
        let clear = self.clear_button_visible();
        let budget = if clear {
            self.width.saturating_sub(CLEAR_GLYPH.width() + 1)
        } else {
            self.width
        };

        let (body, used) = if self.value.is_empty() {
            self.placeholder_view(budget)
        } else {
            self.text_view(budget)
        };

        let fill = " ".repeat(budget.saturating_sub(used));
        let mut inner = match self.alignment {
            TextAlignment::Left => format!("{}{}", body, fill),
            TextAlignment::Right => format!("{}{}", fill, body),
        };
        if clear {
            inner.push(' ');
            inner.push_str(CLEAR_GLYPH);
        }

        let pad = " ".repeat(self.padding);
        if self.border {
            format!("[{pad}{inner}{pad}]")
        } else {
            format!("{pad}{inner}{pad}")
        }
    }

    /// Renders the placeholder, with the cursor in front when focused.
    fn placeholder_view(&self, budget: usize) -> (String, usize) {
        let mut out = String::new();
        let mut used = 0;
        let mut budget = budget;
        if self.focus && budget > 0 {
            out.push_str(&self.cursor_style.render(" "));
            used += 1;
            budget -= 1;
        }
        let shown = clip(self.placeholder.chars(), budget);
        if !shown.is_empty() {
            used += shown.width();
            out.push_str(&self.placeholder_style.render(&shown));
        }
        (out, used)
    }

    /// Renders the visible slice of the text and the cursor.
    fn text_view(&self, budget: usize) -> (String, usize) {
        // A focused cursor at the end needs one extra cell.
        let caret_tail = usize::from(self.focus && self.pos == self.value.len());
        let room = budget.saturating_sub(caret_tail);
        let start = self.window_start(room);

        let mut out = String::new();
        let mut run = String::new();
        let mut used = 0;
        for (i, &ch) in self.value.iter().enumerate().skip(start) {
            let w = ch.width().unwrap_or(0);
            if used + w > room {
                break;
            }
            used += w;
            if self.focus && i == self.pos {
                out.push_str(&self.text_style.render(&run));
                run.clear();
                out.push_str(&self.cursor_style.render(&ch.to_string()));
            } else {
                run.push(ch);
            }
        }
        if !run.is_empty() {
            out.push_str(&self.text_style.render(&run));
        }
        if caret_tail == 1 && budget > 0 {
            out.push_str(&self.cursor_style.render(" "));
            used += 1;
        }
        (out, used)
    }

    /// First visible character so that the cursor stays within `room` columns.
    fn window_start(&self, room: usize) -> usize {
        if !self.focus {
            return 0;
        }
        let mut start = 0;
        let upto = self.pos.min(self.value.len().saturating_sub(1));
        while start < upto && width_of(&self.value[start..=upto]) > room {
            start += 1;
        }
        start
    }
}

fn width_of(chars: &[char]) -> usize {
    chars.iter().map(|c| c.width().unwrap_or(0)).sum()
}

/// Takes characters from the front until `budget` columns are filled.
fn clip(chars: impl Iterator<Item = char>, budget: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in chars {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}
