//! View rendering for the text-field cell.

use super::model::TextFieldCell;
use crate::row::{CellStyle, DetailText};

impl TextFieldCell {
    /// Renders the cell: icon, title, inline detail and the field on the
    /// first line, a subtitle on the second line when the style calls for it.
    pub fn view(&self) -> String {
        let editing = self.field.as_ref().is_some_and(|f| f.focused());
        let mut line = String::new();

        if let Some(glyph) = self.icon.as_ref().and_then(|icon| icon.glyph(editing)) {
            line.push_str(glyph);
            line.push(' ');
        }
        line.push_str(&self.title_style.render(&self.title));

        if let Some(DetailText::Value1(detail) | DetailText::Value2(detail)) = &self.detail_text {
            if self.cell_style != CellStyle::Subtitle {
                line.push_str("  ");
                line.push_str(&self.detail_style.render(detail));
            }
        }

        if self.accessory_attached {
            if let Some(field) = &self.field {
                line.push(' ');
                line.push_str(&field.view());
            }
        }

        match (&self.detail_text, self.cell_style) {
            (Some(detail), CellStyle::Subtitle) => {
                format!("{}\n{}", line, self.detail_style.render(detail.text()))
            }
            _ => line,
        }
    }
}
