//! Value types shared by all rows.

/// Secondary text of a row and where the cell places it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailText {
    /// Shown on a second line below the title.
    Subtitle(String),
    /// Shown right of the title, right aligned.
    Value1(String),
    /// Shown right of a narrow title column.
    Value2(String),
}

impl DetailText {
    /// The text regardless of placement.
    pub fn text(&self) -> &str {
        match self {
            DetailText::Subtitle(s) | DetailText::Value1(s) | DetailText::Value2(s) => s,
        }
    }

    /// The cell style this placement calls for.
    pub fn style(&self) -> CellStyle {
        match self {
            DetailText::Subtitle(_) => CellStyle::Subtitle,
            DetailText::Value1(_) => CellStyle::Value1,
            DetailText::Value2(_) => CellStyle::Value2,
        }
    }
}

/// Icon drawn in front of a row's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// A named icon the application resolves to a glyph itself.
    Named(String),
    /// A glyph drawn as-is.
    Glyph(String),
    /// Separate glyphs for the normal and highlighted (editing) states.
    Glyphs {
        /// Normal state.
        normal: String,
        /// Highlighted state.
        highlighted: String,
    },
}

impl Icon {
    /// The glyph to draw, or `None` for named icons.
    pub fn glyph(&self, highlighted: bool) -> Option<&str> {
        match self {
            Icon::Named(_) => None,
            Icon::Glyph(g) => Some(g),
            Icon::Glyphs {
                normal,
                highlighted: h,
            } => Some(if highlighted { h } else { normal }),
        }
    }
}

/// Layout of a cell's title and detail text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStyle {
    /// Title only.
    #[default]
    Default,
    /// Detail on its own line below the title.
    Subtitle,
    /// Detail right of the title.
    Value1,
    /// Detail right of a narrow title.
    Value2,
}

/// Standard accessory drawn at the trailing edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessoryType {
    /// Nothing.
    #[default]
    None,
    /// A chevron for navigation rows.
    DisclosureIndicator,
    /// A check mark for selected options.
    Checkmark,
}
