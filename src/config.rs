//! Environmental inputs for sizing and styling text-field cells.
//!
//! Cells never look up terminal dimensions or theme colors on their own; the
//! application measures the screen and hands the result over in a
//! [`FieldConfig`].
//!
//! ```rust
//! use bubbletea_rows::config::FieldConfig;
//!
//! let config = FieldConfig::from_json(r#"{ "screen_width": 120 }"#).unwrap();
//! assert_eq!(config.field_width(), 30);
//! assert_eq!(config.padding, 1);
//! ```

use crate::error::Result;
use lipgloss_extras::prelude::*;
use serde::{Deserialize, Serialize};

/// Sizing and color settings for the embedded text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Width of the terminal, in columns.
    pub screen_width: u16,
    /// The field takes `screen_width / width_divisor` columns.
    pub width_divisor: u16,
    /// Blank columns kept on each side of the text inside the field.
    pub padding: u16,
    /// ANSI color of the entered text.
    pub text_color: String,
    /// ANSI color of the placeholder.
    pub placeholder_color: String,
    /// Whether to draw brackets around the field.
    pub border: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            screen_width: 80,
            width_divisor: 4,
            padding: 1,
            text_color: "244".to_string(),
            placeholder_color: "240".to_string(),
            border: true,
        }
    }
}

impl FieldConfig {
    /// Reads a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Total width of the field in columns, including padding.
    pub fn field_width(&self) -> usize {
        let divisor = self.width_divisor.max(1);
        usize::from(self.screen_width / divisor)
    }

    /// Columns available for text once padding is taken off both sides.
    pub fn text_width(&self) -> usize {
        self.field_width()
            .saturating_sub(2 * usize::from(self.padding))
    }

    /// Style for entered text.
    pub fn text_style(&self) -> Style {
        Style::new().foreground(Color::from(self.text_color.as_str()))
    }

    /// Style for the placeholder.
    pub fn placeholder_style(&self) -> Style {
        Style::new().foreground(Color::from(self.placeholder_color.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_width_is_quarter_screen() {
        let config = FieldConfig::default();
        assert_eq!(config.field_width(), 20);
        assert_eq!(config.text_width(), 18);
    }

    #[test]
    fn test_zero_divisor_does_not_panic() {
        let config = FieldConfig {
            width_divisor: 0,
            ..FieldConfig::default()
        };
        assert_eq!(config.field_width(), 80);
    }

    #[test]
    fn test_padding_wider_than_field() {
        let config = FieldConfig {
            screen_width: 4,
            padding: 5,
            ..FieldConfig::default()
        };
        assert_eq!(config.field_width(), 1);
        assert_eq!(config.text_width(), 0);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = FieldConfig::from_json(r#"{"padding": 2, "border": false}"#).unwrap();
        assert_eq!(config.padding, 2);
        assert!(!config.border);
        assert_eq!(config.screen_width, 80);
        assert_eq!(config.text_color, "244");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = FieldConfig::from_json("{ screen_width: ").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().starts_with("invalid field configuration"));
    }
}
