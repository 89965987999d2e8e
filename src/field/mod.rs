//! Editable single-line text field.
//!
//! The field is the widget a [`TextFieldCell`](crate::cell::TextFieldCell)
//! embeds. On its own it behaves like a small text input: it edits a line of
//! text while focused and ignores input otherwise. Hosts that need to veto
//! keystrokes or observe the end of editing implement [`TextFieldDelegate`]
//! and drive the field with [`Model::update_with`].
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_rows::field::{new, ClearButtonMode, PasteMsg};
//!
//! let mut field = new();
//! field.set_placeholder("0");
//! field.clear_button_mode = ClearButtonMode::Always;
//! field.focus();
//! field.update(Box::new(PasteMsg("3.5".to_string())));
//! assert_eq!(field.text(), "3.5");
//! ```
//!
//! # Key Bindings
//!
//! Cursor movement, deletion, return (`enter`) and the clear control
//! (`ctrl+x`) are configurable through [`KeyMap`].

pub mod keymap;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;


pub use keymap::{default_key_map, KeyMap};
pub use model::{new, with_config, Model};
pub use types::{
    AcceptAll, ClearButtonMode, PasteMsg, ReturnKeyType, TextAlignment, TextFieldDelegate,
};
