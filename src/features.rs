//! Feature modules - demo logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod keybindings;
pub mod settings;

pub use keybindings::{Action, KeyBindings};
pub use settings::{Settings, SettingsError};
