//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{Action, SettingsError};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Steps ============
    /// Move to the next step, wrapping after the last
    NextStep,
    /// Move to the previous step, wrapping before the first
    PreviousStep,
    /// Back to the first step
    Reset,

    // ============ Display ============
    ToggleTheme,
    /// Turn transitions on or off
    ToggleAnimations,
    /// Animation frame
    AnimationTick,

    // ============ Keyboard ============
    /// Key pressed event
    KeyPressed(Key, Modifiers),
    /// Execute a keybinding action
    ExecuteAction(Action),

    // ============ Settings ============
    /// Persist the current settings
    SaveSettings,
    /// Settings write finished
    SettingsSaved(Result<(), SettingsError>),

    // ============ Window ============
    WindowClosed(iced::window::Id),
}
