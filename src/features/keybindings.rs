//! Customizable keyboard shortcuts
//!
//! Every demo action can be bound to any number of key combinations; the
//! bindings are stored alongside the other settings.

use std::collections::HashMap;

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NextStep,
    PreviousStep,
    Reset,
    ToggleTheme,
    ToggleAnimations,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[
            Action::NextStep,
            Action::PreviousStep,
            Action::Reset,
            Action::ToggleTheme,
            Action::ToggleAnimations,
        ]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::NextStep => "Next step",
            Action::PreviousStep => "Previous step",
            Action::Reset => "Back to first step",
            Action::ToggleTheme => "Toggle dark mode",
            Action::ToggleAnimations => "Toggle animations",
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add Shift modifier
    pub fn shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }

    /// Add Alt modifier
    pub fn alt(mut self) -> Self {
        self.modifiers.alt = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    /// Letter or digit, matched case-insensitively
    Char(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Special
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match (self, key) {
            (KeyCode::Char(expected), Key::Character(c)) => {
                let mut chars = c.chars();
                match (chars.next(), chars.next()) {
                    (Some(typed), None) => typed.eq_ignore_ascii_case(expected),
                    _ => false,
                }
            }
            (_, Key::Named(named)) => self.named() == Some(*named),
            _ => false,
        }
    }

    fn named(&self) -> Option<Named> {
        Some(match self {
            KeyCode::Char(_) => return None,
            KeyCode::Up => Named::ArrowUp,
            KeyCode::Down => Named::ArrowDown,
            KeyCode::Left => Named::ArrowLeft,
            KeyCode::Right => Named::ArrowRight,
            KeyCode::Home => Named::Home,
            KeyCode::End => Named::End,
            KeyCode::PageUp => Named::PageUp,
            KeyCode::PageDown => Named::PageDown,
            KeyCode::Space => Named::Space,
            KeyCode::Enter => Named::Enter,
            KeyCode::Escape => Named::Escape,
            KeyCode::Tab => Named::Tab,
            KeyCode::Backspace => Named::Backspace,
        })
    }

    /// Get display name for the key
    pub fn display(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Space => "Space".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::NextStep,
            vec![
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::Space),
            ],
        );
        bindings.insert(Action::PreviousStep, vec![KeyBinding::new(KeyCode::Left)]);
        bindings.insert(Action::Reset, vec![KeyBinding::new(KeyCode::Home)]);
        bindings.insert(
            Action::ToggleTheme,
            vec![KeyBinding::new(KeyCode::Char('t'))],
        );
        bindings.insert(
            Action::ToggleAnimations,
            vec![KeyBinding::new(KeyCode::Char('a'))],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Create empty keybindings
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Get the keybindings for an action
    pub fn get(&self, action: &Action) -> Option<&Vec<KeyBinding>> {
        self.bindings.get(action)
    }

    /// Set keybindings for an action
    pub fn set(&mut self, action: Action, bindings: Vec<KeyBinding>) {
        self.bindings.insert(action, bindings);
    }

    /// Add a keybinding for an action
    pub fn add(&mut self, action: Action, binding: KeyBinding) {
        self.bindings.entry(action).or_default().push(binding);
    }

    /// Find the action that matches the given key event.
    /// Actions are tried in [`Action::all`] order so overlapping bindings
    /// resolve the same way every time.
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|bindings| bindings.iter().any(|b| b.matches(key, modifiers)))
        })
    }

    /// Get display string for an action's keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert!(bindings.get(action).is_some(), "{:?} unbound", action);
        }
    }

    #[test]
    fn test_default_keys_resolve() {
        let bindings = KeyBindings::default();
        let none = Modifiers::empty();

        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowRight), &none),
            Some(Action::NextStep)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Space), &none),
            Some(Action::NextStep)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowLeft), &none),
            Some(Action::PreviousStep)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Home), &none),
            Some(Action::Reset)
        );
        assert_eq!(
            bindings.find_action(&Key::Character("T".into()), &none),
            Some(Action::ToggleTheme)
        );
        assert_eq!(bindings.find_action(&Key::Character("q".into()), &none), None);
    }

    #[test]
    fn test_modifiers_must_match() {
        let mut bindings = KeyBindings::empty();
        bindings.add(Action::Reset, KeyBinding::new(KeyCode::Char('r')).ctrl());

        let key = Key::Character("r".into());
        assert_eq!(bindings.find_action(&key, &Modifiers::empty()), None);
        assert_eq!(
            bindings.find_action(&key, &Modifiers::CTRL),
            Some(Action::Reset)
        );
    }

    #[test]
    fn test_keybinding_display() {
        let binding = KeyBinding::new(KeyCode::Char('p')).ctrl().shift();
        assert_eq!(binding.display(), "Ctrl+Shift+P");
        assert_eq!(
            KeyBindings::default().display_for_action(&Action::PreviousStep),
            "←"
        );
    }

    #[test]
    fn test_bindings_json_round_trip() {
        let bindings = KeyBindings::default();
        let json = serde_json::to_string(&bindings).unwrap();
        let restored: KeyBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, bindings);
    }
}
