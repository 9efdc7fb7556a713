//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Executing action: {}", action.display_name());
        let message = match action {
            Action::NextStep => Message::NextStep,
            Action::PreviousStep => Message::PreviousStep,
            Action::Reset => Message::Reset,
            Action::ToggleTheme => Message::ToggleTheme,
            Action::ToggleAnimations => Message::ToggleAnimations,
        };
        self.update(message)
    }
}
