//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::SettingsError;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleTheme => {
                self.settings.display.dark_mode = !self.settings.display.dark_mode;
                tracing::info!("Dark mode: {}", self.settings.display.dark_mode);
                Some(self.update(Message::SaveSettings))
            }

            Message::ToggleAnimations => {
                let enabled = !self.settings.display.animations;
                self.settings.display.animations = enabled;
                self.motion.set_enabled(enabled);
                tracing::info!("Animations: {}", enabled);
                Some(self.update(Message::SaveSettings))
            }

            Message::SaveSettings => {
                let settings = self.settings.clone();
                Some(Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || settings.save())
                            .await
                            .map_err(|e| SettingsError::Io(e.to_string()))?
                    },
                    Message::SettingsSaved,
                ))
            }

            Message::SettingsSaved(result) => {
                match result {
                    Ok(()) => tracing::debug!("Settings saved"),
                    Err(e) => tracing::error!("Failed to save settings: {}", e),
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
