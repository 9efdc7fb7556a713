//! Step navigation and animation frame handlers

use std::time::Instant;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle step-related messages
    pub fn handle_steps(&mut self, message: &Message) -> Option<Task<Message>> {
        let now = Instant::now();
        match message {
            Message::NextStep => {
                self.go_to(self.progress.advance_wrapping(), now);
                Some(Task::none())
            }
            Message::PreviousStep => {
                self.go_to(self.progress.retreat_wrapping(), now);
                Some(Task::none())
            }
            Message::Reset => {
                self.go_to(self.progress.reset(), now);
                Some(Task::none())
            }
            Message::AnimationTick => {
                self.motion.tick(now);
                Some(Task::none())
            }
            _ => None,
        }
    }
}
