//! Stepper gallery application
//!
//! One window showing every stepper variant for a shared step list and a
//! single current index.

mod message;
mod state;
mod update;
mod view;

use std::time::Instant;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, GalleryMotion};

use crate::features::Settings;
use crate::ui::widgets::step_controls::position_label;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self::from_settings(settings, Instant::now());

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(960.0, 860.0),
            min_size: Some(iced::Size::new(480.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "stepmotion".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        self.current_theme()
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("StepMotion - {}", position_label(self.progress()))
    }

    /// Subscriptions for animation frames, keyboard events and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        let close_event_sub = iced::window::close_events().map(Message::WindowClosed);

        // Frames only while a stepper moves or pulses
        let animation_sub = if self.motion().is_animating() {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, close_event_sub, animation_sub])
    }
}
