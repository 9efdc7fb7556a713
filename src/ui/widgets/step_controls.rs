//! Step navigation controls
//!
//! Previous / Next / Reset buttons plus a theme toggle, with the current
//! position spelled out between them.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Element, Fill};

use crate::stepper::StepProgress;
use crate::ui::theme;

/// Messages emitted by the controls
#[derive(Debug, Clone)]
pub struct ControlMessages<Message> {
    pub previous: Message,
    pub next: Message,
    pub reset: Message,
    pub toggle_theme: Message,
}

/// "Step 2 of 4", or a placeholder when there are no steps
pub fn position_label(progress: StepProgress) -> String {
    if progress.is_empty() {
        "No steps".to_string()
    } else {
        format!("Step {} of {}", progress.current() + 1, progress.total())
    }
}

pub fn view<'a, Message: Clone + 'a>(
    progress: StepProgress,
    dark_mode: bool,
    messages: ControlMessages<Message>,
) -> Element<'a, Message> {
    let has_steps = !progress.is_empty();
    let nav = |label: &'a str, message: Message| {
        button(text(label).size(14))
            .padding([8, 18])
            .style(theme::secondary_button)
            .on_press_maybe(has_steps.then_some(message))
    };

    let next_label = if progress.is_last() { "Restart" } else { "Next" };
    let theme_label = if dark_mode { "Light mode" } else { "Dark mode" };

    row![
        nav("Previous", messages.previous),
        button(text(next_label).size(14))
            .padding([8, 18])
            .style(theme::primary_button)
            .on_press_maybe(has_steps.then_some(messages.next)),
        nav("Reset", messages.reset),
        Space::new().width(16),
        text(position_label(progress)).size(14).style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        }),
        Space::new().width(Fill),
        button(text(theme_label).size(14))
            .padding([8, 18])
            .style(theme::secondary_button)
            .on_press(messages.toggle_theme),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_label() {
        assert_eq!(position_label(StepProgress::new(4, 1).unwrap()), "Step 2 of 4");
        assert_eq!(position_label(StepProgress::default()), "No steps");
    }
}
