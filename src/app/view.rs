//! Application view rendering

use std::time::Instant;

use iced::widget::{column, container, row, scrollable, text};
use iced::{Element, Fill, Theme};

use super::App;
use super::message::Message;
use crate::stepper::{
    AnimatedStepper, CardStepper, Orientation, ShapedStepper, SimpleStepper, StepperError,
    StepperLayout, StepperStyle,
};
use crate::ui::animation::StepperAnimation;
use crate::ui::widgets::{ControlMessages, section_header, step_controls};
use crate::ui::{stepper_height, theme, view_stepper};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = Instant::now();
        let current_theme = self.current_theme();
        let styles = &self.settings.styles;
        let current = self.progress.current();
        let style = |base: &StepperStyle| theme::stepper_style(&current_theme, base);

        let controls = step_controls::view(
            self.progress,
            self.settings.display.dark_mode,
            ControlMessages {
                previous: Message::PreviousStep,
                next: Message::NextStep,
                reset: Message::Reset,
                toggle_theme: Message::ToggleTheme,
            },
        );

        let shaped = section(
            "Shaped",
            "Filled indicators for reached steps, outlined ahead",
            stepper(
                ShapedStepper::new(self.steps.clone(), current, style(&styles.shaped)),
                &self.motion.shaped,
                now,
            ),
        );

        let simple = section(
            "Simple",
            "Ring around the current step, checks for completed ones",
            stepper(
                SimpleStepper::new(
                    self.steps.clone(),
                    current,
                    style(&styles.simple),
                    Orientation::Horizontal,
                ),
                &self.motion.simple,
                now,
            ),
        );

        let animated = section(
            "Animated",
            "The current step grows and pulses",
            stepper(
                AnimatedStepper::new(self.steps.clone(), current, style(&styles.animated)),
                &self.motion.animated,
                now,
            ),
        );

        let vertical = section(
            "Vertical",
            "",
            stepper(
                SimpleStepper::new(
                    self.steps.clone(),
                    current,
                    style(&styles.simple_vertical),
                    Orientation::Vertical,
                ),
                &self.motion.simple_vertical,
                now,
            ),
        );

        let card = section(
            "Cards",
            "Descriptions open on the current step",
            stepper(
                CardStepper::new(self.steps.clone(), current, style(&styles.card)),
                &self.motion.card,
                now,
            ),
        );

        let content = column![
            controls,
            shaped,
            simple,
            animated,
            row![
                container(vertical).width(iced::FillPortion(2)),
                container(card).width(iced::FillPortion(3)),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(24)
        .max_width(960);

        container(scrollable(container(content).center_x(Fill)))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content)
            .into()
    }
}

/// Titled panel holding one stepper
fn section<'a>(
    title: &'a str,
    caption: &'a str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    container(column![section_header::view(title, caption), body].spacing(16))
        .padding(20)
        .width(Fill)
        .style(theme::section)
        .into()
}

/// Canvas for a built stepper, or the reason it could not be built
fn stepper<'a, L: StepperLayout + 'a>(
    built: Result<L, StepperError>,
    animation: &StepperAnimation,
    now: Instant,
) -> Element<'a, Message> {
    match built {
        Ok(layout) => {
            let visuals = animation.visuals(now);
            let height = stepper_height(&layout, &visuals);
            view_stepper(layout, visuals, height)
        }
        Err(e) => text(format!("Cannot draw stepper: {}", e))
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme::text_muted(theme)),
            })
            .into(),
    }
}
