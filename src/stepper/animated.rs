//! Animated stepper
//!
//! Columns of indicator and label joined by connectors. The current
//! indicator grows and emits a pulse ring; completed indicators pop a check
//! mark on a spring.

use iced::{Point, Size};

use super::defaults::StepperDefaults;
use super::scene::{
    Anchor, Check, Halo, Indicator, LINE_HEIGHT, Node, Scene, StepperLayout, TextRun, Track,
    estimate_text_width, scaled_square,
};
use super::style::{StepperStyle, mix, with_alpha};
use super::visual::{StepVisual, VariantKind};
use super::{StepProgress, StepperError, Steps};

const CHECK_RATIO: f32 = 0.55;

#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedStepper {
    steps: Steps,
    progress: StepProgress,
    style: StepperStyle,
}

impl AnimatedStepper {
    pub fn new(steps: Steps, current: usize, style: StepperStyle) -> Result<Self, StepperError> {
        style.validate()?;
        let progress = StepProgress::new(steps.len(), current)?;
        Ok(Self {
            steps,
            progress,
            style,
        })
    }

    /// Largest indicator growth, pulse ring included
    fn growth(&self) -> f32 {
        let pulse = if self.style.pulse {
            StepperDefaults::PULSE_MAX_SCALE * self.style.active_scale
        } else {
            1.0
        };
        self.style.active_scale.max(pulse).max(1.0)
    }

    fn room(&self) -> f32 {
        self.style.circle_size * (self.growth() - 1.0) / 2.0
    }

    /// Width of each step column: the indicator or the title, whichever is wider
    fn column_widths(&self) -> Vec<f32> {
        let style = &self.style;
        self.steps
            .iter()
            .map(|step| {
                estimate_text_width(&step.title, style.title_font_size).max(style.circle_size)
            })
            .collect()
    }

    /// Horizontal center of every column; leftover width goes to the connectors
    fn column_centers(&self, width: f32, widths: &[f32]) -> Vec<f32> {
        let style = &self.style;
        let count = widths.len();
        let used: f32 = widths.iter().sum();
        let connector = if count > 1 {
            ((width - style.padding_x * 2.0 - used) / (count - 1) as f32).max(0.0)
        } else {
            0.0
        };

        let mut left = style.padding_x;
        widths
            .iter()
            .map(|w| {
                let center = left + w / 2.0;
                left += w + connector;
                center
            })
            .collect()
    }
}

impl StepperLayout for AnimatedStepper {
    fn kind(&self) -> VariantKind {
        VariantKind::Animated
    }

    fn steps(&self) -> &Steps {
        &self.steps
    }

    fn progress(&self) -> StepProgress {
        self.progress
    }

    fn style(&self) -> &StepperStyle {
        &self.style
    }

    fn measure(&self, _width: f32, _visuals: &[StepVisual]) -> f32 {
        if self.steps.is_empty() {
            return 0.0;
        }
        let style = &self.style;
        style.padding_y * 2.0
            + self.room() * 2.0
            + style.circle_size
            + style.spacing
            + style.title_font_size * LINE_HEIGHT
    }

    fn layout(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        let mut scene = Scene::new(size);
        let style = &self.style;
        let side = style.circle_size;
        let radius = side / 2.0;
        let center_y = style.padding_y + self.room() + radius;
        let centers = self.column_centers(size.width, &self.column_widths());

        for (i, pair) in centers.windows(2).enumerate() {
            let from = Point::new(pair[0] + radius + style.connector_gap, center_y);
            let to = Point::new(pair[1] - radius - style.connector_gap, center_y);
            if to.x <= from.x {
                continue;
            }
            scene.push(Node::Track(Track {
                step: i,
                from,
                to,
                thickness: style.connector_thickness,
                background: style.inactive_color,
                fill: style.active_color,
                fraction: self.visual_at(visuals, i).connector,
                rounded: true,
            }));
        }

        let label_y = center_y + radius + self.room() + style.spacing;
        for (i, (step, x)) in self.steps.iter().zip(&centers).enumerate() {
            let visual = self.visual_at(visuals, i);
            let center = Point::new(*x, center_y);

            if let Some(pulse) = visual.pulse {
                scene.push(Node::Halo(Halo {
                    step: i,
                    center,
                    radius: radius * visual.scale * pulse.scale,
                    color: with_alpha(style.active_color, pulse.alpha),
                }));
            }

            scene.push(Node::Indicator(Indicator {
                step: i,
                bounds: scaled_square(center, side, visual.scale),
                shape: style.shape,
                fill: mix(
                    with_alpha(style.inactive_color, StepperDefaults::UPCOMING_ALPHA),
                    style.active_color,
                    visual.emphasis,
                ),
                outline: None,
            }));

            let marker_alpha = 1.0 - visual.check.clamp(0.0, 1.0);
            if marker_alpha > 0.0 {
                scene.push(Node::Text(TextRun {
                    step: i,
                    content: step.marker.clone(),
                    position: center,
                    anchor: Anchor::Center,
                    size: style.marker_font_size,
                    color: with_alpha(style.marker_color, style.marker_color.a * marker_alpha),
                    bold: true,
                }));
            }
            if visual.check > 0.0 {
                scene.push(Node::Check(Check {
                    step: i,
                    center,
                    size: side * CHECK_RATIO * visual.check,
                    color: style.marker_color,
                }));
            }

            scene.push(Node::Text(TextRun {
                step: i,
                content: step.title.clone(),
                position: Point::new(*x, label_y),
                anchor: Anchor::TopCenter,
                size: style.title_font_size,
                color: mix(
                    style.inactive_title_color,
                    style.active_title_color,
                    visual.title,
                ),
                bold: visual.is_bold(),
            }));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::visual::Pulse;
    use std::time::Duration;

    fn stepper(current: usize) -> AnimatedStepper {
        AnimatedStepper::new(
            Steps::from_titles(["Order", "Shipped", "Delivered"]),
            current,
            StepperStyle::animated(),
        )
        .unwrap()
    }

    fn labels(scene: &Scene) -> Vec<&TextRun> {
        scene
            .texts()
            .filter(|t| t.anchor == Anchor::TopCenter)
            .collect()
    }

    #[test]
    fn test_only_current_label_is_bold() {
        let scene = stepper(1).render(Size::new(420.0, 120.0));
        let bold: Vec<bool> = labels(&scene).iter().map(|t| t.bold).collect();
        assert_eq!(bold, vec![false, true, false]);
    }

    #[test]
    fn test_current_indicator_scaled() {
        let scene = stepper(1).render(Size::new(420.0, 120.0));
        let widths: Vec<f32> = scene.indicators().map(|i| i.bounds.width).collect();
        assert_eq!(widths[0], 40.0);
        assert_eq!(widths[1], 40.0 * 1.15);
        assert_eq!(widths[2], 40.0);
    }

    #[test]
    fn test_upcoming_uses_faded_inactive_color() {
        let style = StepperStyle::animated();
        let scene = stepper(0).render(Size::new(420.0, 120.0));
        let last = scene.indicators().last().unwrap();
        assert_eq!(
            last.fill,
            with_alpha(style.inactive_color, StepperDefaults::UPCOMING_ALPHA)
        );
    }

    #[test]
    fn test_halo_only_when_pulsing() {
        let stepper = stepper(1);
        assert_eq!(stepper.render(Size::new(420.0, 120.0)).halos().count(), 0);

        let mut visuals = stepper.settled();
        visuals[1].pulse = Some(Pulse::at(
            Duration::from_millis(500),
            Duration::from_millis(1000),
        ));
        let scene = stepper.layout(Size::new(420.0, 120.0), &visuals);

        let halos: Vec<&Halo> = scene.halos().collect();
        assert_eq!(halos.len(), 1);
        assert_eq!(halos[0].step, 1);
        assert!(halos[0].radius > 20.0 * 1.15);
        assert!(halos[0].color.a < 0.6);
    }

    #[test]
    fn test_check_replaces_marker_when_completed() {
        let scene = stepper(2).render(Size::new(420.0, 120.0));
        let checked: Vec<usize> = scene.checks().map(|c| c.step).collect();
        assert_eq!(checked, vec![0, 1]);
        assert!(scene.checks().all(|c| (c.size - 40.0 * CHECK_RATIO).abs() < 1e-4));
    }

    #[test]
    fn test_spring_overshoot_grows_check() {
        let stepper = stepper(1);
        let mut visuals = stepper.settled();
        visuals[0].check = 1.2;
        let scene = stepper.layout(Size::new(420.0, 120.0), &visuals);
        let check = scene.checks().next().unwrap();
        assert!(check.size > 40.0 * CHECK_RATIO);
    }

    #[test]
    fn test_connector_rule() {
        for current in 0..3 {
            let scene = stepper(current).render(Size::new(420.0, 120.0));
            for track in scene.tracks() {
                let expected = if track.step <= current { 1.0 } else { 0.0 };
                assert_eq!(track.fraction, expected);
            }
        }
    }

    #[test]
    fn test_columns_keep_labels_apart() {
        let stepper = stepper(0);
        let scene = stepper.render(Size::new(420.0, 120.0));
        let xs: Vec<f32> = labels(&scene).iter().map(|t| t.position.x).collect();
        assert!(xs.windows(2).all(|pair| pair[1] > pair[0]));
    }

    #[test]
    fn test_measure_leaves_room_for_pulse() {
        let pulsing = stepper(0);
        let still = AnimatedStepper::new(
            Steps::from_titles(["Order", "Shipped"]),
            0,
            StepperStyle::animated().with_pulse(false),
        )
        .unwrap();
        assert!(pulsing.measure(400.0, &[]) > still.measure(400.0, &[]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let stepper = stepper(1);
        let size = Size::new(400.0, stepper.measure(400.0, &[]));
        assert_eq!(stepper.render(size), stepper.render(size));
    }
}
