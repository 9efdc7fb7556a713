//! Shaped stepper
//!
//! Indicators up to and including the current step are filled with the
//! active color; later ones are transparent with an outline. Connectors are
//! solid bars touching the indicators.

use iced::{Color, Point, Size};

use super::scene::{
    Anchor, Indicator, LINE_HEIGHT, Node, Outline, Scene, StepperLayout, TextRun, Track,
    distribute, scaled_square,
};
use super::style::{StepperStyle, mix};
use super::visual::{StepVisual, VariantKind};
use super::{StepProgress, StepperError, Steps};

/// Horizontal stepper with custom indicator shapes
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedStepper {
    steps: Steps,
    progress: StepProgress,
    style: StepperStyle,
}

impl ShapedStepper {
    pub fn new(steps: Steps, current: usize, style: StepperStyle) -> Result<Self, StepperError> {
        style.validate()?;
        let progress = StepProgress::new(steps.len(), current)?;
        Ok(Self {
            steps,
            progress,
            style,
        })
    }
}

impl StepperLayout for ShapedStepper {
    fn kind(&self) -> VariantKind {
        VariantKind::Shaped
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
            + style.circle_size * style.active_scale.max(1.0)
            + style.spacing
            + style.title_font_size * LINE_HEIGHT
    }

    fn layout(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        let mut scene = Scene::new(size);
        let style = &self.style;
        let count = self.steps.len();
        let side = style.circle_size;
        let center_y = style.padding_y + side / 2.0;
        let lefts = distribute(
            style.padding_x,
            size.width - style.padding_x * 2.0,
            side,
            count,
        );

        // Connectors first so indicators sit on top of them
        for (i, pair) in lefts.windows(2).enumerate() {
            let visual = self.visual_at(visuals, i);
            let from = Point::new(pair[0] + side + style.connector_gap, center_y);
            let to = Point::new(pair[1] - style.connector_gap, center_y);
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
                fraction: visual.connector,
                rounded: false,
            }));
        }

        let label_y = style.padding_y + side + style.spacing;
        for (i, (step, left)) in self.steps.iter().zip(&lefts).enumerate() {
            let visual = self.visual_at(visuals, i);
            let center = Point::new(left + side / 2.0, center_y);

            scene.push(Node::Indicator(Indicator {
                step: i,
                bounds: scaled_square(center, side, visual.scale),
                shape: style.shape,
                fill: mix(Color::TRANSPARENT, style.active_color, visual.emphasis),
                outline: Some(Outline {
                    width: style.border_width,
                    color: mix(style.inactive_color, style.active_color, visual.emphasis),
                }),
            }));
            scene.push(Node::Text(TextRun {
                step: i,
                content: step.marker.clone(),
                position: center,
                anchor: Anchor::Center,
                size: style.marker_font_size,
                color: mix(
                    style.inactive_marker_color,
                    style.marker_color,
                    visual.emphasis,
                ),
                bold: false,
            }));
            scene.push(Node::Text(TextRun {
                step: i,
                content: step.title.clone(),
                position: Point::new(*left, label_y),
                anchor: Anchor::TopLeft,
                size: style.title_font_size,
                color: mix(
                    style.inactive_title_color,
                    style.active_title_color,
                    visual.title,
                ),
                bold: true,
            }));
        }

        scene
    }
}
