//! Simple stepper, horizontal or vertical
//!
//! An indicator bar (numbered circles joined by connectors) next to a label
//! bar. The current indicator grows, gains a ring and an inner padding;
//! completed indicators swap their number for a check mark.

use iced::{Point, Size};

use super::defaults::StepperDefaults;
use super::scene::{
    Anchor, Check, Indicator, LINE_HEIGHT, Node, Outline, Scene, StepperLayout, TextRun, Track,
    distribute, scaled_square,
};
use super::style::{StepperStyle, mix, with_alpha};
use super::visual::{StepVisual, VariantKind};
use super::{StepProgress, StepperError, Steps};

/// Minimum distance between two indicators of a vertical stepper
pub const VERTICAL_STEP_GAP: f32 = 48.0;

/// Check mark size relative to the indicator
const CHECK_RATIO: f32 = 0.55;

/// Direction the steps run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Indicators in a row, labels underneath
    #[default]
    Horizontal,
    /// Indicators in a column, labels to the right
    Vertical,
}

/// Ringed stepper with check marks
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleStepper {
    steps: Steps,
    progress: StepProgress,
    style: StepperStyle,
    orientation: Orientation,
}

impl SimpleStepper {
    pub fn new(
        steps: Steps,
        current: usize,
        style: StepperStyle,
        orientation: Orientation,
    ) -> Result<Self, StepperError> {
        style.validate()?;
        let progress = StepProgress::new(steps.len(), current)?;
        Ok(Self {
            steps,
            progress,
            style,
            orientation,
        })
    }

    pub fn horizontal(steps: Steps, current: usize) -> Result<Self, StepperError> {
        Self::new(steps, current, StepperStyle::simple(), Orientation::Horizontal)
    }

    pub fn vertical(steps: Steps, current: usize) -> Result<Self, StepperError> {
        Self::new(
            steps,
            current,
            StepperStyle::simple_vertical(),
            Orientation::Vertical,
        )
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Room left around an indicator so the scaled current step is not clipped
    fn scale_room(&self) -> f32 {
        self.style.circle_size * (self.style.active_scale.max(1.0) - 1.0) / 2.0
    }

    /// Ring, fill, marker and check of one indicator
    fn push_indicator(&self, scene: &mut Scene, index: usize, center: Point, visual: StepVisual) {
        let style = &self.style;
        let side = style.circle_size;

        if visual.ring > 0.0 {
            scene.push(Node::Indicator(Indicator {
                step: index,
                bounds: scaled_square(center, side, visual.scale),
                shape: style.shape,
                fill: iced::Color::TRANSPARENT,
                outline: Some(Outline {
                    width: style.border_width * visual.ring,
                    color: with_alpha(style.active_color, style.active_color.a * visual.ring),
                }),
            }));
        }

        let inner = (side - style.inner_padding * 2.0 * visual.inset).max(0.0);
        scene.push(Node::Indicator(Indicator {
            step: index,
            bounds: scaled_square(center, inner, visual.scale),
            shape: style.shape,
            fill: mix(
                with_alpha(style.active_color, StepperDefaults::UPCOMING_ALPHA),
                style.active_color,
                visual.emphasis,
            ),
            outline: None,
        }));

        let marker_alpha = 1.0 - visual.check.clamp(0.0, 1.0);
        if marker_alpha > 0.0 {
            if let Some(step) = self.steps.get(index) {
                scene.push(Node::Text(TextRun {
                    step: index,
                    content: step.marker.clone(),
                    position: center,
                    anchor: Anchor::Center,
                    size: style.marker_font_size,
                    color: with_alpha(style.marker_color, style.marker_color.a * marker_alpha),
                    bold: false,
                }));
            }
        }

        if visual.check > 0.0 {
            scene.push(Node::Check(Check {
                step: index,
                center,
                size: side * CHECK_RATIO * visual.check,
                color: style.marker_color,
            }));
        }
    }

    fn title_run(&self, index: usize, position: Point, anchor: Anchor, visual: StepVisual) -> Option<Node> {
        let style = &self.style;
        self.steps.get(index).map(|step| {
            Node::Text(TextRun {
                step: index,
                content: step.title.clone(),
                position,
                anchor,
                size: style.title_font_size,
                color: mix(
                    style.inactive_title_color,
                    style.active_title_color,
                    visual.title,
                ),
                bold: true,
            })
        })
    }

    fn track(&self, index: usize, from: Point, to: Point, visual: StepVisual) -> Track {
        Track {
            step: index,
            from,
            to,
            thickness: self.style.connector_thickness,
            background: self.style.inactive_color,
            fill: self.style.active_color,
            fraction: visual.connector,
            rounded: true,
        }
    }

    fn layout_horizontal(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        let mut scene = Scene::new(size);
        let style = &self.style;
        let side = style.circle_size;
        let center_y = style.padding_y + self.scale_room() + side / 2.0;
        let lefts = distribute(
            style.padding_x,
            size.width - style.padding_x * 2.0,
            side,
            self.steps.len(),
        );

        for (i, pair) in lefts.windows(2).enumerate() {
            let from = Point::new(pair[0] + side + style.connector_gap, center_y);
            let to = Point::new(pair[1] - style.connector_gap, center_y);
            if to.x > from.x {
                let track = self.track(i, from, to, self.visual_at(visuals, i));
                scene.push(Node::Track(track));
            }
        }

        let label_y = center_y + side / 2.0 + style.spacing;
        for (i, left) in lefts.iter().enumerate() {
            let visual = self.visual_at(visuals, i);
            self.push_indicator(&mut scene, i, Point::new(left + side / 2.0, center_y), visual);
            if let Some(title) =
                self.title_run(i, Point::new(*left, label_y), Anchor::TopLeft, visual)
            {
                scene.push(title);
            }
        }

        scene
    }

    fn layout_vertical(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        let mut scene = Scene::new(size);
        let style = &self.style;
        let side = style.circle_size;
        let center_x = style.padding_x + self.scale_room() + side / 2.0;
        let tops = distribute(
            style.padding_y,
            size.height - style.padding_y * 2.0,
            side,
            self.steps.len(),
        );

        for (i, pair) in tops.windows(2).enumerate() {
            let from = Point::new(center_x, pair[0] + side + style.connector_gap);
            let to = Point::new(center_x, pair[1] - style.connector_gap);
            if to.y > from.y {
                let track = self.track(i, from, to, self.visual_at(visuals, i));
                scene.push(Node::Track(track));
            }
        }

        let label_x = center_x + side / 2.0 + self.scale_room() + style.padding_x;
        for (i, top) in tops.iter().enumerate() {
            let visual = self.visual_at(visuals, i);
            let center_y = top + side / 2.0;
            self.push_indicator(&mut scene, i, Point::new(center_x, center_y), visual);
            if let Some(title) =
                self.title_run(i, Point::new(label_x, center_y), Anchor::CenterLeft, visual)
            {
                scene.push(title);
            }
        }

        scene
    }
}

impl StepperLayout for SimpleStepper {
    fn kind(&self) -> VariantKind {
        VariantKind::Simple
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
        let count = self.steps.len();
        if count == 0 {
            return 0.0;
        }
        let style = &self.style;
        let indicator = style.circle_size + self.scale_room() * 2.0;
        match self.orientation {
            Orientation::Horizontal => {
                style.padding_y * 2.0
                    + indicator
                    + style.spacing
                    + style.title_font_size * LINE_HEIGHT
            }
            Orientation::Vertical => {
                style.padding_y * 2.0
                    + self.scale_room() * 2.0
                    + style.circle_size * count as f32
                    + VERTICAL_STEP_GAP * (count - 1) as f32
            }
        }
    }

    fn layout(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        match self.orientation {
            Orientation::Horizontal => self.layout_horizontal(size, visuals),
            Orientation::Vertical => self.layout_vertical(size, visuals),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::StepStatus;

    fn titles() -> Steps {
        Steps::from_titles(["Cart", "Address", "Payment", "Review"])
    }

    #[test]
    fn test_checks_mark_completed_steps() {
        let stepper = SimpleStepper::horizontal(titles(), 2).unwrap();
        let scene = stepper.render(Size::new(400.0, 90.0));

        let checked: Vec<usize> = scene.checks().map(|c| c.step).collect();
        assert_eq!(checked, vec![0, 1]);

        // Completed steps hide their number
        let markers: Vec<&str> = scene
            .texts()
            .filter(|t| t.anchor == Anchor::Center)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(markers, vec!["3", "4"]);
    }

    #[test]
    fn test_only_current_step_has_ring() {
        let stepper = SimpleStepper::horizontal(titles(), 1).unwrap();
        let scene = stepper.render(Size::new(400.0, 90.0));

        let ringed: Vec<usize> = scene
            .indicators()
            .filter(|i| i.outline.is_some())
            .map(|i| i.step)
            .collect();
        assert_eq!(ringed, vec![1]);

        let ring = scene.indicators().find(|i| i.outline.is_some()).unwrap();
        assert_eq!(ring.bounds.width, 32.0 * 1.1);
    }

    #[test]
    fn test_current_indicator_is_inset() {
        let stepper = SimpleStepper::horizontal(titles(), 1).unwrap();
        let scene = stepper.render(Size::new(400.0, 90.0));
        let fill = scene
            .indicators()
            .find(|i| i.step == 1 && i.outline.is_none())
            .unwrap();
        assert!((fill.bounds.width - (32.0 - 8.0) * 1.1).abs() < 1e-4);
    }

    #[test]
    fn test_upcoming_indicators_are_faded() {
        let stepper = SimpleStepper::horizontal(titles(), 1).unwrap();
        let scene = stepper.render(Size::new(400.0, 90.0));
        let upcoming = scene
            .indicators()
            .find(|i| i.step == 3 && i.outline.is_none())
            .unwrap();
        assert!((upcoming.fill.a - StepperDefaults::UPCOMING_ALPHA).abs() < 1e-6);
    }

    #[test]
    fn test_connector_rule_horizontal_and_vertical() {
        for stepper in [
            SimpleStepper::horizontal(titles(), 1).unwrap(),
            SimpleStepper::vertical(titles(), 1).unwrap(),
        ] {
            let height = stepper.measure(400.0, &[]);
            let scene = stepper.render(Size::new(400.0, height));
            for track in scene.tracks() {
                let status = stepper.progress().status(track.step);
                let expected = if status == StepStatus::Upcoming { 0.0 } else { 1.0 };
                assert_eq!(track.fraction, expected, "{:?}", stepper.orientation());
            }
            assert_eq!(scene.tracks().count(), 3);
        }
    }

    #[test]
    fn test_vertical_tracks_run_downwards() {
        let stepper = SimpleStepper::vertical(titles(), 0).unwrap();
        let height = stepper.measure(300.0, &[]);
        let scene = stepper.render(Size::new(300.0, height));

        for track in scene.tracks() {
            assert_eq!(track.from.x, track.to.x);
            assert!(track.to.y > track.from.y);
        }
        assert!(
            scene
                .texts()
                .filter(|t| t.anchor == Anchor::CenterLeft)
                .all(|t| t.size == 16.0)
        );
    }

    #[test]
    fn test_label_colors() {
        let stepper = SimpleStepper::horizontal(titles(), 1).unwrap();
        let style = StepperStyle::simple();
        let scene = stepper.render(Size::new(400.0, 90.0));
        let labels: Vec<_> = scene
            .texts()
            .filter(|t| t.anchor == Anchor::TopLeft)
            .collect();

        assert_eq!(labels[0].color, style.active_title_color);
        assert_eq!(labels[1].color, style.active_title_color);
        assert_eq!(labels[2].color, style.inactive_title_color);
    }

    #[test]
    fn test_render_is_idempotent() {
        let stepper = SimpleStepper::vertical(titles(), 3).unwrap();
        let size = Size::new(320.0, stepper.measure(320.0, &[]));
        assert_eq!(stepper.render(size), stepper.render(size));
    }

    #[test]
    fn test_mid_transition_visuals() {
        let stepper = SimpleStepper::horizontal(titles(), 1).unwrap();
        let mut visuals = stepper.settled();
        visuals[1].connector = 0.5;

        let scene = stepper.layout(Size::new(400.0, 90.0), &visuals);
        let track = scene.tracks().find(|t| t.step == 1).unwrap();
        assert_eq!(track.fraction, 0.5);
    }

    #[test]
    fn test_short_visual_slice_falls_back_to_settled() {
        let stepper = SimpleStepper::horizontal(titles(), 3).unwrap();
        let scene = stepper.layout(Size::new(400.0, 90.0), &[]);
        assert_eq!(scene, stepper.render(Size::new(400.0, 90.0)));
    }
}
