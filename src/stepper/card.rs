//! Card stepper
//!
//! One row per step: a numbered badge on a vertical connector and a card
//! holding the title and description. The current card is lifted, tinted and
//! reveals its description.

use iced::{Point, Rectangle, Size};

use super::scene::{
    Anchor, Check, Indicator, LINE_HEIGHT, Node, Panel, Scene, StepperLayout, TextRun, Track,
    scaled_square,
};
use super::status::StepStatus;
use super::defaults::StepperDefaults;
use super::style::{StepperStyle, mix, with_alpha};
use super::visual::{StepVisual, VariantKind};
use super::{StepProgress, StepperError, Steps};

const CARD_RADIUS: f32 = 12.0;
const CARD_PADDING_X: f32 = 12.0;
const CARD_PADDING_Y: f32 = 14.0;
const ACCENT_WIDTH: f32 = 4.0;
const ROW_GAP: f32 = 8.0;
const MAX_ELEVATION: f32 = 4.0;
const TINT: f32 = 0.06;
const COMPLETED_TITLE_ALPHA: f32 = 0.7;
const DESCRIPTION_ALPHA: f32 = 0.7;
const DESCRIPTION_GAP: f32 = 6.0;
/// Alpha of the inactive color behind connectors and accents
const TRACK_ALPHA: f32 = 0.2;
const CHECK_RATIO: f32 = 0.55;

#[derive(Debug, Clone, PartialEq)]
pub struct CardStepper {
    steps: Steps,
    progress: StepProgress,
    style: StepperStyle,
}

impl CardStepper {
    /// Descriptions are taken from `steps`; see [`Steps::with_descriptions`]
    pub fn new(steps: Steps, current: usize, style: StepperStyle) -> Result<Self, StepperError> {
        style.validate()?;
        let progress = StepProgress::new(steps.len(), current)?;
        Ok(Self {
            steps,
            progress,
            style,
        })
    }

    /// Height of the card of step `index`
    fn card_height(&self, index: usize, visual: StepVisual) -> f32 {
        let style = &self.style;
        let title = style.title_font_size * LINE_HEIGHT;
        let reveal = if self.has_description(index) {
            (DESCRIPTION_GAP + style.description_font_size * LINE_HEIGHT)
                * visual.focus.clamp(0.0, 1.0)
        } else {
            0.0
        };
        CARD_PADDING_Y * 2.0 + title + reveal
    }

    fn row_height(&self, index: usize, visual: StepVisual) -> f32 {
        self.card_height(index, visual).max(self.style.circle_size)
    }

    fn has_description(&self, index: usize) -> bool {
        self.steps
            .get(index)
            .is_some_and(|step| !step.description.is_empty())
    }

    fn title_color(&self, visual: StepVisual) -> iced::Color {
        let style = &self.style;
        let reached = match visual.status {
            StepStatus::Active => style.active_color,
            StepStatus::Completed => with_alpha(
                style.active_color,
                style.active_color.a * COMPLETED_TITLE_ALPHA,
            ),
            StepStatus::Upcoming => style.inactive_title_color,
        };
        mix(style.inactive_title_color, reached, visual.title)
    }
}

impl StepperLayout for CardStepper {
    fn kind(&self) -> VariantKind {
        VariantKind::Card
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

    fn measure(&self, _width: f32, visuals: &[StepVisual]) -> f32 {
        let count = self.steps.len();
        if count == 0 {
            return 0.0;
        }
        let rows: f32 = (0..count)
            .map(|i| self.row_height(i, self.visual_at(visuals, i)))
            .sum();
        self.style.padding_y * 2.0 + rows + ROW_GAP * (count - 1) as f32
    }

    fn layout(&self, size: Size, visuals: &[StepVisual]) -> Scene {
        let mut scene = Scene::new(size);
        let style = &self.style;
        let count = self.steps.len();
        let side = style.circle_size;
        let badge_x = style.padding_x + side / 2.0;
        let card_x = style.padding_x + side + style.spacing;
        let card_width = (size.width - card_x - style.padding_x).max(0.0);

        let mut top = style.padding_y;
        for (i, step) in self.steps.iter().enumerate() {
            let visual = self.visual_at(visuals, i);
            let row = self.row_height(i, visual);
            let badge = Point::new(badge_x, top + side / 2.0);

            if i + 1 < count {
                let from = Point::new(badge_x, top + side + style.connector_gap);
                let to = Point::new(badge_x, top + row + ROW_GAP - style.connector_gap);
                if to.y > from.y {
                    scene.push(Node::Track(Track {
                        step: i,
                        from,
                        to,
                        thickness: style.connector_thickness,
                        background: faded(style.inactive_color, TRACK_ALPHA),
                        fill: style.active_color,
                        fraction: visual.connector,
                        rounded: true,
                    }));
                }
            }

            scene.push(Node::Indicator(Indicator {
                step: i,
                bounds: scaled_square(badge, side, visual.scale),
                shape: style.shape,
                fill: mix(
                    faded(style.inactive_color, StepperDefaults::UPCOMING_ALPHA),
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
                    position: badge,
                    anchor: Anchor::Center,
                    size: style.marker_font_size,
                    color: with_alpha(style.marker_color, style.marker_color.a * marker_alpha),
                    bold: true,
                }));
            }
            if visual.check > 0.0 {
                scene.push(Node::Check(Check {
                    step: i,
                    center: badge,
                    size: side * CHECK_RATIO * visual.check,
                    color: style.marker_color,
                }));
            }

            let focus = visual.focus.clamp(0.0, 1.0);
            let tint = mix(style.card_background, style.active_color, TINT);
            scene.push(Node::Panel(Panel {
                step: i,
                bounds: Rectangle {
                    x: card_x,
                    y: top,
                    width: card_width,
                    height: self.card_height(i, visual),
                },
                radius: CARD_RADIUS,
                background: mix(style.card_background, tint, focus),
                accent: mix(
                    faded(style.inactive_color, TRACK_ALPHA),
                    style.active_color,
                    visual.emphasis,
                ),
                accent_width: ACCENT_WIDTH,
                elevation: MAX_ELEVATION * focus,
            }));

            let text_x = card_x + ACCENT_WIDTH + CARD_PADDING_X;
            let title_y = top + CARD_PADDING_Y;
            scene.push(Node::Text(TextRun {
                step: i,
                content: step.title.clone(),
                position: Point::new(text_x, title_y),
                anchor: Anchor::TopLeft,
                size: style.title_font_size,
                color: self.title_color(visual),
                bold: visual.is_bold(),
            }));

            if focus > 0.0 && self.has_description(i) {
                let color = self.title_color(visual);
                scene.push(Node::Text(TextRun {
                    step: i,
                    content: step.description.clone(),
                    position: Point::new(
                        text_x,
                        title_y + style.title_font_size * LINE_HEIGHT + DESCRIPTION_GAP,
                    ),
                    anchor: Anchor::TopLeft,
                    size: style.description_font_size,
                    color: with_alpha(color, color.a * DESCRIPTION_ALPHA * focus),
                    bold: false,
                }));
            }

            top += row + ROW_GAP;
        }

        scene
    }
}

fn faded(color: iced::Color, alpha: f32) -> iced::Color {
    with_alpha(color, color.a * alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Steps {
        Steps::from_titles(["Account", "Profile", "Confirm"])
            .with_descriptions([
                "Create your login",
                "Tell us about yourself",
                "Review and finish",
            ])
            .unwrap()
    }

    fn stepper(current: usize) -> CardStepper {
        CardStepper::new(steps(), current, StepperStyle::card()).unwrap()
    }

    fn render(stepper: &CardStepper) -> Scene {
        stepper.render(Size::new(360.0, stepper.measure(360.0, &[])))
    }

    #[test]
    fn test_only_current_card_is_elevated() {
        let scene = render(&stepper(1));
        let elevations: Vec<f32> = scene.panels().map(|p| p.elevation).collect();
        assert_eq!(elevations, vec![0.0, MAX_ELEVATION, 0.0]);
    }

    #[test]
    fn test_only_current_description_is_shown() {
        let scene = render(&stepper(1));
        let descriptions: Vec<&str> = scene
            .texts()
            .filter(|t| t.size == StepperStyle::card().description_font_size)
            .map(|t| t.content.as_str())
            .collect();
        assert_eq!(descriptions, vec!["Tell us about yourself"]);
    }

    #[test]
    fn test_title_colors() {
        let style = StepperStyle::card();
        let scene = render(&stepper(1));
        let titles: Vec<_> = scene
            .texts()
            .filter(|t| t.anchor == Anchor::TopLeft && t.size == style.title_font_size)
            .collect();

        assert!((titles[0].color.a - COMPLETED_TITLE_ALPHA).abs() < 1e-6);
        assert_eq!(titles[1].color, style.active_color);
        assert!(titles[1].bold);
        assert_eq!(titles[2].color, style.inactive_title_color);
    }

    #[test]
    fn test_accent_follows_status() {
        let style = StepperStyle::card();
        let scene = render(&stepper(1));
        let accents: Vec<_> = scene.panels().map(|p| p.accent).collect();
        assert_eq!(accents[0], style.active_color);
        assert_eq!(accents[1], style.active_color);
        assert!((accents[2].a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_upcoming_badge_and_tracks_are_faded() {
        let style = StepperStyle::card();
        let scene = render(&stepper(0));

        let fills: Vec<_> = scene.indicators().map(|i| i.fill).collect();
        assert_eq!(fills[0], style.active_color);
        assert!((fills[1].a - StepperDefaults::UPCOMING_ALPHA).abs() < 1e-6);
        assert_eq!(fills[1].r, style.inactive_color.r);

        for track in scene.tracks() {
            assert!((track.background.a - TRACK_ALPHA).abs() < 1e-6);
        }
    }

    #[test]
    fn test_description_follows_title_color() {
        let style = StepperStyle::card();
        let scene = render(&stepper(1));
        let description = scene
            .texts()
            .find(|t| t.content == "Tell us about yourself")
            .unwrap();
        assert_eq!(description.color.r, style.active_color.r);
        assert!((description.color.a - DESCRIPTION_ALPHA).abs() < 1e-6);
        assert_eq!(description.position.x, 36.0 + 12.0 + 16.0 + ACCENT_WIDTH + CARD_PADDING_X);
    }

    #[test]
    fn test_current_card_is_tinted() {
        let style = StepperStyle::card();
        let scene = render(&stepper(0));
        let panels: Vec<_> = scene.panels().collect();
        assert_ne!(panels[0].background, style.card_background);
        assert_eq!(panels[1].background, style.card_background);
    }

    #[test]
    fn test_vertical_connector_rule() {
        let scene = render(&stepper(1));
        let tracks: Vec<_> = scene.tracks().collect();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].fraction, 1.0);
        assert_eq!(tracks[1].fraction, 1.0);
        assert!(tracks.iter().all(|t| t.from.x == t.to.x && t.to.y > t.from.y));

        let scene = render(&stepper(0));
        let fractions: Vec<f32> = scene.tracks().map(|t| t.fraction).collect();
        assert_eq!(fractions, vec![1.0, 0.0]);
    }

    #[test]
    fn test_measure_grows_with_reveal() {
        let stepper = stepper(0);
        let settled = stepper.settled();
        let mut collapsed = settled.clone();
        collapsed[0].focus = 0.0;
        assert!(stepper.measure(360.0, &settled) > stepper.measure(360.0, &collapsed));
    }

    #[test]
    fn test_steps_without_descriptions() {
        let stepper =
            CardStepper::new(Steps::from_titles(["A", "B"]), 0, StepperStyle::card()).unwrap();
        let scene = render(&stepper);
        assert_eq!(scene.texts().filter(|t| t.anchor == Anchor::TopLeft).count(), 2);
    }

    #[test]
    fn test_mismatched_descriptions_rejected() {
        let result = Steps::from_titles(["A", "B"]).with_descriptions(["only one"]);
        assert_eq!(
            result.unwrap_err(),
            StepperError::LengthMismatch {
                what: "descriptions",
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let stepper = stepper(2);
        assert_eq!(render(&stepper), render(&stepper));
    }
}
