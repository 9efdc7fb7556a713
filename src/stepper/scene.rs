//! Plain-data visual tree produced by stepper layouts
//!
//! A [`Scene`] is a flat, back-to-front list of primitives in local
//! coordinates. It carries no renderer state, so two renders of the same
//! input compare equal and tests can inspect geometry directly.

use iced::{Color, Point, Rectangle, Size};

use super::style::{IndicatorShape, StepperStyle};
use super::visual::{StepVisual, VariantKind, settled_visuals};
use super::{StepProgress, Steps};

/// Line height relative to font size
pub const LINE_HEIGHT: f32 = 1.3;

/// Average glyph advance relative to font size, used to size text columns
const GLYPH_ADVANCE: f32 = 0.55;

/// Rough single-line width of `text` at `size`
pub fn estimate_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ADVANCE
}

/// Stroke drawn around an indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub width: f32,
    pub color: Color,
}

/// Step indicator (circle, rounded square or square)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub step: usize,
    pub bounds: Rectangle,
    pub shape: IndicatorShape,
    pub fill: Color,
    pub outline: Option<Outline>,
}

impl Indicator {
    pub fn center(&self) -> Point {
        self.bounds.center()
    }
}

/// Pulse ring behind the current indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halo {
    pub step: usize,
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

/// Connector between two indicators with a partial fill from `from` towards `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Index of the step the connector leaves
    pub step: usize,
    pub from: Point,
    pub to: Point,
    pub thickness: f32,
    pub background: Color,
    pub fill: Color,
    pub fraction: f32,
    pub rounded: bool,
}

impl Track {
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }

    /// End point of the filled portion
    pub fn filled_end(&self) -> Point {
        let t = self.fraction.clamp(0.0, 1.0);
        Point::new(
            self.from.x + (self.to.x - self.from.x) * t,
            self.from.y + (self.to.y - self.from.y) * t,
        )
    }
}

/// Check mark inside a completed indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Check {
    pub step: usize,
    pub center: Point,
    /// Side of the square the mark is drawn in
    pub size: f32,
    pub color: Color,
}

/// Text anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    CenterLeft,
    Center,
}

/// Single line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub step: usize,
    pub content: String,
    pub position: Point,
    pub anchor: Anchor,
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

/// Card surface with a left accent bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    pub step: usize,
    pub bounds: Rectangle,
    pub radius: f32,
    pub background: Color,
    pub accent: Color,
    pub accent_width: f32,
    pub elevation: f32,
}

/// Scene primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Halo(Halo),
    Track(Track),
    Indicator(Indicator),
    Check(Check),
    Text(TextRun),
    Panel(Panel),
}

/// Visual tree of one stepper
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub size: Size,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Indicator(indicator) => Some(indicator),
            _ => None,
        })
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Track> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Track(track) => Some(track),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn checks(&self) -> impl Iterator<Item = &Check> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Check(check) => Some(check),
            _ => None,
        })
    }

    pub fn halos(&self) -> impl Iterator<Item = &Halo> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Halo(halo) => Some(halo),
            _ => None,
        })
    }

    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Panel(panel) => Some(panel),
            _ => None,
        })
    }
}

/// A stepper variant that can lay itself out into a [`Scene`]
pub trait StepperLayout {
    fn kind(&self) -> VariantKind;

    fn steps(&self) -> &Steps;

    fn progress(&self) -> StepProgress;

    fn style(&self) -> &StepperStyle;

    /// Height needed at `width` for the given visuals
    fn measure(&self, width: f32, visuals: &[StepVisual]) -> f32;

    /// Lay out every step using the given visuals
    fn layout(&self, size: Size, visuals: &[StepVisual]) -> Scene;

    /// Resting visuals for the current progress
    fn settled(&self) -> Vec<StepVisual> {
        settled_visuals(self.kind(), &self.progress(), self.style().active_scale)
    }

    /// Scene of the settled state
    fn render(&self, size: Size) -> Scene {
        self.layout(size, &self.settled())
    }

    /// Visual for step `index`, falling back to its settled value when the
    /// slice is shorter than the step list
    fn visual_at(&self, visuals: &[StepVisual], index: usize) -> StepVisual {
        visuals.get(index).copied().unwrap_or_else(|| {
            StepVisual::settled(
                self.kind(),
                self.progress().status(index),
                self.style().active_scale,
            )
        })
    }
}

/// Square of side `side * scale` centered on `center`
pub fn scaled_square(center: Point, side: f32, scale: f32) -> Rectangle {
    let scaled = side * scale;
    Rectangle {
        x: center.x - scaled / 2.0,
        y: center.y - scaled / 2.0,
        width: scaled,
        height: scaled,
    }
}

/// Leading edges of `count` items of size `item` spread over `extent`,
/// first item flush at `start`, last item flush at `start + extent`.
/// Items never overlap backwards when the extent is too small.
pub fn distribute(start: f32, extent: f32, item: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let slot = ((extent - item) / (count - 1) as f32).max(0.0);
            (0..count).map(|i| start + slot * i as f32).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute() {
        assert!(distribute(0.0, 100.0, 10.0, 0).is_empty());
        assert_eq!(distribute(16.0, 100.0, 10.0, 1), vec![16.0]);
        assert_eq!(distribute(0.0, 100.0, 10.0, 4), vec![0.0, 30.0, 60.0, 90.0]);
        // Too narrow: everything collapses onto the start
        assert_eq!(distribute(5.0, 4.0, 10.0, 3), vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn test_track_filled_end() {
        let track = Track {
            step: 0,
            from: Point::new(0.0, 10.0),
            to: Point::new(100.0, 10.0),
            thickness: 2.0,
            background: Color::BLACK,
            fill: Color::WHITE,
            fraction: 0.25,
            rounded: true,
        };
        assert_eq!(track.filled_end(), Point::new(25.0, 10.0));
        assert_eq!(track.length(), 100.0);

        let overshoot = Track {
            fraction: 1.4,
            ..track
        };
        assert_eq!(overshoot.filled_end(), Point::new(100.0, 10.0));
    }

    #[test]
    fn test_scaled_square() {
        let rect = scaled_square(Point::new(20.0, 20.0), 40.0, 1.5);
        assert_eq!(rect.width, 60.0);
        assert_eq!(rect.center(), Point::new(20.0, 20.0));
    }

    #[test]
    fn test_text_estimate_grows_with_length() {
        assert!(estimate_text_width("Successful", 12.0) > estimate_text_width("Done", 12.0));
        assert_eq!(estimate_text_width("", 12.0), 0.0);
    }
}
