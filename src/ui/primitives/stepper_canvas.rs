//! Stepper canvas primitive
//!
//! Paints a [`Scene`](crate::stepper::Scene) with iced's Canvas. The scene is laid out at draw time
//! so the stepper follows the width it is given.
//!
//! # Design
//!
//! This is a primitive component that implements `canvas::Program` trait.
//! It uses generic Message types and does not depend on application-specific types.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke, Text};
use iced::{Color, Element, Fill, Font, Point, Rectangle, Renderer, Theme, mouse};

use crate::stepper::scene::{Anchor, Check, Halo, Indicator, Node, Panel, TextRun, Track};
use crate::stepper::{IndicatorShape, StepVisual, StepperLayout};

/// Opacity of the card shadow at full elevation
const SHADOW_ALPHA: f32 = 0.12;

/// Canvas program drawing one stepper
#[derive(Debug)]
pub struct StepperCanvas<L> {
    layout: L,
    visuals: Vec<StepVisual>,
}

impl<L: StepperLayout> StepperCanvas<L> {
    pub fn new(layout: L, visuals: Vec<StepVisual>) -> Self {
        Self { layout, visuals }
    }
}

impl<L: StepperLayout, Message> Program<Message> for StepperCanvas<L> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let scene = self.layout.layout(bounds.size(), &self.visuals);

        for node in &scene.nodes {
            match node {
                Node::Halo(halo) => paint_halo(&mut frame, halo),
                Node::Track(track) => paint_track(&mut frame, track),
                Node::Indicator(indicator) => paint_indicator(&mut frame, indicator),
                Node::Check(check) => paint_check(&mut frame, check),
                Node::Text(run) => frame.fill_text(text(run)),
                Node::Panel(panel) => paint_panel(&mut frame, panel),
            }
        }

        vec![frame.into_geometry()]
    }
}

fn paint_halo(frame: &mut Frame, halo: &Halo) {
    if halo.color.a > 0.0 {
        frame.fill(&Path::circle(halo.center, halo.radius), halo.color);
    }
}

fn paint_track(frame: &mut Frame, track: &Track) {
    let cap = if track.rounded {
        LineCap::Round
    } else {
        LineCap::Butt
    };
    let stroke = |color: Color| {
        Stroke::default()
            .with_width(track.thickness)
            .with_color(color)
            .with_line_cap(cap)
    };

    frame.stroke(&Path::line(track.from, track.to), stroke(track.background));
    if track.fraction > 0.0 {
        frame.stroke(
            &Path::line(track.from, track.filled_end()),
            stroke(track.fill),
        );
    }
}

fn paint_indicator(frame: &mut Frame, indicator: &Indicator) {
    let bounds = indicator.bounds;
    let radius = indicator
        .shape
        .corner_radius(bounds.width.min(bounds.height));
    let path = match indicator.shape {
        IndicatorShape::Circle => Path::circle(indicator.center(), bounds.width / 2.0),
        IndicatorShape::Square => Path::rectangle(bounds.position(), bounds.size()),
        IndicatorShape::Rounded { .. } => rounded_rect(bounds, radius),
    };

    if indicator.fill.a > 0.0 {
        frame.fill(&path, indicator.fill);
    }
    if let Some(outline) = indicator.outline {
        if outline.width > 0.0 {
            frame.stroke(
                &path,
                Stroke::default()
                    .with_width(outline.width)
                    .with_color(outline.color),
            );
        }
    }
}

fn paint_check(frame: &mut Frame, check: &Check) {
    if check.size <= 0.0 {
        return;
    }
    let [start, corner, end] = check_points(check.center, check.size);
    let path = Path::new(|builder| {
        builder.move_to(start);
        builder.line_to(corner);
        builder.line_to(end);
    });
    frame.stroke(
        &path,
        Stroke::default()
            .with_width((check.size * 0.14).max(1.5))
            .with_color(check.color)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round),
    );
}

fn paint_panel(frame: &mut Frame, panel: &Panel) {
    let bounds = panel.bounds;
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return;
    }

    if panel.elevation > 0.0 {
        let shadow = Rectangle {
            x: bounds.x,
            y: bounds.y + panel.elevation,
            ..bounds
        };
        frame.fill(
            &rounded_rect(shadow, panel.radius),
            Color::from_rgba(0.0, 0.0, 0.0, SHADOW_ALPHA * panel.elevation / 4.0),
        );
    }

    // Accent shows as the left edge the body leaves uncovered
    frame.fill(&rounded_rect(bounds, panel.radius), panel.accent);
    let body = Rectangle {
        x: bounds.x + panel.accent_width,
        width: (bounds.width - panel.accent_width).max(0.0),
        ..bounds
    };
    frame.fill(&rounded_rect(body, panel.radius), panel.background);
}

/// Rectangle with all four corners rounded by `radius`
fn rounded_rect(bounds: Rectangle, radius: f32) -> Path {
    let r = radius.min(bounds.width / 2.0).min(bounds.height / 2.0).max(0.0);
    let Rectangle {
        x,
        y,
        width: w,
        height: h,
    } = bounds;

    Path::new(|builder| {
        builder.move_to(Point::new(x + r, y));
        builder.line_to(Point::new(x + w - r, y));
        builder.arc_to(Point::new(x + w, y), Point::new(x + w, y + r), r);
        builder.line_to(Point::new(x + w, y + h - r));
        builder.arc_to(Point::new(x + w, y + h), Point::new(x + w - r, y + h), r);
        builder.line_to(Point::new(x + r, y + h));
        builder.arc_to(Point::new(x, y + h), Point::new(x, y + h - r), r);
        builder.line_to(Point::new(x, y + r));
        builder.arc_to(Point::new(x, y), Point::new(x + r, y), r);
        builder.close();
    })
}

/// Start, corner and end of a check mark drawn in a `size` square
fn check_points(center: Point, size: f32) -> [Point; 3] {
    [
        Point::new(center.x - size * 0.35, center.y),
        Point::new(center.x - size * 0.1, center.y + size * 0.25),
        Point::new(center.x + size * 0.35, center.y - size * 0.25),
    ]
}

fn alignment(anchor: Anchor) -> (Horizontal, Vertical) {
    match anchor {
        Anchor::TopLeft => (Horizontal::Left, Vertical::Top),
        Anchor::TopCenter => (Horizontal::Center, Vertical::Top),
        Anchor::CenterLeft => (Horizontal::Left, Vertical::Center),
        Anchor::Center => (Horizontal::Center, Vertical::Center),
    }
}

fn text(run: &TextRun) -> Text {
    let (align_x, align_y) = alignment(run.anchor);
    let font = if run.bold {
        Font {
            weight: iced::font::Weight::Bold,
            ..Font::DEFAULT
        }
    } else {
        Font::DEFAULT
    };

    Text {
        content: run.content.clone(),
        position: run.position,
        color: run.color,
        size: iced::Pixels(run.size),
        font,
        align_x: align_x.into(),
        align_y,
        ..Text::default()
    }
}

/// Stepper element filling the available width at a fixed height
pub fn view_stepper<'a, Message: 'a, L: StepperLayout + 'a>(
    layout: L,
    visuals: Vec<StepVisual>,
    height: f32,
) -> Element<'a, Message> {
    Canvas::new(StepperCanvas::new(layout, visuals))
        .width(Fill)
        .height(height)
        .into()
}

/// Height a stepper needs for the given frame
pub fn stepper_height<L: StepperLayout>(layout: &L, visuals: &[StepVisual]) -> f32 {
    layout.measure(0.0, visuals).max(1.0)
}
