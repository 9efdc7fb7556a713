//! Stepper style configuration
//!
//! One explicit struct carries every cosmetic value a variant reads.
//! Presets reproduce each variant's stock look; [`StepperStyle::validate`]
//! must pass before a stepper is built.

use iced::{Color, color};
use serde::{Deserialize, Serialize};

use super::StepperError;
use super::defaults::StepperDefaults as D;

/// Outline of the step indicator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorShape {
    #[default]
    Circle,
    /// Rounded square with the given corner radius
    Rounded { radius: f32 },
    Square,
}

impl IndicatorShape {
    /// Corner radius for an indicator of the given side length
    pub fn corner_radius(&self, side: f32) -> f32 {
        match self {
            IndicatorShape::Circle => side / 2.0,
            IndicatorShape::Rounded { radius } => radius.min(side / 2.0),
            IndicatorShape::Square => 0.0,
        }
    }
}

/// Colors, sizes and timings of a stepper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperStyle {
    /// Completed and current indicators, filled connectors
    #[serde(with = "hex_color")]
    pub active_color: Color,
    /// Upcoming indicators and empty connectors
    #[serde(with = "hex_color")]
    pub inactive_color: Color,
    #[serde(with = "hex_color")]
    pub active_title_color: Color,
    #[serde(with = "hex_color")]
    pub inactive_title_color: Color,
    /// Marker text on a filled indicator
    #[serde(with = "hex_color")]
    pub marker_color: Color,
    /// Marker text on an unfilled indicator (shaped stepper)
    #[serde(with = "hex_color")]
    pub inactive_marker_color: Color,
    #[serde(with = "hex_color")]
    pub card_background: Color,

    pub circle_size: f32,
    pub marker_font_size: f32,
    pub title_font_size: f32,
    pub description_font_size: f32,
    /// Gap between an indicator and its label (or card)
    pub spacing: f32,
    pub connector_thickness: f32,
    /// Gap between an indicator and the connector next to it
    pub connector_gap: f32,
    pub border_width: f32,
    /// Inner padding of the current indicator
    pub inner_padding: f32,
    /// Scale of the current indicator
    pub active_scale: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    pub shape: IndicatorShape,

    pub color_duration_ms: u64,
    pub scale_duration_ms: u64,
    /// Pulse ring around the current indicator
    pub pulse: bool,
    pub pulse_duration_ms: u64,
}

impl Default for StepperStyle {
    fn default() -> Self {
        Self::animated()
    }
}

impl StepperStyle {
    /// Ringed indicators with check marks
    pub fn simple() -> Self {
        Self {
            active_color: D::ACCENT,
            inactive_color: color!(0xcccccc),
            active_title_color: D::ACCENT,
            inactive_title_color: color!(0x888888),
            marker_color: Color::WHITE,
            inactive_marker_color: Color::WHITE,
            card_background: color!(0xffffff),
            circle_size: D::SMALL_CIRCLE_SIZE,
            marker_font_size: 18.0,
            title_font_size: D::MEDIUM_TITLE_FONT_SIZE,
            description_font_size: D::DESCRIPTION_FONT_SIZE,
            spacing: D::SMALL_SPACING,
            connector_thickness: D::THIN_CONNECTOR,
            connector_gap: D::SMALL_SPACING,
            border_width: D::BORDER_WIDTH,
            inner_padding: 4.0,
            active_scale: 1.1,
            padding_x: 16.0,
            padding_y: 8.0,
            shape: IndicatorShape::Circle,
            color_duration_ms: D::COLOR_ANIMATION_DURATION,
            scale_duration_ms: D::SCALE_ANIMATION_DURATION,
            pulse: false,
            pulse_duration_ms: D::PULSE_ANIMATION_DURATION,
        }
    }

    /// Simple stepper laid out top to bottom
    pub fn simple_vertical() -> Self {
        Self {
            title_font_size: 16.0,
            ..Self::simple()
        }
    }

    /// Filled/outlined indicators joined by solid bars
    pub fn shaped() -> Self {
        Self {
            inactive_color: color!(0x888888),
            inactive_title_color: Color::BLACK,
            inactive_marker_color: Color::BLACK,
            circle_size: D::LARGE_CIRCLE_SIZE,
            border_width: 1.0,
            connector_gap: 0.0,
            inner_padding: 0.0,
            active_scale: 1.0,
            ..Self::simple()
        }
    }

    /// Pulsing current indicator
    pub fn animated() -> Self {
        Self {
            inactive_color: color!(0x888888),
            active_title_color: color!(0x1a1a1a),
            circle_size: D::LARGE_CIRCLE_SIZE,
            marker_font_size: D::CIRCLE_NUMBER_FONT_SIZE,
            title_font_size: D::SMALL_TITLE_FONT_SIZE,
            spacing: D::MEDIUM_SPACING,
            connector_thickness: D::MEDIUM_CONNECTOR,
            connector_gap: 2.0,
            inner_padding: 0.0,
            active_scale: 1.15,
            pulse: true,
            ..Self::simple()
        }
    }

    /// Badges with description cards
    pub fn card() -> Self {
        Self {
            inactive_color: color!(0x888888),
            card_background: color!(0xf5f5f5),
            circle_size: D::MEDIUM_CIRCLE_SIZE,
            marker_font_size: 15.0,
            title_font_size: 15.0,
            description_font_size: 13.0,
            spacing: 12.0,
            connector_thickness: D::MEDIUM_CONNECTOR,
            connector_gap: 0.0,
            inner_padding: 0.0,
            active_scale: 1.0,
            ..Self::simple()
        }
    }

    /// Same style with new accent colors
    pub fn with_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    pub fn with_title_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_title_color = active;
        self.inactive_title_color = inactive;
        self
    }

    pub fn with_shape(mut self, shape: IndicatorShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_pulse(mut self, enabled: bool) -> Self {
        self.pulse = enabled;
        self
    }

    /// Check every size and timing the layouts depend on
    pub fn validate(&self) -> Result<(), StepperError> {
        positive("circle_size", self.circle_size)?;
        positive("marker_font_size", self.marker_font_size)?;
        positive("title_font_size", self.title_font_size)?;
        positive("description_font_size", self.description_font_size)?;
        positive("active_scale", self.active_scale)?;

        non_negative("spacing", self.spacing)?;
        non_negative("connector_thickness", self.connector_thickness)?;
        non_negative("connector_gap", self.connector_gap)?;
        non_negative("border_width", self.border_width)?;
        non_negative("inner_padding", self.inner_padding)?;
        non_negative("padding_x", self.padding_x)?;
        non_negative("padding_y", self.padding_y)?;

        if self.inner_padding * 2.0 >= self.circle_size {
            return Err(invalid(
                "inner_padding",
                format!(
                    "{} leaves no room inside a {} indicator",
                    self.inner_padding, self.circle_size
                ),
            ));
        }
        if let IndicatorShape::Rounded { radius } = self.shape {
            non_negative("shape.radius", radius)?;
        }
        if self.color_duration_ms == 0 {
            return Err(invalid("color_duration_ms", "must be greater than zero"));
        }
        if self.scale_duration_ms == 0 {
            return Err(invalid("scale_duration_ms", "must be greater than zero"));
        }
        if self.pulse && self.pulse_duration_ms == 0 {
            return Err(invalid("pulse_duration_ms", "must be greater than zero"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> StepperError {
    StepperError::InvalidStyle {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), StepperError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{} is not a positive size", value)))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), StepperError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("{} is negative or not finite", value)))
    }
}

/// Replace the alpha channel
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Linear blend from `from` to `to`; `t` is clamped to `[0, 1]`
pub fn mix(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let s = 1.0 - t;
    Color {
        r: from.r * s + to.r * t,
        g: from.g * s + to.g * t,
        b: from.b * s + to.b * t,
        a: from.a * s + to.a * t,
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional)
pub fn parse_hex(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let r = channel(0)?;
    let g = channel(2)?;
    let b = channel(4)?;
    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Some(Color::from_rgba8(r, g, b, a as f32 / 255.0))
}

/// Format as `#rrggbb`, or `#rrggbbaa` when not opaque
pub fn to_hex(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    if a == 255 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }
}

/// Serde adapter storing colors as hex strings
mod hex_color {
    use iced::Color;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_hex(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {}", value)))
    }
}
