//! Default values shared by all stepper variants
//!
//! | Group | Small | Medium | Large |
//! |-------|-------|--------|-------|
//! | Circle size | 32 | 36 | 40 |
//! | Title font | 12 | 13 | - |
//! | Spacing | 4 | 6 | 8 |
//! | Connector | 2 | 3 | 4 |

use iced::{Color, color};

/// Namespace for stepper defaults
pub struct StepperDefaults;

impl StepperDefaults {
    // Circle sizes
    pub const SMALL_CIRCLE_SIZE: f32 = 32.0;
    pub const MEDIUM_CIRCLE_SIZE: f32 = 36.0;
    pub const LARGE_CIRCLE_SIZE: f32 = 40.0;

    // Typography
    pub const CIRCLE_NUMBER_FONT_SIZE: f32 = 16.0;
    pub const SMALL_TITLE_FONT_SIZE: f32 = 12.0;
    pub const MEDIUM_TITLE_FONT_SIZE: f32 = 13.0;
    pub const DESCRIPTION_FONT_SIZE: f32 = 12.0;

    // Spacing
    pub const SMALL_SPACING: f32 = 4.0;
    pub const MEDIUM_SPACING: f32 = 6.0;
    pub const LARGE_SPACING: f32 = 8.0;

    // Connector
    pub const THIN_CONNECTOR: f32 = 2.0;
    pub const MEDIUM_CONNECTOR: f32 = 3.0;
    pub const THICK_CONNECTOR: f32 = 4.0;

    /// Ring around the current indicator
    pub const BORDER_WIDTH: f32 = 2.0;

    // Animation durations (ms)
    pub const COLOR_ANIMATION_DURATION: u64 = 400;
    pub const SCALE_ANIMATION_DURATION: u64 = 300;
    pub const PULSE_ANIMATION_DURATION: u64 = 1000;

    // Spring presets as (damping ratio, stiffness) with unit mass
    pub const BOUNCY_DAMPING_RATIO: f64 = 0.5;
    pub const BOUNCY_STIFFNESS: f64 = 400.0;
    pub const SMOOTH_DAMPING_RATIO: f64 = 1.0;
    pub const SMOOTH_STIFFNESS: f64 = 200.0;

    // Pulse ring
    pub const PULSE_MAX_SCALE: f32 = 1.3;
    pub const PULSE_START_ALPHA: f32 = 0.6;

    /// Alpha applied to the active color for not-yet-reached indicators
    pub const UPCOMING_ALPHA: f32 = 0.3;

    /// Teal accent used by the demo screen
    pub const ACCENT: Color = color!(0x06a2c2);
}
