//! Stepper core - status rules, input validation and scene layout
//!
//! Every variant is a pure function of `(steps, current index, style)`:
//!
//! - step `i` is **completed** when `i < current`
//! - step `i` is **active** when `i == current`
//! - step `i` is **upcoming** when `i > current`
//! - the connector after step `i` is filled when step `i` is completed or active
//!
//! Animated widgets interpolate between the settled visuals of two states
//! (see [`crate::ui::animation`]).
//!
//! # Variants
//!
//! - [`ShapedStepper`] - filled/outlined indicators with a custom shape
//! - [`SimpleStepper`] - ringed indicators with check marks, horizontal or vertical
//! - [`AnimatedStepper`] - indicators with a pulse ring around the current step
//! - [`CardStepper`] - vertical list of badges and description cards

pub mod animated;
pub mod card;
pub mod defaults;
pub mod scene;
pub mod shaped;
pub mod simple;
pub mod status;
pub mod style;
pub mod visual;

pub use animated::AnimatedStepper;
pub use card::CardStepper;
pub use defaults::StepperDefaults;
pub use scene::{Scene, StepperLayout};
pub use shaped::ShapedStepper;
pub use simple::{Orientation, SimpleStepper};
pub use status::{Step, StepProgress, StepStatus, Steps, connector_fill};
pub use style::{IndicatorShape, StepperStyle};
pub use visual::{Pulse, StepVisual, VariantKind, settled_visuals};

/// Errors raised while building a stepper
#[derive(Debug, Clone, PartialEq)]
pub enum StepperError {
    /// Current step pointer does not address a step
    IndexOutOfRange { index: usize, len: usize },
    /// Two parallel lists (markers/titles, titles/descriptions) differ in length
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// A style field holds a value the layout cannot use
    InvalidStyle { field: &'static str, reason: String },
}

impl std::fmt::Display for StepperError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepperError::IndexOutOfRange { index, len } => {
                write!(f, "Step index {} out of range for {} steps", index, len)
            }
            StepperError::LengthMismatch {
                what,
                expected,
                found,
            } => write!(f, "Expected {} {}, found {}", expected, what, found),
            StepperError::InvalidStyle { field, reason } => {
                write!(f, "Invalid style field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for StepperError {}
