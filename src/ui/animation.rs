//! Animation system for steppers
//!
//! Tweens come from `iced_anim`; springs use the analytical solver in
//! [`spring`]. [`StepperAnimation`] drives one set of channels per step and
//! hands out [`StepVisual`](crate::stepper::StepVisual) frames.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stepmotion::ui::animation::prelude::*;
//!
//! let opacity: Animated<f32> = presets::color_fade(0.0, 400);
//! ```

pub mod prelude;
pub mod spring;
mod stepper_motion;

pub use spring::{Spring, SpringParams};
pub use stepper_motion::{Channel, StepperAnimation};
