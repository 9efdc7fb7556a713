//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//!
//! # Contents
//!
//! - [`StepperCanvas`] - Paints any [`StepperLayout`](crate::stepper::StepperLayout)

pub mod stepper_canvas;

pub use stepper_canvas::{StepperCanvas, stepper_height, view_stepper};
