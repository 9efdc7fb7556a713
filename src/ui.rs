//! UI layer for steppers and the demo window
//!
//! # Architecture
//!
//! - **Animation** (`animation`): channels turning progress changes into frames
//! - **Primitives** (`primitives`): the canvas program painting a scene
//! - **Widgets** (`widgets`): composable pieces of the demo screen
//! - **Theme** (`theme`): light and dark palettes

pub mod animation;
pub mod primitives;
pub mod theme;
pub mod widgets;

pub use primitives::{stepper_height, view_stepper};
