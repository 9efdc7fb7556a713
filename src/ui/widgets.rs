//! Reusable UI widgets - composable components without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI patterns.
//! They should not depend on `crate::app` directly.
//!
//! # Relationship to Other Layers
//!
//! - **Primitives** (`crate::ui::primitives`): canvas programs
//! - **Widgets** (this module): Composable UI patterns

pub mod section_header;
pub mod step_controls;

pub use step_controls::ControlMessages;
