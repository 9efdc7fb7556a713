//! StepMotion - animated stepper widgets for iced
//!
//! Sequenced progress indicators built from indicator circles, connector
//! lines, labels and cards.
//!
//! # Layers
//!
//! - **Stepper** (`stepper`): step status rules, validated input, styles and
//!   the plain-data scene every variant lays out
//! - **UI** (`ui`): animation channels, the canvas primitive that paints a
//!   scene, and theme helpers
//! - **Features** (`features`): settings persistence and key bindings used by
//!   the demo application

pub mod features;
pub mod stepper;
pub mod ui;
