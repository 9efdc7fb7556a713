//! Animation prelude - commonly used types re-exported for convenience
//!
//! # Usage
//!
//! ```rust,ignore
//! use stepmotion::ui::animation::prelude::*;
//! ```

pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;

pub use super::spring::{Spring, SpringParams};

/// Animation presets for stepper channels
pub mod presets {
    use std::time::Duration;

    use super::*;

    /// Color and fill transitions
    pub fn color_fade(value: f32, duration_ms: u64) -> Animated<f32> {
        Animated::transition(
            value,
            Easing::EASE.with_duration(Duration::from_millis(duration_ms)),
        )
    }

    /// Size, ring and padding changes (ease-out for snappy feel)
    pub fn resize(value: f32, duration_ms: u64) -> Animated<f32> {
        Animated::transition(
            value,
            Easing::EASE_OUT.with_duration(Duration::from_millis(duration_ms)),
        )
    }

    /// Scale pop of the current indicator
    pub fn bouncy(value: f32) -> Spring {
        Spring::new(f64::from(value), SpringParams::SOFT_BOUNCY)
    }

    /// Check mark reveal
    pub fn check_pop(value: f32) -> Spring {
        Spring::new(f64::from(value), SpringParams::CHECK_POP)
    }

    /// Card focus without overshoot
    pub fn smooth(value: f32) -> Spring {
        Spring::new(f64::from(value), SpringParams::SMOOTH)
    }
}
