//! Per-step animatable values
//!
//! A [`StepVisual`] holds every scalar a layout reads for one step. Layouts
//! only ever see visuals, so a settled frame and a mid-transition frame go
//! through the same code.

use std::time::Duration;

use super::defaults::StepperDefaults;
use super::status::StepStatus;

/// Which stepper family a visual belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Shaped,
    Simple,
    Animated,
    Card,
}

impl VariantKind {
    /// Whether the current step carries a ring
    pub fn rings_current(self) -> bool {
        matches!(self, VariantKind::Simple)
    }

    /// Whether completed steps swap their marker for a check mark
    pub fn checks_completed(self) -> bool {
        !matches!(self, VariantKind::Shaped)
    }
}

/// Pulse ring state around the current indicator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    /// Ring radius relative to the indicator radius
    pub scale: f32,
    pub alpha: f32,
}

impl Pulse {
    /// Linear pulse restarting every `period`
    pub fn at(elapsed: Duration, period: Duration) -> Self {
        let period_secs = period.as_secs_f32();
        let phase = if period_secs > 0.0 {
            (elapsed.as_secs_f32() % period_secs) / period_secs
        } else {
            0.0
        };
        Self {
            scale: 1.0 + (StepperDefaults::PULSE_MAX_SCALE - 1.0) * phase,
            alpha: StepperDefaults::PULSE_START_ALPHA * (1.0 - phase),
        }
    }
}

/// Animatable snapshot of one step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepVisual {
    pub status: StepStatus,
    /// 0 = upcoming color, 1 = active color
    pub emphasis: f32,
    /// Ring around the current indicator (0..1 of the border width)
    pub ring: f32,
    pub scale: f32,
    /// Inner padding of the current indicator (0..1 of the configured padding)
    pub inset: f32,
    /// Check mark reveal; springs may overshoot 1
    pub check: f32,
    /// Fill fraction of the connector leaving this step
    pub connector: f32,
    /// 0 = inactive title color, 1 = active title color
    pub title: f32,
    /// Current-step emphasis for cards (elevation, tint, description)
    pub focus: f32,
    pub pulse: Option<Pulse>,
}

impl StepVisual {
    /// Resting values for `status` in the given variant
    pub fn settled(kind: VariantKind, status: StepStatus, active_scale: f32) -> Self {
        let reached = status.is_reached();
        let is_current = status == StepStatus::Active;
        let is_completed = status == StepStatus::Completed;

        Self {
            status,
            emphasis: flag(reached),
            ring: flag(is_current && kind.rings_current()),
            scale: if is_current { active_scale } else { 1.0 },
            inset: flag(is_current && kind.rings_current()),
            check: flag(is_completed && kind.checks_completed()),
            connector: flag(reached),
            title: flag(reached),
            focus: flag(is_current),
            pulse: None,
        }
    }

    /// Font weight switch for current-step labels
    pub fn is_bold(&self) -> bool {
        self.focus > 0.5
    }
}

fn flag(value: bool) -> f32 {
    if value { 1.0 } else { 0.0 }
}

/// Settled visuals for every step of a progress
pub fn settled_visuals(
    kind: VariantKind,
    progress: &super::StepProgress,
    active_scale: f32,
) -> Vec<StepVisual> {
    progress
        .statuses()
        .map(|status| StepVisual::settled(kind, status, active_scale))
        .collect()
}
