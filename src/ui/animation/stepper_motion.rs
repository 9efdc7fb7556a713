//! Per-step animation channels
//!
//! Every step owns one channel per [`StepVisual`] scalar. Retargeting a
//! progress moves each channel towards the settled value of the new status;
//! reading [`StepperAnimation::visuals`] samples them into a frame.

use std::time::{Duration, Instant};

use iced_anim::Animated;

use super::prelude::presets;
use super::spring::Spring;
use crate::stepper::{Pulse, StepProgress, StepStatus, StepVisual, StepperStyle, VariantKind};

/// One animated scalar
#[derive(Debug)]
pub enum Channel {
    /// Eased transition with a fixed duration
    Tween(Animated<f32>),
    /// Physics spring, may overshoot
    Spring(Spring),
    /// Jumps straight to its target
    Snap(f32),
}

impl Channel {
    pub fn value(&self) -> f32 {
        match self {
            Channel::Tween(animated) => *animated.value(),
            Channel::Spring(spring) => spring.position() as f32,
            Channel::Snap(value) => *value,
        }
    }

    pub fn target(&self) -> f32 {
        match self {
            Channel::Tween(animated) => *animated.target(),
            Channel::Spring(spring) => spring.target() as f32,
            Channel::Snap(value) => *value,
        }
    }

    pub fn set_target(&mut self, target: f32) {
        if self.target() == target {
            return;
        }
        match self {
            Channel::Tween(animated) => animated.update(target.into()),
            Channel::Spring(spring) => spring.set_target(f64::from(target)),
            Channel::Snap(value) => *value = target,
        }
    }

    /// Advance to `now`; springs step by `delta`
    pub fn tick(&mut self, now: Instant, delta: Duration) {
        match self {
            Channel::Tween(animated) => animated.tick(now),
            Channel::Spring(spring) => spring.update(delta.as_secs_f64()),
            Channel::Snap(_) => {}
        }
    }

    pub fn is_animating(&self) -> bool {
        match self {
            Channel::Tween(animated) => animated.is_animating(),
            Channel::Spring(spring) => spring.is_animating(),
            Channel::Snap(_) => false,
        }
    }
}

/// Which kind of channel drives a visual field
#[derive(Debug, Clone, Copy)]
enum Motion {
    Color,
    Resize,
    Bouncy,
    CheckPop,
    Smooth,
    Snap,
}

impl Motion {
    fn channel(self, value: f32, style: &StepperStyle) -> Channel {
        match self {
            Motion::Color => Channel::Tween(presets::color_fade(value, style.color_duration_ms)),
            Motion::Resize => Channel::Tween(presets::resize(value, style.scale_duration_ms)),
            Motion::Bouncy => Channel::Spring(presets::bouncy(value)),
            Motion::CheckPop => Channel::Spring(presets::check_pop(value)),
            Motion::Smooth => Channel::Spring(presets::smooth(value)),
            Motion::Snap => Channel::Snap(value),
        }
    }
}

/// Channel kinds per field: emphasis, ring, scale, inset, check, connector, title, focus
type MotionPlan = [Motion; 8];

fn plan(kind: VariantKind, enabled: bool) -> MotionPlan {
    use Motion::*;

    if !enabled {
        return [Snap; 8];
    }
    match kind {
        VariantKind::Shaped => [Snap; 8],
        VariantKind::Simple => [Color, Resize, Resize, Resize, Color, Color, Color, Color],
        VariantKind::Animated => [Color, Snap, Bouncy, Snap, CheckPop, Color, Color, Color],
        VariantKind::Card => [Color, Snap, Snap, Snap, Color, Color, Color, Smooth],
    }
}

#[derive(Debug)]
struct StepChannels {
    channels: [Channel; 8],
}

impl StepChannels {
    fn new(target: &StepVisual, plan: &MotionPlan, style: &StepperStyle) -> Self {
        let values = fields(target);
        Self {
            channels: std::array::from_fn(|i| plan[i].channel(values[i], style)),
        }
    }

    fn retarget(&mut self, target: &StepVisual) {
        for (channel, value) in self.channels.iter_mut().zip(fields(target)) {
            channel.set_target(value);
        }
    }

    fn sample(&self, status: StepStatus, pulse: Option<Pulse>) -> StepVisual {
        let [emphasis, ring, scale, inset, check, connector, title, focus] =
            std::array::from_fn(|i| self.channels[i].value());
        StepVisual {
            status,
            emphasis,
            ring,
            scale,
            inset,
            check,
            connector,
            title,
            focus,
            pulse,
        }
    }
}

fn fields(visual: &StepVisual) -> [f32; 8] {
    [
        visual.emphasis,
        visual.ring,
        visual.scale,
        visual.inset,
        visual.check,
        visual.connector,
        visual.title,
        visual.focus,
    ]
}

/// Drives the transitions of one stepper
#[derive(Debug)]
pub struct StepperAnimation {
    kind: VariantKind,
    progress: StepProgress,
    style: StepperStyle,
    enabled: bool,
    steps: Vec<StepChannels>,
    pulse_origin: Instant,
    last_tick: Option<Instant>,
}

impl StepperAnimation {
    /// Channels resting at the settled state of `progress`
    pub fn new(kind: VariantKind, progress: StepProgress, style: StepperStyle, now: Instant) -> Self {
        let mut animation = Self {
            kind,
            progress,
            style,
            enabled: true,
            steps: Vec::new(),
            pulse_origin: now,
            last_tick: None,
        };
        animation.rebuild();
        animation
    }

    pub fn progress(&self) -> StepProgress {
        self.progress
    }

    pub fn kind(&self) -> VariantKind {
        self.kind
    }

    fn settled(&self, index: usize) -> StepVisual {
        StepVisual::settled(
            self.kind,
            self.progress.status(index),
            self.style.active_scale,
        )
    }

    fn rebuild(&mut self) {
        let plan = plan(self.kind, self.enabled);
        self.steps = (0..self.progress.total())
            .map(|i| StepChannels::new(&self.settled(i), &plan, &self.style))
            .collect();
    }

    /// Retarget every channel to the settled state of `progress`
    pub fn set_progress(&mut self, progress: StepProgress, now: Instant) {
        if progress == self.progress {
            return;
        }
        let resized = progress.total() != self.progress.total();
        if progress.current() != self.progress.current() {
            self.pulse_origin = now;
        }
        self.progress = progress;
        // Springs step from the retarget, not from the last frame before an idle gap
        self.last_tick = Some(now);

        if resized {
            tracing::debug!(total = progress.total(), "Step count changed, rebuilding channels");
            self.rebuild();
            return;
        }
        for i in 0..self.steps.len() {
            let target = self.settled(i);
            self.steps[i].retarget(&target);
        }
    }

    /// Turn transitions on or off; switching settles everything at once
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.rebuild();
        }
    }

    pub fn set_style(&mut self, style: StepperStyle) {
        if self.style != style {
            self.style = style;
            self.rebuild();
        }
    }

    /// Advance every channel to `now`
    pub fn tick(&mut self, now: Instant) {
        let delta = self
            .last_tick
            .map(|last| now.saturating_duration_since(last))
            .unwrap_or_default();
        self.last_tick = Some(now);

        for step in &mut self.steps {
            for channel in &mut step.channels {
                channel.tick(now, delta);
            }
        }
    }

    /// Whether the pulse ring is running
    pub fn is_pulsing(&self) -> bool {
        self.enabled
            && self.kind == VariantKind::Animated
            && self.style.pulse
            && !self.progress.is_empty()
    }

    /// True while any channel moves or the pulse runs
    pub fn is_animating(&self) -> bool {
        self.is_pulsing()
            || self
                .steps
                .iter()
                .any(|step| step.channels.iter().any(Channel::is_animating))
    }

    /// Frame of every step at `now`
    pub fn visuals(&self, now: Instant) -> Vec<StepVisual> {
        let period = Duration::from_millis(self.style.pulse_duration_ms);
        let pulse = self
            .is_pulsing()
            .then(|| Pulse::at(now.saturating_duration_since(self.pulse_origin), period));

        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let status = self.progress.status(i);
                let pulse = if status == StepStatus::Active { pulse } else { None };
                step.sample(status, pulse)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stepper::settled_visuals;

    fn progress(current: usize) -> StepProgress {
        StepProgress::new(4, current).unwrap()
    }

    #[test]
    fn test_starts_settled() {
        let now = Instant::now();
        let animation =
            StepperAnimation::new(VariantKind::Simple, progress(1), StepperStyle::simple(), now);
        let expected = settled_visuals(VariantKind::Simple, &progress(1), 1.1);
        assert_eq!(animation.visuals(now), expected);
    }

    #[test]
    fn test_snap_channel() {
        let mut channel = Channel::Snap(0.0);
        channel.set_target(1.0);
        assert_eq!(channel.value(), 1.0);
        assert!(!channel.is_animating());
    }

    #[test]
    fn test_shaped_snaps_immediately() {
        let now = Instant::now();
        let mut animation =
            StepperAnimation::new(VariantKind::Shaped, progress(0), StepperStyle::shaped(), now);
        animation.set_progress(progress(2), now);

        assert!(!animation.is_animating());
        assert_eq!(
            animation.visuals(now),
            settled_visuals(VariantKind::Shaped, &progress(2), 1.0)
        );
    }

    #[test]
    fn test_disabled_animations_snap() {
        let now = Instant::now();
        let mut animation =
            StepperAnimation::new(VariantKind::Simple, progress(0), StepperStyle::simple(), now);
        animation.set_enabled(false);
        animation.set_progress(progress(3), now);

        assert!(!animation.is_animating());
        assert_eq!(
            animation.visuals(now),
            settled_visuals(VariantKind::Simple, &progress(3), 1.1)
        );
    }

    #[test]
    fn test_springs_move_then_settle() {
        let start = Instant::now();
        let style = StepperStyle::animated().with_pulse(false);
        let mut animation =
            StepperAnimation::new(VariantKind::Animated, progress(0), style, start);
        animation.tick(start);
        animation.set_progress(progress(1), start);
        assert!(animation.is_animating());

        animation.tick(start + Duration::from_millis(16));
        let frame = animation.visuals(start + Duration::from_millis(16));
        assert!(frame[0].check > 0.0 && frame[0].check < 1.0);
        assert!(frame[1].scale > 1.0 && frame[1].scale < 1.15);
        assert_eq!(frame[0].status, StepStatus::Completed);

        let late = start + Duration::from_secs(5);
        animation.tick(late);
        let frame = animation.visuals(late);
        assert_eq!(frame[0].check, 1.0);
        assert_eq!(frame[1].scale, 1.15);
        assert_eq!(frame[0].scale, 1.0);
    }

    #[test]
    fn test_idle_gap_does_not_skip_springs() {
        let start = Instant::now();
        let style = StepperStyle::animated().with_pulse(false);
        let mut animation =
            StepperAnimation::new(VariantKind::Animated, progress(0), style, start);
        animation.tick(start);

        let retarget = start + Duration::from_secs(10);
        animation.set_progress(progress(1), retarget);
        let frame_time = retarget + Duration::from_millis(16);
        animation.tick(frame_time);

        let frame = animation.visuals(frame_time);
        assert!(frame[0].check < 1.0);
        assert!(frame[1].scale < 1.15);
        assert!(animation.is_animating());
    }

    #[test]
    fn test_pulse_only_on_current_step() {
        let now = Instant::now();
        let animation = StepperAnimation::new(
            VariantKind::Animated,
            progress(2),
            StepperStyle::animated(),
            now,
        );
        let frame = animation.visuals(now + Duration::from_millis(250));

        let pulsing: Vec<usize> = frame
            .iter()
            .enumerate()
            .filter(|(_, v)| v.pulse.is_some())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(pulsing, vec![2]);
        assert!(animation.is_animating());
    }

    #[test]
    fn test_pulse_restarts_on_step_change() {
        let start = Instant::now();
        let mut animation = StepperAnimation::new(
            VariantKind::Animated,
            progress(0),
            StepperStyle::animated(),
            start,
        );
        let later = start + Duration::from_millis(400);
        let before = animation.visuals(later)[0].pulse.unwrap();
        assert!(before.scale > 1.0);

        animation.set_progress(progress(1), later);
        let after = animation.visuals(later)[1].pulse.unwrap();
        assert_eq!(after.scale, 1.0);
    }

    #[test]
    fn test_resizes_with_step_count() {
        let now = Instant::now();
        let mut animation =
            StepperAnimation::new(VariantKind::Card, progress(1), StepperStyle::card(), now);
        animation.set_progress(StepProgress::new(6, 5).unwrap(), now);

        let frame = animation.visuals(now);
        assert_eq!(frame.len(), 6);
        assert_eq!(frame[5].status, StepStatus::Active);
        assert_eq!(frame[5].focus, 1.0);
    }

    #[test]
    fn test_no_pulse_when_disabled() {
        let now = Instant::now();
        let animation = StepperAnimation::new(
            VariantKind::Animated,
            progress(1),
            StepperStyle::animated().with_pulse(false),
            now,
        );
        assert!(animation.visuals(now).iter().all(|v| v.pulse.is_none()));
        assert!(!animation.is_pulsing());
    }
}
