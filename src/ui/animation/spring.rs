//! Spring physics for stepper transitions
//!
//! Uses time-based analytical solutions rather than frame-by-frame integration.
//!
//! ## Presets
//!
//! | Usage | damping ratio | stiffness |
//! |-------|---------------|-----------|
//! | Bouncy (indicator scale) | 0.5 | 400 |
//! | Soft bouncy (animated stepper scale) | 0.5 | 200 |
//! | Smooth (card focus) | 1.0 | 200 |
//! | Check pop | 0.6 | 400 |
//!
//! ## Key Algorithm
//!
//! `damping = ratio * 2 * sqrt(stiffness * mass)`; a ratio of 1 or more is
//! solved as critically/over damped, anything lower oscillates.
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta - velocity
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = (damping * delta - 2 * mass * velocity) / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::f64::consts::E;
use std::sync::Arc;

use crate::stepper::StepperDefaults;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Distance, speed and acceleration under which a spring counts as arrived
const REST_THRESHOLD: Num = 0.001;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Indicator pop with a visible overshoot
    pub const BOUNCY: Self = Self::from_ratio(
        StepperDefaults::BOUNCY_DAMPING_RATIO,
        StepperDefaults::BOUNCY_STIFFNESS,
    );

    /// Slower bounce for the animated stepper's current indicator
    pub const SOFT_BOUNCY: Self = Self::from_ratio(StepperDefaults::BOUNCY_DAMPING_RATIO, 200.0);

    /// No overshoot
    pub const SMOOTH: Self = Self::from_ratio(
        StepperDefaults::SMOOTH_DAMPING_RATIO,
        StepperDefaults::SMOOTH_STIFFNESS,
    );

    /// Check mark reveal
    pub const CHECK_POP: Self = Self::from_ratio(0.6, 400.0);

    /// Unit-mass spring from a damping ratio and a stiffness
    pub const fn from_ratio(ratio: Num, stiffness: Num) -> Self {
        // sqrt is not const; unit mass keeps the critical damping at 2 * sqrt(k)
        Self {
            mass: 1.0,
            damping: ratio * 2.0 * const_sqrt(stiffness),
            stiffness,
        }
    }

    pub fn damping_ratio(&self) -> Num {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping_ratio()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::SMOOTH
    }
}

/// Newton iteration usable in const context
const fn const_sqrt(value: Num) -> Num {
    if value <= 0.0 {
        return 0.0;
    }
    let mut guess = if value > 1.0 { value / 2.0 } else { 1.0 };
    let mut i = 0;
    while i < 64 {
        guess = 0.5 * (guess + value / guess);
        i += 1;
    }
    guess
}

/// Solver function type
type SolverFn = Arc<dyn Fn(Num) -> Num + Send + Sync>;

/// Create solver function for spring animation
fn solve_spring(from: Num, velocity: Num, to: Num, params: &SpringParams) -> SolverFn {
    let SpringParams {
        mass,
        damping,
        stiffness,
    } = *params;
    let delta = to - from;

    if params.is_overdamped() {
        let angular_frequency = -(stiffness / mass).sqrt();
        let leftover = -angular_frequency * delta - velocity;

        Arc::new(move |t: Num| to - (delta + t * leftover) * E.powf(t * angular_frequency))
    } else {
        let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
        let leftover = (damping * delta - 2.0 * mass * velocity) / damping_frequency;
        let dfm = 0.5 * damping_frequency / mass;
        let dm = -0.5 * damping / mass;

        Arc::new(move |t: Num| {
            to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * E.powf(t * dm)
        })
    }
}

/// Create velocity function from position function (numerical derivative)
fn get_velocity(f: SolverFn) -> SolverFn {
    Arc::new(move |t: Num| (f(t + H) - f(t - H)) / (2.0 * H))
}

/// Spring animation with analytical solution
///
/// Retargeting keeps the current velocity, so interrupted transitions stay
/// continuous.
#[derive(Clone)]
pub struct Spring {
    current_position: Num,
    target_position: Num,
    current_time: Num,
    params: SpringParams,
    /// Cached position solver
    current_solver: SolverFn,
    /// Cached velocity function (first derivative)
    get_v: SolverFn,
    /// Cached acceleration function (second derivative)
    get_v2: SolverFn,
}

impl std::fmt::Debug for Spring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Spring")
            .field("current_position", &self.current_position)
            .field("target_position", &self.target_position)
            .field("current_time", &self.current_time)
            .field("params", &self.params)
            .finish()
    }
}

impl Spring {
    /// Spring resting at `position`
    pub fn new(position: Num, params: SpringParams) -> Self {
        Self {
            current_position: position,
            target_position: position,
            current_time: 0.0,
            params,
            current_solver: Arc::new(move |_| position),
            get_v: Arc::new(|_| 0.0),
            get_v2: Arc::new(|_| 0.0),
        }
    }

    /// Reset solver with current state
    fn reset_solver(&mut self) {
        let cur_v = (self.get_v)(self.current_time);
        self.current_time = 0.0;
        self.current_solver = solve_spring(
            self.current_position,
            cur_v,
            self.target_position,
            &self.params,
        );
        self.get_v = get_velocity(Arc::clone(&self.current_solver));
        self.get_v2 = get_velocity(Arc::clone(&self.get_v));
    }

    /// Check if spring has arrived at target
    pub fn arrived(&self) -> bool {
        (self.target_position - self.current_position).abs() < REST_THRESHOLD
            && (self.get_v)(self.current_time).abs() < REST_THRESHOLD
            && (self.get_v2)(self.current_time).abs() < REST_THRESHOLD
    }

    /// Set position immediately without animation
    pub fn set_position(&mut self, position: Num) {
        self.target_position = position;
        self.current_position = position;
        self.current_time = 0.0;
        self.current_solver = Arc::new(move |_| position);
        self.get_v = Arc::new(|_| 0.0);
        self.get_v2 = Arc::new(|_| 0.0);
    }

    /// Advance by `delta` seconds
    pub fn update(&mut self, delta: Num) {
        self.current_time += delta;
        self.current_position = (self.current_solver)(self.current_time);

        if self.arrived() {
            self.set_position(self.target_position);
        }
    }

    /// Start moving towards `target`; no-op when already heading there
    pub fn set_target(&mut self, target: Num) {
        if target == self.target_position {
            return;
        }
        self.target_position = target;
        self.reset_solver();
    }

    pub fn position(&self) -> Num {
        self.current_position
    }

    pub fn target(&self) -> Num {
        self.target_position
    }

    pub fn velocity(&self) -> Num {
        (self.get_v)(self.current_time)
    }

    pub fn params(&self) -> &SpringParams {
        &self.params
    }

    pub fn is_animating(&self) -> bool {
        self.current_position != self.target_position || self.velocity() != 0.0
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(0.0, SpringParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, seconds: Num) -> Vec<Num> {
        let steps = (seconds / 0.01) as usize;
        (0..steps)
            .map(|_| {
                spring.update(0.01);
                spring.position()
            })
            .collect()
    }

    #[test]
    fn test_spring_basic() {
        let mut spring = Spring::new(0.0, SpringParams::SMOOTH);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.update(0.01);
        }

        let pos = spring.position();
        assert!(pos > 0.0, "Spring should move from 0");
        assert!(pos < 100.0, "Spring should not reach target yet");
    }

    #[test]
    fn test_presets_from_ratio() {
        assert_eq!(SpringParams::BOUNCY.stiffness, 400.0);
        assert!((SpringParams::BOUNCY.damping - 20.0).abs() < 1e-9);
        assert!((SpringParams::BOUNCY.damping_ratio() - 0.5).abs() < 1e-9);
        assert!((SpringParams::SMOOTH.damping_ratio() - 1.0).abs() < 1e-9);
        assert!((SpringParams::CHECK_POP.damping_ratio() - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_overdamped() {
        assert!(SpringParams::SMOOTH.is_overdamped());
        assert!(!SpringParams::BOUNCY.is_overdamped());
        assert!(!SpringParams::SOFT_BOUNCY.is_overdamped());
    }

    #[test]
    fn test_bouncy_overshoots_then_settles() {
        let mut spring = Spring::new(0.0, SpringParams::BOUNCY);
        spring.set_target(1.0);
        let positions = run(&mut spring, 3.0);

        let peak = positions.iter().cloned().fold(Num::MIN, Num::max);
        assert!(peak > 1.0, "bouncy spring should overshoot, peak {}", peak);
        assert_eq!(spring.position(), 1.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_smooth_never_overshoots() {
        let mut spring = Spring::new(0.0, SpringParams::SMOOTH);
        spring.set_target(1.0);
        let positions = run(&mut spring, 3.0);

        assert!(positions.iter().all(|p| *p <= 1.0 + 1e-9));
        assert_eq!(spring.position(), 1.0);
    }

    #[test]
    fn test_retarget_keeps_motion_continuous() {
        let mut spring = Spring::new(0.0, SpringParams::BOUNCY);
        spring.set_target(1.0);
        run(&mut spring, 0.05);
        let before = spring.position();

        spring.set_target(0.0);
        spring.update(0.001);
        assert!((spring.position() - before).abs() < 0.05);
    }

    #[test]
    fn test_set_position_is_immediate() {
        let mut spring = Spring::new(0.0, SpringParams::BOUNCY);
        spring.set_position(5.0);
        assert_eq!(spring.position(), 5.0);
        assert!(!spring.is_animating());
    }
}
