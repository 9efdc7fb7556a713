//! Application state definitions

use std::time::Instant;

use iced::Theme;

use crate::features::Settings;
use crate::features::settings::{DemoSettings, StyleSettings};
use crate::stepper::{StepProgress, StepperStyle, Steps, VariantKind};
use crate::ui::animation::StepperAnimation;

/// Transitions of every stepper in the gallery
#[derive(Debug)]
pub struct GalleryMotion {
    pub shaped: StepperAnimation,
    pub simple: StepperAnimation,
    pub simple_vertical: StepperAnimation,
    pub animated: StepperAnimation,
    pub card: StepperAnimation,
}

impl GalleryMotion {
    pub fn new(progress: StepProgress, styles: &StyleSettings, enabled: bool, now: Instant) -> Self {
        let animation = |kind, style: &StepperStyle| {
            let mut animation = StepperAnimation::new(kind, progress, style.clone(), now);
            animation.set_enabled(enabled);
            animation
        };

        Self {
            shaped: animation(VariantKind::Shaped, &styles.shaped),
            simple: animation(VariantKind::Simple, &styles.simple),
            simple_vertical: animation(VariantKind::Simple, &styles.simple_vertical),
            animated: animation(VariantKind::Animated, &styles.animated),
            card: animation(VariantKind::Card, &styles.card),
        }
    }

    fn all(&self) -> [&StepperAnimation; 5] {
        [
            &self.shaped,
            &self.simple,
            &self.simple_vertical,
            &self.animated,
            &self.card,
        ]
    }

    fn all_mut(&mut self) -> [&mut StepperAnimation; 5] {
        [
            &mut self.shaped,
            &mut self.simple,
            &mut self.simple_vertical,
            &mut self.animated,
            &mut self.card,
        ]
    }

    pub fn set_progress(&mut self, progress: StepProgress, now: Instant) {
        for animation in self.all_mut() {
            animation.set_progress(progress, now);
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        for animation in self.all_mut() {
            animation.set_enabled(enabled);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for animation in self.all_mut() {
            animation.tick(now);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.all().iter().any(|animation| animation.is_animating())
    }
}

/// Main application state
pub struct App {
    pub(super) settings: Settings,
    pub(super) steps: Steps,
    pub(super) progress: StepProgress,
    pub(super) motion: GalleryMotion,
}

impl App {
    /// Build the gallery from loaded settings
    pub fn from_settings(settings: Settings, now: Instant) -> Self {
        let steps = settings.demo.steps().unwrap_or_else(|e| {
            tracing::warn!("Invalid demo steps ({}), using the built-in list", e);
            DemoSettings::default().steps().unwrap_or_default()
        });
        let progress = StepProgress::clamped(steps.len(), settings.demo.start_step);
        if progress.current() != settings.demo.start_step {
            tracing::warn!(
                "Start step {} out of range for {} steps, clamped to {}",
                settings.demo.start_step,
                steps.len(),
                progress.current()
            );
        }
        let motion = GalleryMotion::new(
            progress,
            &settings.styles,
            settings.display.animations,
            now,
        );

        Self {
            settings,
            steps,
            progress,
            motion,
        }
    }

    pub fn progress(&self) -> StepProgress {
        self.progress
    }

    pub fn steps(&self) -> &Steps {
        &self.steps
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn motion(&self) -> &GalleryMotion {
        &self.motion
    }

    pub fn current_theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Move every stepper to `progress`
    pub(super) fn go_to(&mut self, progress: StepProgress, now: Instant) {
        if progress == self.progress {
            return;
        }
        tracing::info!(
            "Step {} -> {} of {}",
            self.progress.current() + 1,
            progress.current() + 1,
            progress.total()
        );
        self.progress = progress;
        self.motion.set_progress(progress, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_gallery() {
        let app = App::from_settings(Settings::default(), Instant::now());
        assert_eq!(app.steps().len(), 3);
        assert_eq!(app.progress().current(), 0);
        assert_eq!(app.motion().card.progress(), app.progress());
        assert_eq!(app.current_theme(), Theme::Light);
    }

    #[test]
    fn test_start_step_is_clamped() {
        let mut settings = Settings::default();
        settings.demo.start_step = 9;
        let app = App::from_settings(settings, Instant::now());
        assert_eq!(app.progress().current(), 2);
    }

    #[test]
    fn test_mismatched_descriptions_fall_back() {
        let mut settings = Settings::default();
        settings.demo.titles = vec!["One".into(), "Two".into()];
        let app = App::from_settings(settings, Instant::now());
        assert_eq!(app.steps().len(), 3);
        assert_eq!(app.steps().get(0).map(|s| s.title.as_str()), Some("Pending"));
    }

    #[test]
    fn test_go_to_moves_every_stepper() {
        let now = Instant::now();
        let mut app = App::from_settings(Settings::default(), now);
        let next = app.progress().advance_wrapping();
        app.go_to(next, now);

        assert_eq!(app.progress().current(), 1);
        for animation in app.motion().all() {
            assert_eq!(animation.progress(), next);
        }
        assert!(app.motion().is_animating());
    }

    #[test]
    fn test_disabled_animations_settle_at_once() {
        let now = Instant::now();
        let mut settings = Settings::default();
        settings.display.animations = false;
        let mut app = App::from_settings(settings, now);
        app.go_to(app.progress().advance_wrapping(), now);
        assert!(!app.motion().is_animating());
    }
}
