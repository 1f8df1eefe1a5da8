//! Scene catalogue and timings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Length of a progress-bar animation once a scene has warmed up.
pub const PROGRESS_DURATION: Duration = Duration::from_millis(3000);

/// Masked password typed out in the login scene.
pub const LOGIN_MASK: &str = "••••••••";

/// Delay between typed login characters.
const LOGIN_TYPE_INTERVAL: Duration = Duration::from_millis(120);

/// Pause after the last login character before completing.
const LOGIN_HOLD: Duration = Duration::from_millis(800);

/// One discrete phase of the boot sequence.
///
/// The discriminant is the scene number shown to renderers; it only ever
/// increases over the life of a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scene {
    /// Fake crash screen with a "collecting info" progress bar
    Crash = 0,
    /// "Restarting... configuring updates" with a second progress bar
    Restart = 1,
    /// "Loading Portfolio..." banner
    Loading = 2,
    /// Typed-password login screen (extended variant only)
    Login = 3,
}

impl Scene {
    /// Scenes at or past this one can no longer be skipped.
    pub const TERMINAL: Scene = Scene::Login;

    /// Scene number.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Delay between entering the scene and starting its animation.
    pub fn warmup(self) -> Duration {
        match self {
            Scene::Crash => Duration::from_millis(100),
            Scene::Restart => Duration::from_millis(200),
            Scene::Loading => Duration::from_millis(3000),
            Scene::Login => Duration::ZERO,
        }
    }

    /// Time spent in the scene after warm-up.
    pub fn hold(self) -> Duration {
        match self {
            Scene::Crash | Scene::Restart => Duration::from_millis(3500),
            Scene::Loading => Duration::from_millis(1000),
            Scene::Login => {
                LOGIN_TYPE_INTERVAL * LOGIN_MASK.chars().count() as u32 + LOGIN_HOLD
            }
        }
    }

    /// Total time from entering the scene until it hands over.
    pub fn duration(self) -> Duration {
        self.warmup() + self.hold()
    }

    /// Whether the scene shows a progress bar.
    pub fn has_progress(self) -> bool {
        matches!(self, Scene::Crash | Scene::Restart)
    }
}

/// Which scenes a sequencer plays.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BootVariant {
    /// Crash, then loading
    Minimal,
    /// Crash, restart, loading
    #[default]
    Standard,
    /// Crash, restart, loading, then the typed-password login
    Extended,
}

impl BootVariant {
    /// Scenes in playback order.
    pub fn scenes(self) -> &'static [Scene] {
        match self {
            BootVariant::Minimal => &[Scene::Crash, Scene::Loading],
            BootVariant::Standard => &[Scene::Crash, Scene::Restart, Scene::Loading],
            BootVariant::Extended => &[Scene::Crash, Scene::Restart, Scene::Loading, Scene::Login],
        }
    }

    /// First scene of the variant.
    pub fn first(self) -> Scene {
        self.scenes()[0]
    }

    /// Scene that follows `scene`, or `None` when `scene` is the last one.
    pub fn next_after(self, scene: Scene) -> Option<Scene> {
        let scenes = self.scenes();
        let pos = scenes.iter().position(|s| *s == scene)?;
        scenes.get(pos + 1).copied()
    }

    /// Sum of all scene durations.
    pub fn total_duration(self) -> Duration {
        self.scenes().iter().map(|s| s.duration()).sum()
    }
}

/// Progress percentage `elapsed` after entering `scene`.
///
/// Follows a power2-out ease over [`PROGRESS_DURATION`], starting once the
/// warm-up is over. Scenes without a progress bar always report 0.
pub fn progress_at(scene: Scene, elapsed: Duration) -> u8 {
    if !scene.has_progress() {
        return 0;
    }
    let running = elapsed.saturating_sub(scene.warmup());
    let t = (running.as_secs_f64() / PROGRESS_DURATION.as_secs_f64()).clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    (eased * 100.0).floor() as u8
}

/// Number of login characters typed `elapsed` after entering `scene`.
pub fn typed_at(scene: Scene, elapsed: Duration) -> usize {
    if scene != Scene::Login {
        return 0;
    }
    let running = elapsed.saturating_sub(scene.warmup());
    let typed = (running.as_millis() / LOGIN_TYPE_INTERVAL.as_millis()) as usize;
    typed.min(LOGIN_MASK.chars().count())
}
