//! Single-timer boot sequencer.

use std::fmt;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::scene::{progress_at, typed_at, BootVariant, Scene};
use super::state::{BootEvent, BootState};
use crate::clock::{Deadline, SharedTimeSource};

/// Lifecycle of the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Created, `start` not yet called
    Idle,
    /// A scene is showing and its deadline is armed
    Running,
    /// The last scene ran out
    Completed,
    /// Cut short by `skip`
    Skipped,
}

/// Drives the boot scenes off one armed deadline at a time.
///
/// Transitions only happen inside [`poll`](Self::poll), as a pure function
/// of the current scene and whether its deadline has passed. Skipping
/// clears the deadline, so nothing armed earlier can fire afterwards.
pub struct BootSequencer {
    clock: SharedTimeSource,
    variant: BootVariant,
    state: BootState,
    phase: Phase,
    deadline: Option<Deadline>,
    on_complete: Option<Box<dyn FnOnce()>>,
}

impl fmt::Debug for BootSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootSequencer")
            .field("variant", &self.variant)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("deadline", &self.deadline)
            .field("completion_pending", &self.on_complete.is_some())
            .finish()
    }
}

impl BootSequencer {
    /// Create a sequencer for `variant`; nothing runs until [`start`](Self::start).
    pub fn new(variant: BootVariant, clock: SharedTimeSource) -> Self {
        Self {
            clock,
            variant,
            state: BootState::new(variant.first()),
            phase: Phase::Idle,
            deadline: None,
            on_complete: None,
        }
    }

    /// Begin the first scene immediately.
    ///
    /// `on_complete` is invoked exactly once, either when the last scene
    /// ends or from [`skip`](Self::skip). Calling `start` a second time is
    /// ignored.
    pub fn start(&mut self, on_complete: impl FnOnce() + 'static) {
        if self.phase != Phase::Idle {
            warn!("boot sequence already started, ignoring start");
            return;
        }
        self.on_complete = Some(Box::new(on_complete));
        self.phase = Phase::Running;
        let now = self.clock.now();
        info!(variant = ?self.variant, "boot sequence started");
        self.enter_scene(self.variant.first(), now);
    }

    /// Fire every deadline that has passed and refresh progress.
    ///
    /// Each new scene is anchored at the deadline that ended the previous
    /// one, so one late poll behaves like many punctual ones.
    pub fn poll(&mut self) -> BootEvent {
        if self.phase != Phase::Running {
            return BootEvent::Idle;
        }

        let now = self.clock.now();
        let mut event = BootEvent::Idle;

        while let Some(deadline) = self.deadline {
            if !deadline.is_due(now) {
                break;
            }
            match self.variant.next_after(self.state.scene) {
                Some(next) => {
                    self.enter_scene(next, deadline.due);
                    event = BootEvent::SceneChanged(next);
                }
                None => {
                    self.deadline = None;
                    self.phase = Phase::Completed;
                    info!("boot sequence completed");
                    self.fire_completion();
                    return BootEvent::Completed;
                }
            }
        }

        self.refresh(now);
        event
    }

    /// Cut the sequence short.
    ///
    /// Honored only while running and before the terminal scene. Latches
    /// `skipped`, disarms the pending deadline and fires the completion
    /// callback if it has not fired yet. Returns whether the skip took
    /// effect; repeated calls return `false` and do nothing.
    pub fn skip(&mut self) -> bool {
        if self.phase != Phase::Running || self.state.scene >= Scene::TERMINAL {
            return false;
        }
        self.state.skipped = true;
        self.deadline = None;
        self.phase = Phase::Skipped;
        info!(scene = self.state.scene.index(), "boot sequence skipped");
        self.fire_completion();
        true
    }

    /// Current observable state.
    pub fn state(&self) -> &BootState {
        &self.state
    }

    /// Variant being played.
    pub fn variant(&self) -> BootVariant {
        self.variant
    }

    /// Whether a scene is currently showing.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Whether the sequence ended, by completion or skip.
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Completed | Phase::Skipped)
    }

    /// Whether a skip would be honored right now.
    pub fn can_skip(&self) -> bool {
        self.phase == Phase::Running && self.state.scene < Scene::TERMINAL
    }

    fn enter_scene(&mut self, scene: Scene, at: Instant) {
        debug!(scene = scene.index(), "entering boot scene");
        self.state.scene = scene;
        self.state.progress = 0;
        self.state.typed = 0;
        self.deadline = Some(Deadline::after(at, scene.duration()));
    }

    fn refresh(&mut self, now: Instant) {
        if let Some(deadline) = self.deadline {
            let elapsed = now.saturating_duration_since(deadline.armed_at);
            let scene = self.state.scene;
            self.state.progress = self.state.progress.max(progress_at(scene, elapsed));
            self.state.typed = self.state.typed.max(typed_at(scene, elapsed));
        }
    }

    fn fire_completion(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}
