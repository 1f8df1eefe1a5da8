//! Observable boot state.

use super::scene::Scene;

/// What the renderer sees of the boot sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootState {
    /// Current scene; never decreases
    pub scene: Scene,
    /// One-way latch set by a successful skip
    pub skipped: bool,
    /// Progress percent of the current scene's bar, 0..=100
    pub progress: u8,
    /// Login characters typed so far
    pub typed: usize,
}

impl BootState {
    /// State at mount: first scene, nothing skipped, empty bar.
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            skipped: false,
            progress: 0,
            typed: 0,
        }
    }
}

/// Result of polling the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootEvent {
    /// Nothing fired
    Idle,
    /// A scene boundary was crossed; carries the scene now showing
    SceneChanged(Scene),
    /// The final scene ran out and the completion callback fired
    Completed,
}
