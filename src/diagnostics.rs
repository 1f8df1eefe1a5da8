//! Developer control surface.
//!
//! The host registers a [`ControlSurface`] when it starts and keeps the
//! returned [`Registration`] alive for as long as it runs. Dropping the
//! registration tears the surface down again. Everything is thread-local:
//! the host runs on a single thread and the handles are not `Send`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

/// Handles the host exposes to developer tooling.
#[derive(Clone)]
pub struct ControlSurface {
    /// Jump past the boot sequence
    pub skip_boot: Rc<dyn Fn()>,
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface").finish_non_exhaustive()
    }
}

thread_local! {
    static REGISTRY: RefCell<Option<ControlSurface>> = const { RefCell::new(None) };
}

/// Keeps a surface registered until dropped.
#[derive(Debug)]
#[must_use = "the control surface is unregistered when this guard is dropped"]
pub struct Registration {
    _private: (),
}

impl Drop for Registration {
    fn drop(&mut self) {
        REGISTRY.with(|slot| slot.borrow_mut().take());
        debug!("control surface unregistered");
    }
}

/// Register `surface`, replacing any previous one.
pub fn register(surface: ControlSurface) -> Registration {
    REGISTRY.with(|slot| {
        if slot.borrow_mut().replace(surface).is_some() {
            warn!("replacing an existing control surface");
        }
    });
    debug!("control surface registered");
    Registration { _private: () }
}

/// Whether a surface is currently registered.
pub fn is_registered() -> bool {
    REGISTRY.with(|slot| slot.borrow().is_some())
}

/// Ask the registered host to skip its boot sequence.
///
/// Returns `false` when nothing is registered.
pub fn skip_boot() -> bool {
    // Clone the handle out so the callback can touch the registry
    let handle = REGISTRY.with(|slot| slot.borrow().as_ref().map(|s| Rc::clone(&s.skip_boot)));
    match handle {
        Some(skip) => {
            skip();
            true
        }
        None => false,
    }
}

/// Hidden-feature hints.
pub fn secrets() -> Vec<String> {
    vec![
        "Konami Code: ↑↑↓↓←→←→BA - Try it!".to_string(),
        "Easter Eggs: Multiple hidden features throughout".to_string(),
    ]
}

/// How to reach the terminal.
pub fn terminal_hint() -> Vec<String> {
    vec![
        "Terminal mode can be activated with the Konami Code!".to_string(),
        "Commands available: help, ls, cat, skills, contact, whoami".to_string(),
    ]
}
