//! Boot sequence state machine
//!
//! Plays a fixed series of cosmetic "boot" scenes and then signals
//! completion exactly once, either because the last scene ran out or
//! because the viewer skipped.
//!
//! # Architecture
//!
//! - `scene`: scene catalogue, variants, per-scene timings and progress curve
//! - `state`: `BootState` value object and `BootEvent`
//! - `sequencer`: `BootSequencer`, the single-timer driver
//!
//! # Usage
//!
//! ```
//! use folio::boot::{BootSequencer, BootVariant};
//! use folio::clock::TestTimeSource;
//! use std::time::Duration;
//!
//! let clock = TestTimeSource::shared();
//! let mut boot = BootSequencer::new(BootVariant::Standard, clock.clone());
//! boot.start(|| println!("boot finished"));
//!
//! clock.advance(Duration::from_secs(60));
//! boot.poll();
//! assert!(boot.is_finished());
//! ```

mod scene;
mod sequencer;
mod state;

pub use scene::{progress_at, typed_at, BootVariant, Scene, LOGIN_MASK, PROGRESS_DURATION};
pub use sequencer::BootSequencer;
pub use state::{BootEvent, BootState};
