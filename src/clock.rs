//! Time source abstraction.
//!
//! The boot sequencer and the hockey engine never sleep. They read "now"
//! from a [`TimeSource`] and fire their armed deadline when the host polls
//! them. Production code uses [`RealTimeSource`]; tests use
//! [`TestTimeSource`] and advance logical time by hand.

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Abstraction over the current instant.
pub trait TimeSource: Send + Sync + Debug {
    /// Get the current instant.
    fn now(&self) -> Instant;

    /// Calculate elapsed time since an earlier instant.
    fn elapsed_since(&self, earlier: Instant) -> Duration {
        self.now().saturating_duration_since(earlier)
    }
}

/// Shared handle to a time source.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    /// Create a shared RealTimeSource.
    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Controllable logical time for tests.
///
/// `now()` returns the instant captured at creation plus whatever has been
/// passed to [`advance`](Self::advance). Nothing moves on its own.
///
/// ```
/// use folio::clock::{TestTimeSource, TimeSource};
/// use std::time::Duration;
///
/// let time = TestTimeSource::new();
/// let start = time.now();
/// time.advance(Duration::from_millis(250));
/// assert_eq!(time.elapsed_since(start), Duration::from_millis(250));
/// ```
#[derive(Debug)]
pub struct TestTimeSource {
    logical_nanos: AtomicU64,
    base_instant: Instant,
}

impl Default for TestTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTimeSource {
    /// Create a new TestTimeSource with logical time starting at zero.
    pub fn new() -> Self {
        Self {
            logical_nanos: AtomicU64::new(0),
            base_instant: Instant::now(),
        }
    }

    /// Create a shared TestTimeSource.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Advance logical time by the given duration.
    pub fn advance(&self, duration: Duration) {
        self.logical_nanos
            .fetch_add(duration.as_nanos() as u64, Ordering::SeqCst);
    }

    /// Logical time elapsed since creation.
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.logical_nanos.load(Ordering::SeqCst))
    }
}

impl TimeSource for TestTimeSource {
    fn now(&self) -> Instant {
        self.base_instant + self.elapsed()
    }
}

/// A one-shot deadline.
///
/// Components hold at most one of these at a time; replacing or clearing
/// it is how a pending transition gets cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    /// When the deadline was armed
    pub armed_at: Instant,
    /// Instant at which it fires
    pub due: Instant,
}

impl Deadline {
    /// Arm a deadline `delay` after `from`.
    pub fn after(from: Instant, delay: Duration) -> Self {
        Self {
            armed_at: from,
            due: from + delay,
        }
    }

    /// Whether the deadline has passed at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_source_starts_at_zero() {
        let time = TestTimeSource::new();
        assert_eq!(time.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_time_source_advances_only_on_request() {
        let time = TestTimeSource::new();
        let start = time.now();
        assert_eq!(time.now(), start);

        time.advance(Duration::from_secs(3));
        assert_eq!(time.elapsed_since(start), Duration::from_secs(3));
    }

    #[test]
    fn real_time_source_is_monotonic() {
        let time = RealTimeSource;
        let a = time.now();
        let b = time.now();
        assert!(b >= a);
    }

    #[test]
    fn deadline_fires_at_exact_due_instant() {
        let time = TestTimeSource::new();
        let deadline = Deadline::after(time.now(), Duration::from_millis(100));

        time.advance(Duration::from_millis(99));
        assert!(!deadline.is_due(time.now()));
        time.advance(Duration::from_millis(1));
        assert!(deadline.is_due(time.now()));
    }
}
