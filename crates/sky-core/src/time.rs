//! Playback clock time.
//!
//! Playback progress is derived from absolute elapsed wall-clock time, not
//! from how many ticks happened to arrive, so frame-rate jitter never
//! stretches a run. [`Millis`] is the timestamp unit: milliseconds on some
//! monotonic clock chosen by the caller (the epoch is irrelevant — only
//! differences are used).

use std::fmt;

/// A timestamp in milliseconds on the caller's monotonic clock.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds elapsed from `earlier` to `self`.
    ///
    /// Saturates to 0 when `earlier` is in the future, so a slightly
    /// out-of-order timestamp reads as "no time has passed" rather than
    /// wrapping around.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> Millis {
        Millis(self.0 + ms)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
