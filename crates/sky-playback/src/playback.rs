//! The playback state machine.

use sky_core::{Millis, PlanarPoint};
use sky_graph::AirNetwork;
use sky_route::FlightPath;

use crate::{PlaybackError, PlaybackResult};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Lifecycle phase of a playback run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No run in progress (initial state, or after [`Playback::reset`]).
    #[default]
    Idle,
    /// A run is advancing; [`Playback::tick`] produces fresh samples.
    Running,
    /// The run reached full progress. Late ticks re-report the end state.
    Finished,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle     => "idle",
            Phase::Running  => "running",
            Phase::Finished => "finished",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Playback ──────────────────────────────────────────────────────────────────

/// Advances a normalized progress value over a fixed real-time duration and
/// maps it onto a position along a path.
///
/// # Cooperative model
///
/// The scheduler never spawns work or blocks: it advances only when the
/// caller invokes [`tick`](Self::tick) with a current timestamp, and it
/// derives progress from absolute elapsed time, so irregular tick intervals
/// never stretch or shrink the traversal duration. Timestamps must be
/// monotonically non-decreasing; an earlier timestamp saturates to zero
/// elapsed.
///
/// # Cancellation
///
/// [`reset`](Self::reset) returns to `Idle` immediately. The phase check is
/// the first thing `tick` does, so a tick that was already "in flight" when
/// the run was reset observes `Idle` and has no effect — a cancelled run
/// can never resurrect.
#[derive(Debug, Clone, Default)]
pub struct Playback {
    phase:         Phase,
    progress:      f32,
    started_at:    Millis,
    duration_ms:   u64,
    segment_count: usize,
}

impl Playback {
    /// A new scheduler in `Idle` with zero progress.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Progress of the current (or just-finished) run in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Begin playing `path` over `duration_ms` real milliseconds.
    ///
    /// Valid from `Idle` or `Finished`; fails with
    /// [`PlaybackError::AlreadyRunning`] while a run is active (consistent
    /// failure rather than a silent no-op). Progress restarts at 0 and the
    /// first sample appears on the next [`tick`](Self::tick).
    ///
    /// A `duration_ms` of 0 finishes on the first tick.
    pub fn start(&mut self, path: &FlightPath, duration_ms: u64, now: Millis) -> PlaybackResult<()> {
        if self.phase == Phase::Running {
            return Err(PlaybackError::AlreadyRunning);
        }
        self.phase         = Phase::Running;
        self.progress      = 0.0;
        self.started_at    = now;
        self.duration_ms   = duration_ms;
        self.segment_count = path.segment_count();
        Ok(())
    }

    /// Advance to the timestamp `now` and derive a sample.
    ///
    /// - `Idle` (never started, or cancelled) → `None`, no effect.
    /// - `Running` → the fresh sample; transitions to `Finished` (exactly
    ///   once) when progress reaches 1.
    /// - `Finished` → the final clamped sample, unchanged state.
    pub fn tick(&mut self, now: Millis) -> Option<PlaybackSample> {
        match self.phase {
            Phase::Idle => None,
            Phase::Finished => Some(self.sample()),
            Phase::Running => {
                let elapsed = now.since(self.started_at);
                self.progress = if self.duration_ms == 0 {
                    1.0
                } else {
                    (elapsed as f32 / self.duration_ms as f32).min(1.0)
                };
                if self.progress >= 1.0 {
                    self.phase = Phase::Finished;
                }
                Some(self.sample())
            }
        }
    }

    /// Cancel any run and return to `Idle` with zero progress.
    ///
    /// Effective immediately: every subsequent [`tick`](Self::tick) returns
    /// `None` until [`start`](Self::start) is called again.
    pub fn reset(&mut self) {
        *self = Playback::new();
    }

    fn sample(&self) -> PlaybackSample {
        let (segment, fraction) = segment_at(self.progress, self.segment_count);
        PlaybackSample { progress: self.progress, segment, fraction }
    }
}

/// Map a progress value onto `(segment index, fraction within segment)`.
///
/// `floor(progress × segment_count)`, clamped to the last segment so that
/// full progress lands at `(segment_count - 1, 1.0)` instead of one past
/// the end. A segment-less (single-node) path pins to `(0, 0.0)`.
fn segment_at(progress: f32, segment_count: usize) -> (usize, f32) {
    if segment_count == 0 {
        return (0, 0.0);
    }
    let scaled = progress * segment_count as f32;
    let segment = (scaled.floor() as usize).min(segment_count - 1);
    (segment, scaled - segment as f32)
}

// ── PlaybackSample ────────────────────────────────────────────────────────────

/// One `(progress, segment, fraction)` observation, produced per tick for
/// the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackSample {
    /// Overall progress in `[0, 1]`.
    pub progress: f32,

    /// Index of the path segment currently being traversed.
    pub segment: usize,

    /// Fractional position within that segment, in `[0, 1]`.
    pub fraction: f32,
}

impl PlaybackSample {
    /// Interpolated position along `path` for this sample.
    ///
    /// Blends linearly between the current segment's endpoint coordinates.
    /// `path` and `network` must be the pair the playback was started with;
    /// a single-node path yields that node's position.
    pub fn position(&self, path: &FlightPath, network: &AirNetwork) -> PlanarPoint {
        if path.is_trivial() {
            return network.position(path.nodes[0]);
        }
        let from = network.position(path.nodes[self.segment]);
        let to   = network.position(path.nodes[self.segment + 1]);
        from.lerp(to, self.fraction)
    }
}
