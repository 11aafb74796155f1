//! Playback-subsystem error type.

use thiserror::Error;

/// Errors produced by `sky-playback`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// `start` was called while a run is active. Reset first, or wait for
    /// the run to finish.
    #[error("playback is already running")]
    AlreadyRunning,
}

pub type PlaybackResult<T> = Result<T, PlaybackError>;
