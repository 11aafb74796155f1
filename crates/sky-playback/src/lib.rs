//! `sky-playback` — cooperative playback of a computed route.
//!
//! # Crate layout
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`playback`] | `Playback`, `Phase`, `PlaybackSample`               |
//! | [`error`]    | `PlaybackError`, `PlaybackResult<T>`                |
//!
//! # Driving model
//!
//! The caller owns the clock: it calls [`Playback::tick`] with a current
//! timestamp on every frame/timer signal and stops calling after
//! [`Playback::reset`] or once the run is `Finished`. The scheduler itself
//! never blocks, spawns, or schedules anything — `tick` is a pure state
//! transition, which is what makes cancellation airtight (a reset run
//! reports `None` to any straggler tick).

pub mod error;
pub mod playback;


pub use error::{PlaybackError, PlaybackResult};
pub use playback::{Phase, Playback, PlaybackSample};
