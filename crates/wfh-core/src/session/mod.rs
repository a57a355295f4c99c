//! Guided-session playback: duration parsing and the countdown engine.

mod duration;
mod engine;

pub use duration::{parse_duration_secs, DEFAULT_STEP_SECS};
pub use engine::{ResolvedStep, SessionEngine, SessionState};
