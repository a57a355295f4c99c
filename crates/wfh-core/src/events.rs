use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::SessionState;

/// Every session-engine transition produces an Event.
/// Front ends print or forward them; tests assert on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Countdown for one step expired and the next step began.
    StepAdvanced {
        step_index: usize,
        exercise_id: String,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    SessionPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    SessionResumed {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// Manual step navigation; a seek always resumes playback.
    SessionSeeked {
        from_step: usize,
        to_step: usize,
        duration_secs: u32,
        at: DateTime<Utc>,
    },
    /// The last step's countdown expired; terminal.
    SessionFinished {
        at: DateTime<Utc>,
    },
    SessionSnapshot {
        state: SessionState,
        routine_id: String,
        step_index: usize,
        step_count: usize,
        exercise_id: Option<String>,
        exercise_name: Option<String>,
        remaining_secs: u32,
        total_secs: u32,
        at: DateTime<Utc>,
    },
}
