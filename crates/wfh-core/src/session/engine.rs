//! Session engine implementation.
//!
//! The engine is a countdown state machine with no internal thread or
//! timer - the caller invokes `tick()` once per elapsed second. The CLI
//! drives it from a 1-second interval; tests drive it directly.
//!
//! ## State Transitions
//!
//! ```text
//! Running <-> Paused
//! Running -> Finished   (last step's countdown expires; terminal)
//! ```
//!
//! Seeking to another step resets that step's countdown and always forces
//! `Running`. Exactly one countdown is active per engine: every transition
//! that changes the step index or the running flag replaces the remaining
//! count, so two countdowns can never race on it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::duration::parse_duration_secs;
use crate::catalog::{Catalog, Routine};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Running,
    Paused,
    /// Terminal; only closing the session transitions out.
    Finished,
}

/// One routine step resolved against the catalog at session start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStep {
    pub exercise_id: String,
    /// `None` when the catalog has no exercise with this id; the step
    /// still runs, there is just nothing to display for it.
    pub exercise_name: Option<String>,
    pub duration_secs: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Guided-session countdown engine.
///
/// Starts in `Running` on the first step. Serializable so front ends can
/// persist it between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    routine_id: String,
    routine_name: String,
    steps: Vec<ResolvedStep>,
    state: SessionState,
    step_index: usize,
    remaining_secs: u32,
}

impl SessionEngine {
    /// Start a session for `routine`, resolving each step's exercise and
    /// effective duration against `catalog`.
    ///
    /// Effective duration per step: the step's override string if it
    /// parses, else the exercise's nominal duration, else 30 seconds.
    /// A routine with no steps is already `Finished`.
    pub fn new(routine: &Routine, catalog: &Catalog) -> Self {
        let steps: Vec<ResolvedStep> = routine
            .steps
            .iter()
            .map(|step| {
                let exercise = catalog.exercise(&step.exercise_id);
                let duration = step
                    .duration_override
                    .as_deref()
                    .or_else(|| exercise.and_then(|e| e.duration.as_deref()));
                ResolvedStep {
                    exercise_id: step.exercise_id.clone(),
                    exercise_name: exercise.map(|e| e.name.clone()),
                    duration_secs: parse_duration_secs(duration),
                    note: step.note.clone(),
                }
            })
            .collect();
        let remaining_secs = steps.first().map(|s| s.duration_secs).unwrap_or(0);
        Self {
            routine_id: routine.id.clone(),
            routine_name: routine.name.clone(),
            state: if steps.is_empty() {
                SessionState::Finished
            } else {
                SessionState::Running
            },
            steps,
            step_index: 0,
            remaining_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn routine_id(&self) -> &str {
        &self.routine_id
    }

    pub fn routine_name(&self) -> &str {
        &self.routine_name
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn steps(&self) -> &[ResolvedStep] {
        &self.steps
    }

    pub fn current_step(&self) -> Option<&ResolvedStep> {
        self.steps.get(self.step_index)
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        let step = self.current_step();
        Event::SessionSnapshot {
            state: self.state,
            routine_id: self.routine_id.clone(),
            step_index: self.step_index,
            step_count: self.steps.len(),
            exercise_id: step.map(|s| s.exercise_id.clone()),
            exercise_name: step.and_then(|s| s.exercise_name.clone()),
            remaining_secs: self.remaining_secs,
            total_secs: step.map(|s| s.duration_secs).unwrap_or(0),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Call once per elapsed second. While `Running`, decrements the
    /// countdown; a tick arriving at zero consumes the step expiry,
    /// advancing to the next step or finishing on the last one. No effect
    /// while `Paused` or `Finished`.
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        if self.remaining_secs > 0 {
            self.remaining_secs -= 1;
            return None;
        }
        if self.step_index + 1 < self.steps.len() {
            self.step_index += 1;
            self.remaining_secs = self.steps[self.step_index].duration_secs;
            Some(Event::StepAdvanced {
                step_index: self.step_index,
                exercise_id: self.steps[self.step_index].exercise_id.clone(),
                duration_secs: self.remaining_secs,
                at: Utc::now(),
            })
        } else {
            self.state = SessionState::Finished;
            Some(Event::SessionFinished { at: Utc::now() })
        }
    }

    /// Flip `Running`/`Paused` without touching the step index or the
    /// remaining count. No-op once `Finished`.
    pub fn toggle_pause(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Running => {
                self.state = SessionState::Paused;
                Some(Event::SessionPaused {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            SessionState::Paused => {
                self.state = SessionState::Running;
                Some(Event::SessionResumed {
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
            SessionState::Finished => None,
        }
    }

    pub fn seek_next(&mut self) -> Option<Event> {
        self.seek(self.step_index.saturating_add(1))
    }

    pub fn seek_previous(&mut self) -> Option<Event> {
        self.seek(self.step_index.saturating_sub(1))
    }

    /// Clamp to the step range, reset the countdown to the target step's
    /// full duration, and resume. Seeking past either end stays on the
    /// boundary step but still resets its countdown.
    fn seek(&mut self, target: usize) -> Option<Event> {
        if self.state == SessionState::Finished || self.steps.is_empty() {
            return None;
        }
        let from = self.step_index;
        let to = target.min(self.steps.len() - 1);
        self.step_index = to;
        self.remaining_secs = self.steps[to].duration_secs;
        self.state = SessionState::Running;
        Some(Event::SessionSeeked {
            from_step: from,
            to_step: to,
            duration_secs: self.remaining_secs,
            at: Utc::now(),
        })
    }
}
