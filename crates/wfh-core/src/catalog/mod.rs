//! Exercise and routine catalog.
//!
//! The catalog is immutable: it is defined once at process start and never
//! mutated. Routines reference exercises by id; a dangling reference is a
//! data-entry bug, never a user-triggered condition, so lookups stay
//! `Option`-returning and the session engine degrades instead of failing.

mod library;

use serde::{Deserialize, Serialize};

/// Body area or practice a catalog entry targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Neck,
    Back,
    #[serde(rename = "Wrists/Eyes")]
    WristsEyes,
    Breath,
    Mindset,
}

/// A single corrective movement or breathing technique.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub category: Category,
    pub description: String,
    /// Short rationale shown alongside the instructions.
    pub why: String,
    /// Ordered instruction lines.
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Nominal hold duration, e.g. `"30 sec"` or `"2 min"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// One step of a routine: an exercise reference with optional overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineStep {
    pub exercise_id: String,
    /// Overrides the exercise's nominal duration when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_override: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// An ordered sequence of exercise references run as one guided session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display label only; the effective timing comes from the steps.
    pub total_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    pub steps: Vec<RoutineStep>,
}

/// The full read-only library of exercises and routines.
#[derive(Debug, Clone)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    routines: Vec<Routine>,
}

impl Catalog {
    /// The built-in library shipped with the toolkit.
    pub fn builtin() -> Self {
        library::builtin()
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn exercise(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn routine(&self, id: &str) -> Option<&Routine> {
        self.routines.iter().find(|r| r.id == id)
    }

    /// All `(routine_id, exercise_id)` pairs where the exercise reference
    /// does not resolve. Empty for a well-authored catalog.
    pub fn missing_references(&self) -> Vec<(String, String)> {
        self.routines
            .iter()
            .flat_map(|r| r.steps.iter().map(move |s| (r, s)))
            .filter(|(_, step)| self.exercise(&step.exercise_id).is_none())
            .map(|(r, step)| (r.id.clone(), step.exercise_id.clone()))
            .collect()
    }
}
