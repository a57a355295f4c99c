//! 21-day challenge progress: per-day records and derived statistics.
//!
//! A [`ProgressMap`] is sparse: an absent day means "nothing recorded",
//! which is distinct from a present record with every flag false only in
//! that both count as empty for aggregation but only one exists on the
//! wire.

mod stats;

pub use stats::{challenge_stats, day_status, habit_density, ChallengeStats, DayStatus};

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length of the challenge in days.
pub const CHALLENGE_DAYS: u8 = 21;

/// Habit flags per day.
pub const HABITS_PER_DAY: u32 = 6;

/// Maximum total habit checks over the challenge (21 x 6).
pub const MAX_CHECKS: u32 = CHALLENGE_DAYS as u32 * HABITS_PER_DAY;

/// Upper bound (inclusive) for the self-rated pain/energy metrics.
pub const METRIC_MAX: u8 = 10;

/// One calendar day's record within the 21-day challenge.
///
/// Field names on the wire are the original camelCase keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayProgress {
    #[serde(default)]
    pub morn_flow: bool,
    #[serde(default)]
    pub neck_back: bool,
    #[serde(default)]
    pub wrists_eyes: bool,
    #[serde(default)]
    pub lunch_reset: bool,
    #[serde(default)]
    pub focus_sigh: bool,
    #[serde(default)]
    pub shut_down: bool,
    /// 0..=10
    #[serde(default)]
    pub pain_level: u8,
    /// 0..=10
    #[serde(default)]
    pub energy_level: u8,
}

impl DayProgress {
    /// The record a front end creates when a day is first touched:
    /// no habits done, both metrics at the scale midpoint.
    pub fn new_day() -> Self {
        Self {
            pain_level: 5,
            energy_level: 5,
            ..Self::default()
        }
    }

    /// Number of habit flags set (0..=6).
    pub fn checks(&self) -> u32 {
        HabitKey::ALL.iter().filter(|h| h.is_set(self)).count() as u32
    }
}

/// Sparse day-number (1..=21) to [`DayProgress`] record for one user.
///
/// Serializes as a JSON object keyed by decimal day strings.
pub type ProgressMap = BTreeMap<u8, DayProgress>;

/// Names one of the six daily habit flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HabitKey {
    MornFlow,
    NeckBack,
    WristsEyes,
    LunchReset,
    FocusSigh,
    ShutDown,
}

impl HabitKey {
    pub const ALL: [HabitKey; 6] = [
        HabitKey::MornFlow,
        HabitKey::NeckBack,
        HabitKey::WristsEyes,
        HabitKey::LunchReset,
        HabitKey::FocusSigh,
        HabitKey::ShutDown,
    ];

    pub fn is_set(self, day: &DayProgress) -> bool {
        match self {
            HabitKey::MornFlow => day.morn_flow,
            HabitKey::NeckBack => day.neck_back,
            HabitKey::WristsEyes => day.wrists_eyes,
            HabitKey::LunchReset => day.lunch_reset,
            HabitKey::FocusSigh => day.focus_sigh,
            HabitKey::ShutDown => day.shut_down,
        }
    }

    pub fn set(self, day: &mut DayProgress, value: bool) {
        match self {
            HabitKey::MornFlow => day.morn_flow = value,
            HabitKey::NeckBack => day.neck_back = value,
            HabitKey::WristsEyes => day.wrists_eyes = value,
            HabitKey::LunchReset => day.lunch_reset = value,
            HabitKey::FocusSigh => day.focus_sigh = value,
            HabitKey::ShutDown => day.shut_down = value,
        }
    }

    /// Display label, as shown on the tracker.
    pub fn label(self) -> &'static str {
        match self {
            HabitKey::MornFlow => "Morning Flow",
            HabitKey::NeckBack => "Neck/Back",
            HabitKey::WristsEyes => "Wrist/Eye",
            HabitKey::LunchReset => "Midday",
            HabitKey::FocusSigh => "Breath",
            HabitKey::ShutDown => "Shutdown",
        }
    }
}

impl FromStr for HabitKey {
    type Err = String;

    /// Accepts the wire name (`mornFlow`) or its kebab form (`morn-flow`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mornFlow" | "morn-flow" => Ok(HabitKey::MornFlow),
            "neckBack" | "neck-back" => Ok(HabitKey::NeckBack),
            "wristsEyes" | "wrists-eyes" => Ok(HabitKey::WristsEyes),
            "lunchReset" | "lunch-reset" => Ok(HabitKey::LunchReset),
            "focusSigh" | "focus-sigh" => Ok(HabitKey::FocusSigh),
            "shutDown" | "shut-down" => Ok(HabitKey::ShutDown),
            other => Err(format!(
                "unknown habit '{other}' (expected one of: morn-flow, neck-back, \
                 wrists-eyes, lunch-reset, focus-sigh, shut-down)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_progress_wire_names() {
        let mut day = DayProgress::new_day();
        day.morn_flow = true;
        let json = serde_json::to_value(day).unwrap();
        assert_eq!(json["mornFlow"], true);
        assert_eq!(json["shutDown"], false);
        assert_eq!(json["painLevel"], 5);
        assert_eq!(json["energyLevel"], 5);
    }

    #[test]
    fn progress_map_keys_are_day_strings() {
        let mut map = ProgressMap::new();
        map.insert(3, DayProgress::default());
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"3":{"mornFlow":false,"neckBack":false,"wristsEyes":false,"lunchReset":false,"focusSigh":false,"shutDown":false,"painLevel":0,"energyLevel":0}}"#
        );
        let back: ProgressMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn checks_counts_set_flags() {
        let mut day = DayProgress::default();
        assert_eq!(day.checks(), 0);
        day.neck_back = true;
        day.focus_sigh = true;
        assert_eq!(day.checks(), 2);
    }

    #[test]
    fn habit_key_parses_both_spellings() {
        assert_eq!("mornFlow".parse::<HabitKey>(), Ok(HabitKey::MornFlow));
        assert_eq!("wrists-eyes".parse::<HabitKey>(), Ok(HabitKey::WristsEyes));
        assert!("breakfast".parse::<HabitKey>().is_err());
    }
}
