//! Pure aggregation over a [`ProgressMap`].
//!
//! Everything here is a deterministic function of its input: no I/O, no
//! caching. The input is bounded (21 days x 6 flags), so each view is
//! recomputed on demand.

use serde::{Deserialize, Serialize};

use super::{DayProgress, HabitKey, ProgressMap, CHALLENGE_DAYS, HABITS_PER_DAY, MAX_CHECKS};

/// Completion status of one challenge day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Day absent, or present with no flag set.
    Empty,
    /// At least one but not all six flags set.
    Partial,
    /// All six flags set.
    Full,
}

/// Summary statistics over the 21-day challenge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeStats {
    /// Total habit checks across all days (0..=126).
    pub total_checks: u32,
    /// `total_checks` as a rounded percentage of the 126 maximum.
    pub percentage: u32,
    /// Days with at least one flag set.
    pub completed_days: u32,
    /// Longest contiguous run of days with at least one flag set,
    /// anywhere in the 21-day span. Deliberately a best-run, not the run
    /// ending today; see DESIGN.md.
    pub current_streak: u32,
}

fn day_checks(map: &ProgressMap, day: u8) -> u32 {
    map.get(&day).map(DayProgress::checks).unwrap_or(0)
}

/// Completion status for `day` (1..=21).
pub fn day_status(map: &ProgressMap, day: u8) -> DayStatus {
    match day_checks(map, day) {
        0 => DayStatus::Empty,
        n if n == HABITS_PER_DAY => DayStatus::Full,
        _ => DayStatus::Partial,
    }
}

/// Summary statistics for the whole challenge.
pub fn challenge_stats(map: &ProgressMap) -> ChallengeStats {
    let mut total_checks = 0;
    let mut completed_days = 0;
    let mut current_streak = 0;
    let mut run = 0;
    for day in 1..=CHALLENGE_DAYS {
        let checks = day_checks(map, day);
        total_checks += checks;
        if checks > 0 {
            completed_days += 1;
            run += 1;
            current_streak = current_streak.max(run);
        } else {
            run = 0;
        }
    }
    ChallengeStats {
        total_checks,
        percentage: (f64::from(total_checks) / f64::from(MAX_CHECKS) * 100.0).round() as u32,
        completed_days,
        current_streak,
    }
}

/// Rounded percentage of the 21 days on which `habit` is done. Missing
/// days count as not done.
pub fn habit_density(map: &ProgressMap, habit: HabitKey) -> u32 {
    let done = (1..=CHALLENGE_DAYS)
        .filter(|day| map.get(day).is_some_and(|d| habit.is_set(d)))
        .count();
    (done as f64 / f64::from(CHALLENGE_DAYS) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(flags: [bool; 6]) -> DayProgress {
        let mut d = DayProgress::new_day();
        for (key, value) in HabitKey::ALL.into_iter().zip(flags) {
            key.set(&mut d, value);
        }
        d
    }

    #[test]
    fn empty_map_yields_zero_stats() {
        let map = ProgressMap::new();
        assert_eq!(challenge_stats(&map), ChallengeStats::default());
        for d in 1..=CHALLENGE_DAYS {
            assert_eq!(day_status(&map, d), DayStatus::Empty);
        }
        for h in HabitKey::ALL {
            assert_eq!(habit_density(&map, h), 0);
        }
    }

    #[test]
    fn day_status_partitions() {
        let mut map = ProgressMap::new();
        map.insert(1, day([false; 6]));
        map.insert(2, day([true, false, false, false, false, false]));
        map.insert(3, day([true; 6]));
        assert_eq!(day_status(&map, 1), DayStatus::Empty);
        assert_eq!(day_status(&map, 2), DayStatus::Partial);
        assert_eq!(day_status(&map, 3), DayStatus::Full);
        assert_eq!(day_status(&map, 4), DayStatus::Empty);
    }

    #[test]
    fn single_partial_day_scenario() {
        // Day 3 with mornFlow + neckBack done, pain 4, energy 7.
        let mut record = day([true, true, false, false, false, false]);
        record.pain_level = 4;
        record.energy_level = 7;
        let mut map = ProgressMap::new();
        map.insert(3, record);

        assert_eq!(day_status(&map, 3), DayStatus::Partial);
        assert_eq!(
            challenge_stats(&map),
            ChallengeStats {
                total_checks: 2,
                percentage: 2, // round(2/126*100)
                completed_days: 1,
                current_streak: 1,
            }
        );
    }

    #[test]
    fn streak_is_best_run_not_trailing_run() {
        let mut map = ProgressMap::new();
        // Days 2-5 active, gap, days 8-9 active: best run is 4.
        for d in [2, 3, 4, 5, 8, 9] {
            map.insert(d, day([true, false, false, false, false, false]));
        }
        let stats = challenge_stats(&map);
        assert_eq!(stats.completed_days, 6);
        assert_eq!(stats.current_streak, 4);
    }

    #[test]
    fn all_flag_false_day_breaks_a_streak() {
        let mut map = ProgressMap::new();
        map.insert(1, day([true, false, false, false, false, false]));
        map.insert(2, day([false; 6]));
        map.insert(3, day([true, false, false, false, false, false]));
        assert_eq!(challenge_stats(&map).current_streak, 1);
    }

    #[test]
    fn full_challenge_is_100_percent() {
        let mut map = ProgressMap::new();
        for d in 1..=CHALLENGE_DAYS {
            map.insert(d, day([true; 6]));
        }
        let stats = challenge_stats(&map);
        assert_eq!(stats.total_checks, 126);
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.completed_days, 21);
        assert_eq!(stats.current_streak, 21);
    }

    #[test]
    fn density_counts_one_habit_across_days() {
        let mut map = ProgressMap::new();
        for d in 1..=7 {
            map.insert(d, day([true, false, false, false, false, false]));
        }
        assert_eq!(habit_density(&map, HabitKey::MornFlow), 33); // round(7/21*100)
        assert_eq!(habit_density(&map, HabitKey::NeckBack), 0);
    }

    fn arb_day() -> impl Strategy<Value = DayProgress> {
        (any::<[bool; 6]>(), 0..=10u8, 0..=10u8).prop_map(|(flags, pain, energy)| {
            let mut d = day(flags);
            d.pain_level = pain;
            d.energy_level = energy;
            d
        })
    }

    fn arb_map() -> impl Strategy<Value = ProgressMap> {
        proptest::collection::btree_map(1..=CHALLENGE_DAYS, arb_day(), 0..=21)
    }

    proptest! {
        #[test]
        fn percentage_is_bounded_and_consistent(map in arb_map()) {
            let stats = challenge_stats(&map);
            prop_assert!(stats.percentage <= 100);
            let expected =
                (f64::from(stats.total_checks) / 126.0 * 100.0).round() as u32;
            prop_assert_eq!(stats.percentage, expected);
        }

        #[test]
        fn streak_never_exceeds_completed_days(map in arb_map()) {
            let stats = challenge_stats(&map);
            prop_assert!(stats.current_streak <= stats.completed_days);
        }

        #[test]
        fn aggregation_is_idempotent(map in arb_map()) {
            prop_assert_eq!(challenge_stats(&map), challenge_stats(&map));
            for d in 1..=CHALLENGE_DAYS {
                prop_assert_eq!(day_status(&map, d), day_status(&map, d));
            }
        }

        #[test]
        fn exactly_one_status_per_day(map in arb_map()) {
            for d in 1..=CHALLENGE_DAYS {
                let status = day_status(&map, d);
                let checks = map.get(&d).map(DayProgress::checks).unwrap_or(0);
                match status {
                    DayStatus::Empty => prop_assert_eq!(checks, 0),
                    DayStatus::Partial => prop_assert!(checks > 0 && checks < 6),
                    DayStatus::Full => prop_assert_eq!(checks, 6),
                }
            }
        }
    }
}
