use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use wfh_core::{
    challenge_stats, day_status, habit_density, validate_progress, DayProgress, HabitKey,
    ProgressMap, CHALLENGE_DAYS,
};

const PROGRESS_FILE: &str = "progress.json";

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Toggle a habit flag for a day
    Toggle {
        /// Challenge day, 1-21
        day: u8,
        /// Habit key, e.g. `morn-flow` or `neck-back`
        habit: String,
    },
    /// Set a self-rated metric for a day
    Set {
        /// Challenge day, 1-21
        day: u8,
        /// Pain level, 0-10
        #[arg(long)]
        pain: Option<u8>,
        /// Energy level, 0-10
        #[arg(long)]
        energy: Option<u8>,
    },
    /// Print the full progress map as JSON
    Show,
    /// Print challenge statistics, per-day status, and habit densities
    Stats,
}

fn progress_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(wfh_core::paths::data_dir()?.join(PROGRESS_FILE))
}

fn load_map(path: &Path) -> Result<ProgressMap, Box<dyn std::error::Error>> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ProgressMap::new()),
        Err(e) => Err(e.into()),
    }
}

fn save_map(path: &Path, map: &ProgressMap) -> Result<(), Box<dyn std::error::Error>> {
    validate_progress(map)?;
    fs::write(path, serde_json::to_string_pretty(map)?)?;
    Ok(())
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let path = progress_path()?;
    match action {
        ProgressAction::Toggle { day, habit } => {
            let habit: HabitKey = habit.parse()?;
            let mut map = load_map(&path)?;
            let record = map.entry(day).or_insert_with(DayProgress::new_day);
            habit.set(record, !habit.is_set(record));
            let done = habit.is_set(record);
            save_map(&path, &map)?;
            println!(
                "day {day}: {} {}",
                habit.label(),
                if done { "done" } else { "not done" }
            );
        }
        ProgressAction::Set { day, pain, energy } => {
            if pain.is_none() && energy.is_none() {
                return Err("nothing to set (pass --pain and/or --energy)".into());
            }
            let mut map = load_map(&path)?;
            let record = map.entry(day).or_insert_with(DayProgress::new_day);
            if let Some(p) = pain {
                record.pain_level = p;
            }
            if let Some(e) = energy {
                record.energy_level = e;
            }
            save_map(&path, &map)?;
            println!("{}", serde_json::to_string_pretty(&map[&day])?);
        }
        ProgressAction::Show => {
            let map = load_map(&path)?;
            println!("{}", serde_json::to_string_pretty(&map)?);
        }
        ProgressAction::Stats => {
            let map = load_map(&path)?;
            let days: BTreeMap<u8, _> =
                (1..=CHALLENGE_DAYS).map(|d| (d, day_status(&map, d))).collect();
            let density: BTreeMap<&str, u32> = HabitKey::ALL
                .into_iter()
                .map(|h| (h.label(), habit_density(&map, h)))
                .collect();
            let report = serde_json::json!({
                "stats": challenge_stats(&map),
                "days": days,
                "habitDensity": density,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_file_is_empty_map() {
        let dir = tempfile::tempdir().unwrap();
        let map = load_map(&dir.path().join("nope.json")).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn save_validates_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(PROGRESS_FILE);

        let mut map = ProgressMap::new();
        map.insert(22, DayProgress::new_day());
        assert!(save_map(&path, &map).is_err());
        assert!(!path.exists());

        let mut map = ProgressMap::new();
        map.insert(3, DayProgress::new_day());
        save_map(&path, &map).unwrap();
        assert_eq!(load_map(&path).unwrap(), map);
    }
}
