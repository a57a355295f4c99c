use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;
use wfh_core::{Catalog, SessionEngine, SessionState};

const STATE_FILE: &str = "session.json";

#[derive(Subcommand)]
pub enum SessionAction {
    /// Start a guided session for a routine
    Start {
        /// Routine id, e.g. `neck-fix`
        routine_id: String,
    },
    /// Advance the countdown, one second per tick
    Tick {
        /// Number of ticks to apply
        #[arg(long, default_value = "1")]
        count: u32,
    },
    /// Toggle pause/resume
    Toggle,
    /// Seek to the next step (resets its countdown, resumes)
    Next,
    /// Seek to the previous step (resets its countdown, resumes)
    Prev,
    /// Print current session state as JSON
    Status,
    /// Discard the active session
    Close,
    /// Play a routine end to end with a 1-second interval
    Play {
        /// Routine id, e.g. `morning-flow`
        routine_id: String,
    },
}

fn state_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(wfh_core::paths::data_dir()?.join(STATE_FILE))
}

fn load_engine() -> Result<SessionEngine, Box<dyn std::error::Error>> {
    let path = state_path()?;
    let json = fs::read_to_string(&path)
        .map_err(|_| "no active session (run `wfh-cli session start <routine>` first)")?;
    Ok(serde_json::from_str(&json)?)
}

fn save_engine(engine: &SessionEngine) -> Result<(), Box<dyn std::error::Error>> {
    fs::write(state_path()?, serde_json::to_string(engine)?)?;
    Ok(())
}

fn print_event(event: &wfh_core::Event) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string(event)?);
    Ok(())
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    match action {
        SessionAction::Start { routine_id } => {
            let routine = catalog
                .routine(&routine_id)
                .ok_or_else(|| format!("unknown routine '{routine_id}'"))?;
            let engine = SessionEngine::new(routine, &catalog);
            save_engine(&engine)?;
            print_event(&engine.snapshot())?;
        }
        SessionAction::Tick { count } => {
            let mut engine = load_engine()?;
            for _ in 0..count {
                if let Some(event) = engine.tick() {
                    print_event(&event)?;
                }
            }
            save_engine(&engine)?;
            print_event(&engine.snapshot())?;
        }
        SessionAction::Toggle => {
            let mut engine = load_engine()?;
            if let Some(event) = engine.toggle_pause() {
                print_event(&event)?;
            }
            save_engine(&engine)?;
        }
        SessionAction::Next => {
            let mut engine = load_engine()?;
            if let Some(event) = engine.seek_next() {
                print_event(&event)?;
            }
            save_engine(&engine)?;
        }
        SessionAction::Prev => {
            let mut engine = load_engine()?;
            if let Some(event) = engine.seek_previous() {
                print_event(&event)?;
            }
            save_engine(&engine)?;
        }
        SessionAction::Status => {
            let engine = load_engine()?;
            print_event(&engine.snapshot())?;
        }
        SessionAction::Close => {
            // Deleting the state file is the close transition: no tick
            // source can outlive it.
            match fs::remove_file(state_path()?) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        SessionAction::Play { routine_id } => {
            let routine = catalog
                .routine(&routine_id)
                .ok_or_else(|| format!("unknown routine '{routine_id}'"))?;
            play(SessionEngine::new(routine, &catalog))?;
        }
    }
    Ok(())
}

/// Drive the engine from a real 1-second interval until it finishes.
fn play(mut engine: SessionEngine) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        println!("Playing '{}' ({} steps)", engine.routine_name(), engine.steps().len());
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            if let Some(event) = engine.tick() {
                print_event(&event)?;
            }
            if engine.state() == SessionState::Finished {
                break;
            }
            if let Some(step) = engine.current_step() {
                let name = step.exercise_name.as_deref().unwrap_or(&step.exercise_id);
                print!("\r{} - {:>3}s remaining ", name, engine.remaining_secs());
                std::io::stdout().flush()?;
            }
        }
        println!();
        Ok(())
    })
}
