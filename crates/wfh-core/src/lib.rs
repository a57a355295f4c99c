//! # WFH Toolkit Core Library
//!
//! This library provides the core logic for the WFH Toolkit, a desk-wellness
//! habit tracker built around a curated exercise catalog, timed guided
//! sessions, and a 21-day habit challenge. The CLI binary and the REST
//! server are both thin layers over this crate.
//!
//! ## Architecture
//!
//! - **Catalog**: an immutable library of exercises and guided routines,
//!   defined once at startup
//! - **Session Engine**: a caller-driven countdown state machine that
//!   requires the caller to invoke `tick()` once per elapsed second
//! - **Progress**: one record per challenge day (six habit flags plus two
//!   self-rated metrics) and pure aggregation over the sparse day map
//! - **Store**: injected storage traits with an in-memory implementation
//!
//! ## Key Components
//!
//! - [`SessionEngine`]: guided-session countdown state machine
//! - [`Catalog`]: built-in exercise and routine library
//! - [`challenge_stats`]: derived 21-day challenge statistics
//! - [`MemoryStore`]: in-memory user and progress storage

pub mod catalog;
pub mod error;
pub mod events;
pub mod paths;
pub mod progress;
pub mod session;
pub mod store;

pub use catalog::{Catalog, Category, Exercise, Routine, RoutineStep};
pub use error::{CoreError, StoreError, ValidationError};
pub use events::Event;
pub use progress::{
    challenge_stats, day_status, habit_density, ChallengeStats, DayProgress, DayStatus, HabitKey,
    ProgressMap, CHALLENGE_DAYS,
};
pub use session::{ResolvedStep, SessionEngine, SessionState};
pub use store::{validate_progress, MemoryStore, ProgressStore, User, UserStore};
