//! Injected storage interfaces and the in-memory implementation.
//!
//! The core and the server depend only on the [`UserStore`] and
//! [`ProgressStore`] traits, never on a concrete global. [`MemoryStore`]
//! is the only backing store in this design: state lives for the life of
//! the process and is lost on restart.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, ValidationError};
use crate::progress::{ProgressMap, CHALLENGE_DAYS, METRIC_MAX};

/// A registered account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
}

/// Account storage.
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::DuplicateEmail`] when
    /// the email is already registered.
    fn insert(&self, user: User) -> Result<(), StoreError>;

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;
}

/// Per-user progress storage. Puts are full-replacement snapshots,
/// last-write-wins; there is no merge.
pub trait ProgressStore: Send + Sync {
    /// The stored map for `user_id`, empty when nothing was ever saved.
    fn get(&self, user_id: &str) -> Result<ProgressMap, StoreError>;

    fn put(&self, user_id: &str, map: ProgressMap) -> Result<(), StoreError>;
}

/// Process-lifetime storage behind `RwLock`s. Implements both traits so
/// one instance can back the whole server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<Vec<User>>,
    progress: RwLock<HashMap<String, ProgressMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for MemoryStore {
    fn insert(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.users.write().map_err(|_| StoreError::Poisoned)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        users.push(user);
        Ok(())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, user_id: &str) -> Result<ProgressMap, StoreError> {
        let progress = self.progress.read().map_err(|_| StoreError::Poisoned)?;
        Ok(progress.get(user_id).cloned().unwrap_or_default())
    }

    fn put(&self, user_id: &str, map: ProgressMap) -> Result<(), StoreError> {
        let mut progress = self.progress.write().map_err(|_| StoreError::Poisoned)?;
        progress.insert(user_id.to_string(), map);
        Ok(())
    }
}

/// Boundary validation for an incoming progress snapshot: day keys in
/// 1..=21, metrics in 0..=10. Habit flags need no checking, they are
/// plain booleans.
pub fn validate_progress(map: &ProgressMap) -> Result<(), ValidationError> {
    for (&day, record) in map {
        if day == 0 || day > CHALLENGE_DAYS {
            return Err(ValidationError::DayOutOfRange(day));
        }
        if record.pain_level > METRIC_MAX {
            return Err(ValidationError::MetricOutOfRange {
                day,
                metric: "painLevel",
                value: record.pain_level,
            });
        }
        if record.energy_level > METRIC_MAX {
            return Err(ValidationError::MetricOutOfRange {
                day,
                metric: "energyLevel",
                value: record.energy_level,
            });
        }
    }
    Ok(())
}
