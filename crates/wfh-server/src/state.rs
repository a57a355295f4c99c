//! Server configuration and shared request state.

use std::sync::Arc;

use wfh_core::{MemoryStore, ProgressStore, UserStore};

use crate::auth::AuthKeys;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;
const DEV_JWT_SECRET: &str = "wfh-toolkit-secret-key-123";

/// Configuration read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub jwt_secret: String,
    pub token_expiry_hours: i64,
}

impl ServerConfig {
    /// `WFH_PORT` (or `PORT`) and `WFH_JWT_SECRET`, with development
    /// defaults when unset.
    pub fn from_env() -> Self {
        let port = std::env::var("WFH_PORT")
            .or_else(|_| std::env::var("PORT"))
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let jwt_secret = std::env::var("WFH_JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("WFH_JWT_SECRET not set, using the development secret");
            DEV_JWT_SECRET.to_string()
        });
        Self {
            port,
            jwt_secret,
            token_expiry_hours: DEFAULT_TOKEN_EXPIRY_HOURS,
        }
    }
}

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub progress: Arc<dyn ProgressStore>,
    pub auth: Arc<AuthKeys>,
}

impl AppState {
    /// In-memory stores; one `MemoryStore` backs both traits.
    pub fn new(config: &ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            users: store.clone(),
            progress: store,
            auth: Arc::new(AuthKeys::new(&config.jwt_secret, config.token_expiry_hours)),
        }
    }
}
