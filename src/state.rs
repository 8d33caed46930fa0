use std::sync::Arc;

use crate::controllers::{RootController, SongController};
use crate::models::EnvPresence;
use crate::secrets::SecretManager;
use crate::store::SongStore;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub songs: SongController,
    pub root: RootController,
}

impl AppState {
    pub fn new(store: Arc<dyn SongStore>, env: EnvPresence) -> Self {
        Self {
            songs: SongController::new(store),
            root: RootController::new(env),
        }
    }

    pub fn from_secrets(store: Arc<dyn SongStore>, secrets: &SecretManager) -> Self {
        let env = EnvPresence {
            has_db_url: secrets.is_set("DATABASE_URL"),
            has_direct_url: secrets.is_set("DIRECT_URL"),
        };
        Self::new(store, env)
    }
}
