use axum::extract::FromRef;

use crate::config::Config;
use crate::services::session::SessionRegistry;
use crate::store::{SharedStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub sessions: SessionRegistry,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store: store.into_shared(),
            sessions: SessionRegistry::new(),
            config,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for SessionRegistry {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
