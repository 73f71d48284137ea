//! Application state for the driver payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::{ConfigLoader, Settings};
use crate::roster::Roster;

/// Shared application state.
///
/// Holds the organization settings and the roster. Reports take a read lock
/// so they see a consistent snapshot; mutations take the write lock.
#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        let (settings, roster) = config.into_parts();
        Self::from_parts(settings, roster)
    }

    /// Creates application state from settings and an existing roster.
    pub fn from_parts(settings: Settings, roster: Roster) -> Self {
        Self {
            settings: Arc::new(settings),
            roster: Arc::new(RwLock::new(roster)),
        }
    }

    /// Returns the organization settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the shared roster.
    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_clones_share_the_roster() {
        let state = AppState::from_parts(Settings::default(), Roster::default());
        let other = state.clone();

        other
            .roster()
            .write()
            .await
            .add_driver(crate::models::NewDriver::named("Shared"), None, None)
            .unwrap();

        assert_eq!(state.roster().read().await.drivers().len(), 1);
    }
}
