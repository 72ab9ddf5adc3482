//! Application Context
//!
//! Configuration and the marker repository, provided via the Leptos Context API.

use leptos::prelude::*;
use pain_marker_core::{AppConfig, Labels};

use crate::store::Repo;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    repo: StoredValue<Repo>,
}

impl AppContext {
    pub fn new(config: AppConfig, repo: Repo) -> Self {
        Self {
            config: StoredValue::new(config),
            repo: StoredValue::new(repo),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn labels(&self) -> Labels {
        self.config.with_value(|config| config.labels.clone())
    }

    /// Run `f` with the marker repository
    pub fn with_repo<R>(&self, f: impl FnOnce(&Repo) -> R) -> R {
        self.repo.with_value(f)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
