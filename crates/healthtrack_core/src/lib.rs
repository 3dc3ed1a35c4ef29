//! Core launch-flow logic for the health tracker app.
//! This crate is the single source of truth for onboarding invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod nav;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::onboarding::OnboardingState;
pub use model::profile::{ProfileId, UserProfile};
pub use nav::gate::{confirm_ready, select_screen, GateError, Screen};
pub use repo::profile_repo::{
    ProfileRepository, RepoError, RepoResult, SqliteProfileRepository,
};
pub use service::onboarding_service::{OnboardingError, OnboardingService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
