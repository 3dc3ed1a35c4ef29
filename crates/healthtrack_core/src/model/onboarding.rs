//! Resolved onboarding state.
//!
//! # Responsibility
//! - Describe what the launch flow knows about the stored profile set.
//!
//! # Invariants
//! - `Uninitialized` is transient: it exists only until the first resolve.
//! - `Ready` always carries the name of the most recently inserted profile.

use serde::{Deserialize, Serialize};

/// Outcome of resolving stored profiles at launch or after a mutation.
///
/// Owned exclusively by the onboarding service; other layers read it to
/// pick a screen or render display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OnboardingState {
    /// Store not yet queried.
    Uninitialized,
    /// Store queried, zero profiles found: show the name form.
    NeedsName,
    /// Store queried, at least one profile found.
    Ready {
        /// Name of the most recently inserted profile.
        name: String,
    },
}

impl OnboardingState {
    /// Returns whether onboarding has completed.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    /// Returns the display name when onboarding has completed.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::Ready { name } => Some(name.as_str()),
            _ => None,
        }
    }
}
