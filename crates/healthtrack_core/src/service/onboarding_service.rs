//! Onboarding use-case service: state resolution and name submission.
//!
//! # Responsibility
//! - Resolve stored profiles into an `OnboardingState`.
//! - Validate and persist name submissions, then re-resolve.
//!
//! # Invariants
//! - The service is the only writer of `OnboardingState`; callers get it
//!   read-only.
//! - `NeedsName -> Ready` happens only through a successful insert followed
//!   by a successful re-read. A failed insert leaves state untouched.
//! - Validation runs before any store call; blank names never reach SQL.
//! - Resolution is pull-based: callers re-invoke `resolve` after mutations,
//!   the store pushes nothing.

use crate::model::onboarding::OnboardingState;
use crate::model::profile::UserProfile;
use crate::repo::profile_repo::{ProfileRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from onboarding resolution and submission.
#[derive(Debug)]
pub enum OnboardingError {
    /// Submitted name is blank after trim. The store was not touched.
    EmptyName,
    /// Persistence-layer failure; the in-memory state is unchanged.
    Repo(RepoError),
    /// The insert succeeded but the follow-up read failed: the profile is
    /// durably persisted, yet the current state cannot be observed. Callers
    /// should re-resolve on the next interaction.
    StateUnknown {
        profile: UserProfile,
        source: RepoError,
    },
}

impl Display for OnboardingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be blank"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::StateUnknown { profile, source } => write!(
                f,
                "profile id={} persisted but state is unknown: {source}",
                profile.id
            ),
        }
    }
}

impl Error for OnboardingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyName => None,
            Self::Repo(err) => Some(err),
            Self::StateUnknown { source, .. } => Some(source),
        }
    }
}

impl From<RepoError> for OnboardingError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Launch-flow service owning the resolved onboarding state.
///
/// `submit` takes `&mut self`, so one service value admits exactly one
/// submission at a time; a multi-threaded embedder serializes the
/// insert-then-resolve unit through the exclusive borrow.
pub struct OnboardingService<R: ProfileRepository> {
    repo: R,
    state: OnboardingState,
}

impl<R: ProfileRepository> OnboardingService<R> {
    /// Creates a service over the provided repository.
    ///
    /// State starts `Uninitialized` until the first `resolve`.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            state: OnboardingState::Uninitialized,
        }
    }

    /// Returns the current state without touching storage.
    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    /// Recomputes the state from stored profiles.
    ///
    /// # Contract
    /// - Zero profiles -> `NeedsName`.
    /// - One or more -> `Ready` with the most recently inserted name
    ///   (highest id), independent of store iteration order.
    /// - Storage failure propagates and leaves the previous state in place;
    ///   there is no silent fallback state.
    pub fn resolve(&mut self) -> Result<&OnboardingState, OnboardingError> {
        let profiles = self.repo.list_profiles()?;
        self.state = resolve_state(profiles);
        Ok(&self.state)
    }

    /// Validates and persists a name submission, then re-resolves.
    ///
    /// # Contract
    /// - Blank input fails with `EmptyName` before any store call.
    /// - Insert failure surfaces unchanged; no partial state transition.
    /// - Insert success followed by read failure yields `StateUnknown`
    ///   carrying the persisted profile.
    pub fn submit(&mut self, raw_name: &str) -> Result<&OnboardingState, OnboardingError> {
        let name = raw_name.trim();
        if name.is_empty() {
            return Err(OnboardingError::EmptyName);
        }

        let profile = self.repo.insert_profile(name)?;

        match self.repo.list_profiles() {
            Ok(profiles) => {
                self.state = resolve_state(profiles);
                Ok(&self.state)
            }
            Err(source) => Err(OnboardingError::StateUnknown { profile, source }),
        }
    }

    /// Lists every stored profile for dashboard display.
    pub fn profiles(&self) -> RepoResult<Vec<UserProfile>> {
        self.repo.list_profiles()
    }
}

fn resolve_state(profiles: Vec<UserProfile>) -> OnboardingState {
    match profiles.into_iter().max_by_key(|profile| profile.id) {
        Some(profile) => OnboardingState::Ready { name: profile.name },
        None => OnboardingState::NeedsName,
    }
}
