//! Navigation gate: state-to-screen mapping and the confirm step.
//!
//! # Invariants
//! - `select_screen` never yields `Dashboard`; only `confirm_ready` does.
//! - Once `Ready`, the onboarding form is not re-entered within a session;
//!   no backward transition is defined here.

use crate::model::onboarding::OnboardingState;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Target screens the host navigation stack can be asked to present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Shown while the state is still `Uninitialized`.
    Loading,
    /// First-run name form.
    OnboardingForm,
    /// Home screen with the "get started" affordance.
    DashboardEntry,
    /// The dashboard itself, reached only via `confirm_ready`.
    Dashboard,
}

/// Errors from the explicit dashboard confirm step.
#[derive(Debug, PartialEq, Eq)]
pub enum GateError {
    /// Confirm was requested while onboarding is not `Ready`.
    NotReady,
}

impl Display for GateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotReady => write!(f, "dashboard confirm requires a completed onboarding"),
        }
    }
}

impl Error for GateError {}

/// Selects the screen to present for the given state.
pub fn select_screen(state: &OnboardingState) -> Screen {
    match state {
        OnboardingState::Uninitialized => Screen::Loading,
        OnboardingState::NeedsName => Screen::OnboardingForm,
        OnboardingState::Ready { .. } => Screen::DashboardEntry,
    }
}

/// Produces the forward transition after the user confirms readiness.
///
/// Returns the `Dashboard` target for the host navigation stack, or
/// `NotReady` when invoked from any other state.
pub fn confirm_ready(state: &OnboardingState) -> Result<Screen, GateError> {
    if state.is_ready() {
        Ok(Screen::Dashboard)
    } else {
        Err(GateError::NotReady)
    }
}
