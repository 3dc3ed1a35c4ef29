//! Screen selection for the two-screen launch flow.
//!
//! # Responsibility
//! - Map resolved onboarding state to the screen the host UI should show.
//! - Produce the explicit forward transition into the dashboard.
//!
//! # Invariants
//! - Selection is pure: no storage access, no side effects.
//! - Dashboard entry is user-confirmed, never automatic.

pub mod gate;
