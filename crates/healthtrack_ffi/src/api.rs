//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the onboarding launch flow to Dart via FRB.
//! - Keep error semantics simple for the UI: envelopes, never exceptions.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Storage failures are surfaced in the envelope so the UI can offer a
//!   retry, never swallowed.
//! - `screen` and `state` labels are stable snake_case strings.

use healthtrack_core::db::open_db;
use healthtrack_core::{
    confirm_ready, core_version as core_version_inner, init_logging as init_logging_inner,
    ping as ping_inner, select_screen, OnboardingError, OnboardingService, OnboardingState,
    Screen, SqliteProfileRepository,
};
use log::warn;
use std::path::PathBuf;
use std::sync::OnceLock;

const PROFILE_DB_FILE_NAME: &str = "health_tracker.sqlite3";
static PROFILE_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Snapshot of the launch flow after a resolve, submit, or confirm call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingSnapshot {
    /// Whether the requested operation succeeded.
    pub ok: bool,
    /// Screen to present: `loading|onboarding_form|dashboard_entry|dashboard`.
    pub screen: String,
    /// Resolved state: `uninitialized|needs_name|ready`.
    pub state: String,
    /// Display name when state is `ready`.
    pub name: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

/// Stored profile row projected for Dart display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileItem {
    pub id: i64,
    pub name: String,
}

/// Response envelope for the profile list flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListResponse {
    /// Stored profiles in insertion order (empty on failure).
    pub items: Vec<ProfileItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Resolves the launch screen from stored profiles.
///
/// Opens (and idempotently initializes) the profile database, then maps the
/// resolved state to a screen selection.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Storage failure returns `ok=false` with `screen="loading"` so the UI
///   can retry.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_resolve() -> OnboardingSnapshot {
    match with_onboarding_service(|service| service.resolve().map(|state| state.clone())) {
        Ok(Ok(state)) => snapshot_ok(&state, "Onboarding state resolved."),
        Ok(Err(err)) => snapshot_failure(format!("onboarding_resolve failed: {err}")),
        Err(err) => snapshot_failure(err),
    }
}

/// Submits the first-run name and returns the new launch state.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Blank names fail with `ok=false` and an untouched store.
/// - When the insert lands but the follow-up read fails, the envelope
///   reports `ok=true` with an unknown state; the UI should re-resolve on
///   the next interaction.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_submit(raw_name: String) -> OnboardingSnapshot {
    match with_onboarding_service(|service| service.submit(&raw_name).map(|state| state.clone())) {
        Ok(Ok(state)) => snapshot_ok(&state, "Name saved."),
        Ok(Err(OnboardingError::EmptyName)) => OnboardingSnapshot {
            ok: false,
            screen: screen_label(Screen::OnboardingForm).to_string(),
            state: "needs_name".to_string(),
            name: None,
            message: "Please enter a name.".to_string(),
        },
        Ok(Err(err @ OnboardingError::StateUnknown { .. })) => OnboardingSnapshot {
            ok: true,
            screen: screen_label(Screen::Loading).to_string(),
            state: "uninitialized".to_string(),
            name: None,
            message: format!("Name saved, but the current state is unknown: {err}"),
        },
        Ok(Err(err)) => snapshot_failure(format!("onboarding_submit failed: {err}")),
        Err(err) => snapshot_failure(err),
    }
}

/// Runs the explicit user confirmation into the dashboard.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns `screen="dashboard"` only from a `ready` state; any other
///   state yields `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_confirm_ready() -> OnboardingSnapshot {
    let outcome = with_onboarding_service(|service| match service.resolve() {
        Ok(state) => {
            let state = state.clone();
            match confirm_ready(&state) {
                Ok(screen) => Ok((screen, state)),
                Err(err) => Err(format!("onboarding_confirm_ready rejected: {err}")),
            }
        }
        Err(err) => Err(format!("onboarding_confirm_ready failed: {err}")),
    });

    match outcome {
        Ok(Ok((screen, state))) => OnboardingSnapshot {
            ok: true,
            screen: screen_label(screen).to_string(),
            state: state_label(&state).to_string(),
            name: state.display_name().map(str::to_string),
            message: "Dashboard confirmed.".to_string(),
        },
        Ok(Err(message)) | Err(message) => snapshot_failure(message),
    }
}

/// Lists every stored profile for dashboard display.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns an empty list plus a diagnostic message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn onboarding_profiles() -> ProfileListResponse {
    match with_onboarding_service(|service| service.profiles()) {
        Ok(Ok(profiles)) => {
            let items = profiles
                .into_iter()
                .map(|profile| ProfileItem {
                    id: profile.id,
                    name: profile.name,
                })
                .collect::<Vec<_>>();
            let message = format!("Found {} profile(s).", items.len());
            ProfileListResponse { items, message }
        }
        Ok(Err(err)) => ProfileListResponse {
            items: Vec::new(),
            message: format!("onboarding_profiles failed: {err}"),
        },
        Err(err) => ProfileListResponse {
            items: Vec::new(),
            message: err,
        },
    }
}

fn snapshot_ok(state: &OnboardingState, message: impl Into<String>) -> OnboardingSnapshot {
    OnboardingSnapshot {
        ok: true,
        screen: screen_label(select_screen(state)).to_string(),
        state: state_label(state).to_string(),
        name: state.display_name().map(str::to_string),
        message: message.into(),
    }
}

fn snapshot_failure(message: String) -> OnboardingSnapshot {
    OnboardingSnapshot {
        ok: false,
        screen: screen_label(Screen::Loading).to_string(),
        state: "uninitialized".to_string(),
        name: None,
        message,
    }
}

fn state_label(state: &OnboardingState) -> &'static str {
    match state {
        OnboardingState::Uninitialized => "uninitialized",
        OnboardingState::NeedsName => "needs_name",
        OnboardingState::Ready { .. } => "ready",
    }
}

fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Loading => "loading",
        Screen::OnboardingForm => "onboarding_form",
        Screen::DashboardEntry => "dashboard_entry",
        Screen::Dashboard => "dashboard",
    }
}

fn resolve_profile_db_path() -> PathBuf {
    PROFILE_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("HEALTHTRACK_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(PROFILE_DB_FILE_NAME)
        })
        .clone()
}

fn with_onboarding_service<T>(
    f: impl FnOnce(&mut OnboardingService<SqliteProfileRepository<'_>>) -> T,
) -> Result<T, String> {
    let db_path = resolve_profile_db_path();
    let conn = open_db(&db_path).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        format!("profile DB open failed: {err}")
    })?;
    let repo = SqliteProfileRepository::new(&conn);
    let mut service = OnboardingService::new(repo);
    Ok(f(&mut service))
}
