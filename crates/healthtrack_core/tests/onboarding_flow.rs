use healthtrack_core::db::{open_db_in_memory, DbError};
use healthtrack_core::{
    confirm_ready, select_screen, GateError, OnboardingError, OnboardingService, OnboardingState,
    ProfileRepository, RepoError, RepoResult, Screen, SqliteProfileRepository, UserProfile,
};
use std::cell::{Cell, RefCell};

#[test]
fn empty_store_resolves_to_needs_name_and_form_screen() {
    let conn = open_db_in_memory().unwrap();
    let mut service = OnboardingService::new(SqliteProfileRepository::new(&conn));

    assert_eq!(select_screen(service.state()), Screen::Loading);

    let state = service.resolve().unwrap();
    assert_eq!(state, &OnboardingState::NeedsName);
    assert_eq!(select_screen(state), Screen::OnboardingForm);
}

#[test]
fn submit_trims_persists_and_transitions_to_ready() {
    let conn = open_db_in_memory().unwrap();
    let mut service = OnboardingService::new(SqliteProfileRepository::new(&conn));
    service.resolve().unwrap();

    let state = service.submit("  Alice  ").unwrap();
    assert_eq!(
        state,
        &OnboardingState::Ready {
            name: "Alice".to_string()
        }
    );
    assert_eq!(select_screen(state), Screen::DashboardEntry);

    let profiles = service.profiles().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, 1);
    assert_eq!(profiles[0].name, "Alice");

    assert_eq!(confirm_ready(service.state()), Ok(Screen::Dashboard));
}

#[test]
fn blank_submissions_fail_before_touching_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut service = OnboardingService::new(SqliteProfileRepository::new(&conn));
    service.resolve().unwrap();

    for raw in ["", "   ", "\t\n"] {
        let err = service.submit(raw).unwrap_err();
        assert!(matches!(err, OnboardingError::EmptyName), "input {raw:?}");
    }

    assert!(service.profiles().unwrap().is_empty());
    assert_eq!(service.resolve().unwrap(), &OnboardingState::NeedsName);
}

#[test]
fn most_recent_submission_wins() {
    let conn = open_db_in_memory().unwrap();
    let mut service = OnboardingService::new(SqliteProfileRepository::new(&conn));
    service.resolve().unwrap();

    service.submit("Alice").unwrap();
    let state = service.submit("Bob").unwrap();
    assert_eq!(
        state,
        &OnboardingState::Ready {
            name: "Bob".to_string()
        }
    );

    let profiles = service.profiles().unwrap();
    let ids: Vec<i64> = profiles.iter().map(|profile| profile.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn confirm_ready_is_rejected_before_onboarding_completes() {
    assert_eq!(
        confirm_ready(&OnboardingState::Uninitialized),
        Err(GateError::NotReady)
    );
    assert_eq!(
        confirm_ready(&OnboardingState::NeedsName),
        Err(GateError::NotReady)
    );
}

#[test]
fn insert_failure_leaves_state_unchanged() {
    let repo = FlakyRepo::default();
    repo.fail_writes.set(true);
    let mut service = OnboardingService::new(repo);
    service.resolve().unwrap();

    let err = service.submit("Alice").unwrap_err();
    assert!(matches!(err, OnboardingError::Repo(RepoError::Write(_))));
    assert_eq!(service.state(), &OnboardingState::NeedsName);
}

#[test]
fn read_failure_after_insert_reports_state_unknown() {
    let repo = FlakyRepo::default();
    repo.fail_reads_after_write.set(true);
    let mut service = OnboardingService::new(repo);
    service.resolve().unwrap();

    let err = service.submit("Alice").unwrap_err();
    match err {
        OnboardingError::StateUnknown { profile, source } => {
            assert_eq!(profile.name, "Alice");
            assert!(matches!(source, RepoError::Read(_)));
        }
        other => panic!("unexpected error: {other}"),
    }

    // The record is durably persisted; the next resolve observes it.
    let state = service.resolve().unwrap();
    assert_eq!(
        state,
        &OnboardingState::Ready {
            name: "Alice".to_string()
        }
    );
}

#[test]
fn resolve_failure_propagates_and_keeps_previous_state() {
    let repo = FlakyRepo::default();
    repo.fail_all_reads.set(true);
    let mut service = OnboardingService::new(repo);

    let err = service.resolve().unwrap_err();
    assert!(matches!(err, OnboardingError::Repo(RepoError::Read(_))));
    assert_eq!(service.state(), &OnboardingState::Uninitialized);
}

/// Failure-injecting in-memory repository for the error legs the SQLite
/// implementation cannot produce on demand.
#[derive(Default)]
struct FlakyRepo {
    rows: RefCell<Vec<UserProfile>>,
    fail_writes: Cell<bool>,
    fail_all_reads: Cell<bool>,
    fail_reads_after_write: Cell<bool>,
    wrote: Cell<bool>,
}

impl ProfileRepository for FlakyRepo {
    fn insert_profile(&self, name: &str) -> RepoResult<UserProfile> {
        if self.fail_writes.get() {
            return Err(RepoError::Write(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )));
        }
        let mut rows = self.rows.borrow_mut();
        let profile = UserProfile {
            id: rows.len() as i64 + 1,
            name: name.to_string(),
        };
        rows.push(profile.clone());
        self.wrote.set(true);
        Ok(profile)
    }

    fn list_profiles(&self) -> RepoResult<Vec<UserProfile>> {
        let after_write_failure = self.fail_reads_after_write.get() && self.wrote.replace(false);
        if self.fail_all_reads.get() || after_write_failure {
            return Err(RepoError::Read(DbError::Sqlite(
                rusqlite::Error::QueryReturnedNoRows,
            )));
        }
        Ok(self.rows.borrow().clone())
    }
}
