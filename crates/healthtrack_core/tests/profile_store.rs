use healthtrack_core::db::open_db_in_memory;
use healthtrack_core::{ProfileRepository, RepoError, SqliteProfileRepository};
use std::collections::HashSet;

#[test]
fn insert_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);

    let inserted = repo.insert_profile("Alice").unwrap();

    let profiles = repo.list_profiles().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, inserted.id);
    assert_eq!(profiles[0].name, "Alice");
}

#[test]
fn ids_are_monotonic_and_unique() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);

    let first = repo.insert_profile("Alice").unwrap();
    let second = repo.insert_profile("Bob").unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    let ids: HashSet<i64> = repo
        .list_profiles()
        .unwrap()
        .into_iter()
        .map(|profile| profile.id)
        .collect();
    assert_eq!(ids.len(), 2);
}

#[test]
fn store_persists_names_without_trimming() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteProfileRepository::new(&conn);

    repo.insert_profile("  spaced  ").unwrap();

    let profiles = repo.list_profiles().unwrap();
    assert_eq!(profiles[0].name, "  spaced  ");
}

#[test]
fn list_rejects_null_name_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO user_profiles (name) VALUES (NULL);", [])
        .unwrap();

    let repo = SqliteProfileRepository::new(&conn);
    let err = repo.list_profiles().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
