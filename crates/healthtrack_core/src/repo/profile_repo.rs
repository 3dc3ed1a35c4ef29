//! Profile repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append and list-all APIs over the `user_profiles` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_profile` persists the name byte-for-byte as given.
//! - `list_profiles` returns rows in store-native order; callers that need
//!   a specific profile must select it themselves.

use crate::db::DbError;
use crate::model::profile::{ProfileId, UserProfile};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for profile storage operations.
#[derive(Debug)]
pub enum RepoError {
    /// Medium failure while reading stored profiles.
    Read(DbError),
    /// Medium failure while appending a profile.
    Write(DbError),
    /// Persisted row violates the expected shape.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read(err) => write!(f, "profile read failed: {err}"),
            Self::Write(err) => write!(f, "profile write failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted profile data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read(err) | Self::Write(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

/// Repository interface for profile persistence.
///
/// The trait seam exists so the onboarding service can be exercised against
/// failure-injecting fakes in addition to the SQLite implementation.
pub trait ProfileRepository {
    /// Appends a profile and returns it with its store-generated id.
    fn insert_profile(&self, name: &str) -> RepoResult<UserProfile>;
    /// Returns every stored profile in store-native order.
    fn list_profiles(&self) -> RepoResult<Vec<UserProfile>>;
}

/// SQLite-backed profile repository.
pub struct SqliteProfileRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ProfileRepository for SqliteProfileRepository<'_> {
    fn insert_profile(&self, name: &str) -> RepoResult<UserProfile> {
        self.conn
            .execute("INSERT INTO user_profiles (name) VALUES (?1);", [name])
            .map_err(write_err)?;

        let id: ProfileId = self.conn.last_insert_rowid();
        Ok(UserProfile {
            id,
            name: name.to_string(),
        })
    }

    fn list_profiles(&self) -> RepoResult<Vec<UserProfile>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM user_profiles;")
            .map_err(read_err)?;

        let mut rows = stmt.query([]).map_err(read_err)?;
        let mut profiles = Vec::new();

        while let Some(row) = rows.next().map_err(read_err)? {
            let id: ProfileId = row.get("id").map_err(read_err)?;
            let name: Option<String> = row.get("name").map_err(read_err)?;
            let name = name.ok_or_else(|| {
                RepoError::InvalidData(format!("NULL name in user_profiles row id={id}"))
            })?;
            profiles.push(UserProfile { id, name });
        }

        Ok(profiles)
    }
}

fn read_err(err: rusqlite::Error) -> RepoError {
    RepoError::Read(DbError::Sqlite(err))
}

fn write_err(err: rusqlite::Error) -> RepoError {
    RepoError::Write(DbError::Sqlite(err))
}
