//! Stored user profile record.
//!
//! # Invariants
//! - `id` is assigned by the store on insert, monotonic and unique.
//! - Rows are append-only: never updated or deleted by this core.

use serde::{Deserialize, Serialize};

/// Store-generated identifier for a profile row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProfileId = i64;

/// One onboarding submission as persisted in the `user_profiles` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// SQLite AUTOINCREMENT id; higher means inserted later.
    pub id: ProfileId,
    /// Display name exactly as persisted (trimming happens before insert).
    pub name: String,
}
