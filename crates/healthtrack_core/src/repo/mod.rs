//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for stored user profiles.
//! - Isolate SQLite query details from onboarding orchestration.
//!
//! # Invariants
//! - Repositories never validate name content; that belongs to the
//!   onboarding service.
//! - Read paths reject invalid persisted state instead of masking it.
//! - Errors distinguish the failing direction (read vs write) so callers
//!   can report retryable storage failures precisely.

pub mod profile_repo;
