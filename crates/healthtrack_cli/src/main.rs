//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `healthtrack_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use healthtrack_core::db::open_db_in_memory;
use healthtrack_core::{select_screen, OnboardingService, Screen, SqliteProfileRepository};

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("healthtrack_core ping={}", healthtrack_core::ping());
    println!("healthtrack_core version={}", healthtrack_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            let mut service = OnboardingService::new(SqliteProfileRepository::new(&conn));
            match service.resolve() {
                Ok(state) => {
                    let first_run = select_screen(state) == Screen::OnboardingForm;
                    println!("healthtrack_core resolve_ok=true first_run={first_run}");
                }
                Err(err) => println!("healthtrack_core resolve_ok=false error={err}"),
            }
        }
        Err(err) => println!("healthtrack_core db_open_ok=false error={err}"),
    }
}
