//! Flutter-facing bridge crate for the health tracker core.
//!
//! # Responsibility
//! - Expose the onboarding use-cases to Dart via `flutter_rust_bridge`.
//! - Keep core types out of the generated bindings surface.

pub mod api;
