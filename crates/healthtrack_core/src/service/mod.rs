//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into launch-flow level APIs.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod onboarding_service;
