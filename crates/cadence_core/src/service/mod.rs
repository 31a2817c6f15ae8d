//! Use-case orchestration over the contact store.
//!
//! # Responsibility
//! - Combine store calls with the pure lifecycle and calendar rules.
//! - Absorb store outages so callers never observe a crash.

pub mod clock;
pub mod contact_service;
