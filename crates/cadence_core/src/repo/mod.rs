//! Contact persistence contracts and the bundled SQLite implementation.
//!
//! # Responsibility
//! - Define the `ContactStore` collaborator the service depends on.
//! - Keep SQL details behind that trait.
//!
//! # Invariants
//! - Stores assign ids on create; callers never invent them.
//! - Missing targets are reported as `NotFound`, not as transport errors.

pub mod contact_store;
pub mod sqlite_contact_store;
