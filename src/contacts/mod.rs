//! Contact records and the in-memory store that owns them.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial module structure

pub mod model;
pub mod store;

pub use model::{Contact, ContactId};
pub use store::{ContactStore, DeleteSource};
