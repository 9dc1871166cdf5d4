//! address-book library
//!
//! In-memory contact store plus the text menu that drives it.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial library structure

pub mod contacts;
pub mod error;
pub mod menu;
pub mod output;

pub use contacts::{Contact, ContactId, ContactStore, DeleteSource};
pub use error::{ErrorKind, StoreError};
