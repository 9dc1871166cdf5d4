//! Error taxonomy for contact store operations.
//!
//! Every variant's `Display` is the status line shown to the user, so the
//! menu can print any failure and keep going.

use thiserror::Error;

/// Broad class of a [`StoreError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Parse,
    Index,
    NotFound,
}

/// Errors returned by [`crate::contacts::ContactStore`] and menu input parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("First name and last name cannot be empty!❌")]
    EmptyName,

    #[error("Phone number must be an integer: '{0}'❌")]
    InvalidNumber(String),

    #[error("Contact number must be a positive integer: '{0}'❌")]
    InvalidPosition(String),

    #[error("No contact at position {position} (1-{len} available)❌")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("No search has been run yet; search before deleting from results❌")]
    NoPriorSearch,

    #[error("Contact not found!❌")]
    ContactNotFound,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::EmptyName => ErrorKind::Validation,
            StoreError::InvalidNumber(_) | StoreError::InvalidPosition(_) => ErrorKind::Parse,
            StoreError::PositionOutOfRange { .. } => ErrorKind::Index,
            StoreError::NoPriorSearch | StoreError::ContactNotFound => ErrorKind::NotFound,
        }
    }
}
