//! Contact record and its text rendering.
//!
//! CHANGELOG:
//! - 10/16/2026 - Added stable ids so duplicates can be told apart
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a contact, assigned once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ContactId(Uuid);

impl ContactId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single address book entry. Immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub number: i64,
    pub email: String,
    /// May be empty.
    pub note: String,
}

impl Contact {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        number: i64,
        email: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id: ContactId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            number,
            email: email.into(),
            note: note.into(),
        }
    }

    /// Exact, case-insensitive match of the query against either name.
    ///
    /// `query` must already be trimmed and lower-cased.
    pub fn matches_name(&self, query: &str) -> bool {
        self.first_name.trim().to_lowercase() == query
            || self.last_name.trim().to_lowercase() == query
    }

    /// One numbered line as shown in listings and search results.
    pub fn display_line(&self, position: usize) -> String {
        format!(
            "{} | First name: {} | Last name: {} | Phone number: {} | Email: {} | Note: {}",
            position, self.first_name, self.last_name, self.number, self.email, self.note
        )
    }
}

/// Render contacts as 1-based numbered lines, in the given order.
pub fn format_contacts<'a, I>(contacts: I) -> String
where
    I: IntoIterator<Item = &'a Contact>,
{
    contacts
        .into_iter()
        .enumerate()
        .map(|(i, c)| c.display_line(i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
