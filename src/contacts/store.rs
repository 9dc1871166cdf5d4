//! Contact store - in-memory collection with add, list, search and delete.
//!
//! CHANGELOG:
//! - 10/16/2026 - Search cache holds ids; delete-by-search removes by id
//! - 10/16/2026 - Initial implementation

use super::model::{format_contacts, Contact, ContactId};
use crate::error::StoreError;
use tracing::{debug, warn};

pub const SAVED_MESSAGE: &str = "Contact saved✅";
pub const EMPTY_MESSAGE: &str = "The address book is empty!❌";
pub const NOT_FOUND_MESSAGE: &str = "Contact not found!❌";

/// Which list a delete position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteSource {
    /// Position in the full contact list.
    FullList,
    /// Position in the results of the most recent search.
    LastSearch,
}

/// Owns the contacts for one session.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
    // None until the first search runs.
    last_search: Option<Vec<ContactId>>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Get all contacts, in insertion order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contacts referenced by the last search that still exist.
    ///
    /// Returns `None` if no search has run yet.
    pub fn last_search_results(&self) -> Option<Vec<&Contact>> {
        self.last_search
            .as_ref()
            .map(|ids| ids.iter().filter_map(|id| self.find(*id)).collect())
    }

    fn find(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Add a contact.
    ///
    /// Both names must be non-empty. The number is trimmed and parsed as an
    /// integer; names are checked first so a bad number never masks them.
    pub fn add_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        number: &str,
        email: &str,
        note: &str,
    ) -> Result<String, StoreError> {
        if first_name.is_empty() || last_name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let number = parse_number(number)?;
        self.contacts
            .push(Contact::new(first_name, last_name, number, email, note));
        debug!(count = self.contacts.len(), "contact added");

        Ok(SAVED_MESSAGE.to_string())
    }

    /// Numbered listing of every contact, or the empty message.
    pub fn list_contacts(&self) -> String {
        if self.contacts.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }
        format_contacts(&self.contacts)
    }

    /// Find contacts whose first or last name equals the query and remember
    /// them for a later delete-by-search.
    ///
    /// Matching is exact after trimming and lower-casing both sides.
    pub fn search_matches(&mut self, query: &str) -> Vec<&Contact> {
        let query = query.trim().to_lowercase();
        let ids: Vec<ContactId> = self
            .contacts
            .iter()
            .filter(|c| c.matches_name(&query))
            .map(|c| c.id)
            .collect();
        debug!(matches = ids.len(), "search complete");

        let contacts = &self.contacts;
        let matched = ids
            .iter()
            .filter_map(|id| contacts.iter().find(|c| c.id == *id))
            .collect();
        self.last_search = Some(ids);
        matched
    }

    /// Numbered search results, or the not-found message.
    pub fn search_contacts(&mut self, query: &str) -> String {
        let matched = self.search_matches(query);
        if matched.is_empty() {
            return NOT_FOUND_MESSAGE.to_string();
        }
        format_contacts(matched)
    }

    /// Delete the contact at a 1-based position in the chosen list.
    pub fn delete_contact(
        &mut self,
        source: DeleteSource,
        position: usize,
    ) -> Result<String, StoreError> {
        let removed = match source {
            DeleteSource::FullList => {
                let index = checked_index(position, self.contacts.len())?;
                self.contacts.remove(index)
            }
            DeleteSource::LastSearch => {
                let ids = self.last_search.as_mut().ok_or(StoreError::NoPriorSearch)?;
                let index = checked_index(position, ids.len())?;
                let id = ids[index];

                let Some(at) = self.contacts.iter().position(|c| c.id == id) else {
                    warn!(%id, position, "cached search result no longer exists");
                    return Err(StoreError::ContactNotFound);
                };
                ids.remove(index);
                self.contacts.remove(at)
            }
        };
        debug!(?source, position, count = self.contacts.len(), "contact deleted");

        Ok(format!(
            "First name: {} | Last name: {} deleted successfully✅",
            removed.first_name, removed.last_name
        ))
    }
}

/// Parse a phone number as an integer.
fn parse_number(raw: &str) -> Result<i64, StoreError> {
    raw.trim()
        .parse()
        .map_err(|_| StoreError::InvalidNumber(raw.to_string()))
}

/// Convert a 1-based position into an index, checking bounds.
fn checked_index(position: usize, len: usize) -> Result<usize, StoreError> {
    if position == 0 || position > len {
        return Err(StoreError::PositionOutOfRange { position, len });
    }
    Ok(position - 1)
}
