//! Local record store
//!
//! Mutations and `findPerson` go through a [`Store`]. Every operation that
//! checks the current state before changing it (unique insert, phone update,
//! removal) is a single trait method so implementations can make it atomic.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::{PhonebookError, Result};
use crate::schema::{seed_people, Person, PersonId};

/// Outcome of [`Store::remove_by_id`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    /// The record that was dropped, if the id matched one
    pub removed: Option<Person>,
    /// Records left in the store afterwards
    pub remaining: Vec<Person>,
}

pub trait Store: Send + Sync {
    fn count(&self) -> usize;

    /// All records in insertion order
    fn list(&self) -> Vec<Person>;

    fn find_by_name(&self, name: &str) -> Option<Person>;

    fn find_by_id(&self, id: &PersonId) -> Option<Person>;

    /// Append a record unless its name is already taken.
    ///
    /// Fails with [`PhonebookError::DuplicateInput`] on a name collision.
    fn insert(&self, person: Person) -> Result<Person>;

    /// Replace the phone of the record named `name`.
    ///
    /// Returns `Ok(None)` when no record has that name.
    fn update_phone(&self, name: &str, phone: String) -> Result<Option<Person>>;

    /// Drop the record with the given id
    fn remove_by_id(&self, id: &PersonId) -> Result<Removal>;
}

/// In-memory store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    people: RwLock<Vec<Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with [`seed_people`]
    pub fn seeded() -> Self {
        Self::with_people(seed_people())
    }

    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }

    // A poisoned lock still guards a consistent Vec: no method panics between
    // the check and the write.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Person>> {
        self.people.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Person>> {
        self.people.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Store for MemoryStore {
    fn count(&self) -> usize {
        self.read().len()
    }

    fn list(&self) -> Vec<Person> {
        self.read().clone()
    }

    fn find_by_name(&self, name: &str) -> Option<Person> {
        self.read().iter().find(|p| p.name == name).cloned()
    }

    fn find_by_id(&self, id: &PersonId) -> Option<Person> {
        self.read().iter().find(|p| &p.id == id).cloned()
    }

    fn insert(&self, person: Person) -> Result<Person> {
        let mut people = self.write();
        if people.iter().any(|p| p.name == person.name) {
            return Err(PhonebookError::DuplicateInput { name: person.name });
        }
        debug!(id = %person.id, name = %person.name, "inserting person");
        people.push(person.clone());
        Ok(person)
    }

    fn update_phone(&self, name: &str, phone: String) -> Result<Option<Person>> {
        let mut people = self.write();
        let Some(index) = people.iter().position(|p| p.name == name) else {
            return Ok(None);
        };
        let person = &mut people[index];
        person.phone = Some(phone);
        debug!(id = %person.id, name = %person.name, "updated phone");
        Ok(Some(person.clone()))
    }

    fn remove_by_id(&self, id: &PersonId) -> Result<Removal> {
        let mut people = self.write();
        let removed = people
            .iter()
            .position(|p| &p.id == id)
            .map(|index| people.remove(index));
        if let Some(person) = &removed {
            debug!(id = %person.id, name = %person.name, "removed person");
        }
        Ok(Removal {
            removed,
            remaining: people.clone(),
        })
    }
}
