//! GraphQL object types
//!
//! Thin wrappers over the domain records in [`crate::schema`]. Each wrapper
//! owns its record so derived fields resolve without another lookup.

use async_graphql::{Enum, Object, ID};

use crate::schema as domain;

/// Filter on phone presence
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum PhoneFilter {
    Yes,
    No,
}

impl From<PhoneFilter> for domain::PhoneFilter {
    fn from(f: PhoneFilter) -> Self {
        match f {
            PhoneFilter::Yes => domain::PhoneFilter::Yes,
            PhoneFilter::No => domain::PhoneFilter::No,
        }
    }
}

/// Street and city of a person
pub struct Address(domain::Address);

#[Object]
impl Address {
    async fn city(&self) -> &str {
        &self.0.city
    }

    async fn street(&self) -> &str {
        &self.0.street
    }
}

/// A contact record
pub struct Person(domain::Person);

#[Object]
impl Person {
    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn phone(&self) -> Option<&str> {
        self.0.phone.as_deref()
    }

    /// Derived from the record's street and city
    async fn address(&self) -> Address {
        Address(self.0.address())
    }

    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }
}

impl From<domain::Person> for Person {
    fn from(p: domain::Person) -> Self {
        Self(p)
    }
}
