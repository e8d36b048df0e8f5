//! phonebook: a GraphQL API over contact records
//!
//! Queries and mutations are declared in [`graphql`]. Mutations and
//! `findPerson` act on a local [`store::Store`]; `allPersons` reads a
//! separate upstream dataset through a [`source::PersonSource`].

pub mod config;
pub mod error;
pub mod graphql;
pub mod schema;
pub mod server;
pub mod source;
pub mod store;

pub use config::{Config, ConfigError};
pub use error::{PhonebookError, Result};
pub use graphql::{build_schema, MutationRoot, PhonebookSchema, QueryRoot};
pub use schema::{seed_people, Address, NewPerson, Person, PersonId, PhoneFilter};
pub use source::{HttpPersonSource, PersonSource, StaticPersonSource};
pub use store::{MemoryStore, Removal, Store};
