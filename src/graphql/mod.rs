//! GraphQL API for the phonebook
//!
//! - [`QueryRoot`]: `personCount`, `allPersons`, `findPerson`
//! - [`MutationRoot`]: `addPerson`, `editNumber`, `deletePerson`
//!
//! `allPersons` reads from the upstream [`PersonSource`]; every other
//! operation reads or writes the local [`Store`].

mod mutation;
mod query;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::*;

use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

use crate::source::PersonSource;
use crate::store::Store;

pub type PhonebookSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the local store and upstream source as context data
pub fn build_schema(store: Arc<dyn Store>, source: Arc<dyn PersonSource>) -> PhonebookSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .data(source)
        .finish()
}
