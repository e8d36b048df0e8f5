use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::debug;

use super::types::{Person, PhoneFilter};
use crate::schema as domain;
use crate::source::PersonSource;
use crate::store::Store;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Number of records in the local store
    async fn person_count(&self, ctx: &Context<'_>) -> Result<usize> {
        let store = ctx.data::<Arc<dyn Store>>()?;
        Ok(store.count())
    }

    /// Records from the upstream source, filtered by phone presence.
    ///
    /// Without a `phone` filter nothing is fetched and the list is empty.
    /// The field is nullable so an upstream failure only nulls this field.
    async fn all_persons(
        &self,
        ctx: &Context<'_>,
        phone: Option<PhoneFilter>,
    ) -> Result<Option<Vec<Person>>> {
        let Some(filter) = phone.map(domain::PhoneFilter::from) else {
            debug!("allPersons called without a phone filter");
            return Ok(Some(Vec::new()));
        };

        let source = ctx.data::<Arc<dyn PersonSource>>()?;
        let people = source.fetch_all().await.map_err(|e| e.extend())?;

        Ok(Some(
            people
                .into_iter()
                .filter(|p| filter.matches(p))
                .map(Person::from)
                .collect(),
        ))
    }

    /// Look up a local record by exact name
    async fn find_person(&self, ctx: &Context<'_>, name: String) -> Result<Option<Person>> {
        let store = ctx.data::<Arc<dyn Store>>()?;
        Ok(store.find_by_name(&name).map(Person::from))
    }
}
