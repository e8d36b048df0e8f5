use std::sync::Arc;

use async_graphql::{Context, ErrorExtensions, Object, Result};
use tracing::info;

use super::types::Person;
use crate::schema::{self as domain, NewPerson, PersonId};
use crate::store::Store;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a record. Names must be unique.
    ///
    /// Nullable so that a rejected insert does not null sibling mutations.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> Result<Option<Person>> {
        let store = ctx.data::<Arc<dyn Store>>()?;

        let person = domain::Person::create(NewPerson {
            name,
            phone,
            street,
            city,
        })
        .map_err(|e| e.extend())?;

        let created = store.insert(person).map_err(|e| e.extend())?;
        info!(id = %created.id, name = %created.name, "person added");

        Ok(Some(created.into()))
    }

    /// Replace the phone of the record with this name, or null if there is none
    async fn edit_number(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: String,
    ) -> Result<Option<Person>> {
        let store = ctx.data::<Arc<dyn Store>>()?;

        let updated = store.update_phone(&name, phone).map_err(|e| e.extend())?;
        match &updated {
            Some(p) => info!(id = %p.id, name = %p.name, "phone updated"),
            None => info!(name = %name, "editNumber: no such person"),
        }

        Ok(updated.map(Person::from))
    }

    /// Delete a record by id and return the records that remain
    async fn delete_person(&self, ctx: &Context<'_>, id: String) -> Result<Vec<Person>> {
        let store = ctx.data::<Arc<dyn Store>>()?;

        let removal = store
            .remove_by_id(&PersonId::from(id))
            .map_err(|e| e.extend())?;
        if let Some(p) = &removal.removed {
            info!(id = %p.id, name = %p.name, "person deleted");
        }

        Ok(removal.remaining.into_iter().map(Person::from).collect())
    }
}
