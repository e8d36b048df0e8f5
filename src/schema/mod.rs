//! Contact record types
//!
//! This module defines the records the phonebook stores and serves:
//! - [`Person`]: a stored contact with a server-assigned [`PersonId`]
//! - [`Address`]: the street/city view derived from a person
//! - [`NewPerson`]: validated input for record creation

mod person;

pub use person::{seed_people, Address, NewPerson, Person, PersonId, PhoneFilter};
