//! Contact record types

use serde::{Deserialize, Deserializer, Serialize};
use ulid::Ulid;

use crate::error::{PhonebookError, Result};

/// Opaque record identifier.
///
/// Locally created records get a ULID. Records read from the upstream source
/// keep whatever id they carry there; numeric ids are rendered as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Upstream scalars that may arrive as JSON strings or numbers
#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextOrNumber> for String {
    fn from(raw: TextOrNumber) -> Self {
        match raw {
            TextOrNumber::Text(s) => s,
            TextOrNumber::Number(n) => n.to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        TextOrNumber::deserialize(deserializer).map(|raw| Self(raw.into()))
    }
}

fn deserialize_phone<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    Ok(Option::<TextOrNumber>::deserialize(deserializer)?.map(String::from))
}

/// A stored contact record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Assigned once, at creation
    #[serde(default = "PersonId::generate")]
    pub id: PersonId,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_phone")]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

impl Person {
    /// Build a record from validated input, assigning a fresh id
    pub fn create(input: NewPerson) -> Result<Self> {
        input.validate()?;
        let NewPerson {
            name,
            phone,
            street,
            city,
        } = input;
        Ok(Self {
            id: PersonId::generate(),
            name,
            phone,
            street,
            city,
        })
    }

    /// Whether the phone field is present and non-empty
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// The address view over this record
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }
}

/// Postal address projected from a [`Person`]. Never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// Input for creating a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub street: String,
    pub city: String,
}

impl NewPerson {
    /// Reject blank required fields
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("street", &self.street),
            ("city", &self.city),
        ] {
            if value.trim().is_empty() {
                return Err(PhonebookError::Validation(format!(
                    "`{}` must not be empty",
                    field
                )));
            }
        }
        Ok(())
    }
}

/// Filter on phone presence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneFilter {
    /// Keep records with a phone
    Yes,
    /// Keep records without a phone
    No,
}

impl PhoneFilter {
    pub fn matches(self, person: &Person) -> bool {
        match self {
            PhoneFilter::Yes => person.has_phone(),
            PhoneFilter::No => !person.has_phone(),
        }
    }
}

/// The records a fresh store starts with
pub fn seed_people() -> Vec<Person> {
    vec![
        Person {
            id: PersonId::from("asdas-12312-qweqw"),
            name: "Nicolas".to_string(),
            phone: Some("3415929292".to_string()),
            street: "Mendoza".to_string(),
            city: "Rosario".to_string(),
        },
        Person {
            id: PersonId::from("lsdgs-12312-qweqw"),
            name: "Juan".to_string(),
            phone: Some("3415919191".to_string()),
            street: "Valparaiso".to_string(),
            city: "Salta".to_string(),
        },
        Person {
            id: PersonId::from("asdas-12312-qwpkw"),
            name: "Pedro".to_string(),
            phone: None,
            street: "Cordoba".to_string(),
            city: "Barcelona".to_string(),
        },
    ]
}
