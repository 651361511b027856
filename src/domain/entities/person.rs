use crate::domain::value_objects::ids::PersonId;
use crate::domain::value_objects::timestamps::Timestamp;

/// A phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
    pub created_at: Timestamp,
}

impl Person {
    /// Build a new person with a freshly assigned id.
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            number: number.into(),
            created_at: Timestamp::now_utc(),
        }
    }

    /// Replace the contact fields, keeping identity and metadata.
    pub fn with_contact(mut self, name: impl Into<String>, number: impl Into<String>) -> Self {
        self.name = name.into();
        self.number = number.into();
        self
    }
}

/// Validated input for creating or replacing a person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub name: String,
    pub number: String,
}
