use serde::{Deserialize, Serialize};

use crate::domain::entities::person::Person;

/// Body of `POST` and `PUT` on `/api/persons`. Unknown fields, `id` included,
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PersonRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name,
            number: person.number,
        }
    }
}
