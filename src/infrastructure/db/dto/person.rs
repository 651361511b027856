use crate::domain::entities::person::Person;
use crate::domain::value_objects::ids::PersonId;
use crate::domain::value_objects::timestamps::Timestamp;
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PersonRow {
    pub id: uuid::Uuid,
    pub name: String,
    pub number: String,
    pub created_at: OffsetDateTime,
}

impl PersonRow {
    pub fn from_person(person: &Person) -> Self {
        Self {
            id: person.id.0,
            name: person.name.clone(),
            number: person.number.clone(),
            created_at: person.created_at.as_inner(),
        }
    }

    pub fn into_person(self) -> Person {
        Person {
            id: PersonId(self.id),
            name: self.name,
            number: self.number,
            created_at: Timestamp::from(self.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PersonRow;
    use crate::domain::entities::person::Person;

    #[test]
    fn given_person_when_from_person_should_map_fields() {
        let person = Person::new("Ada", "123");

        let row = PersonRow::from_person(&person);

        assert_eq!(row.id, person.id.0);
        assert_eq!(row.name, "Ada");
        assert_eq!(row.number, "123");
        assert_eq!(row.created_at, person.created_at.as_inner());
    }

    #[test]
    fn given_person_row_when_into_person_should_restore_entity() {
        let person = Person::new("Grace", "040-1234567");

        let restored = PersonRow::from_person(&person).into_person();

        assert_eq!(restored, person);
    }
}
