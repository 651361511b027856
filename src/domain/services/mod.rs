pub mod person_validator;
