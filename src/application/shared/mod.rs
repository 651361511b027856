pub mod person_errors;
