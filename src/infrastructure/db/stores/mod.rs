pub mod person_store;
