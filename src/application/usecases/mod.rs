pub mod create_person;
pub mod delete_person;
pub mod get_person;
pub mod list_persons;
pub mod phonebook_info;
pub mod update_person;
