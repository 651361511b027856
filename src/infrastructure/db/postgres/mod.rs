mod database;
pub mod person_store_postgres;

pub use database::PostgresDatabase;
