pub mod factory;
pub mod person_repository;

pub use factory::Repositories;
