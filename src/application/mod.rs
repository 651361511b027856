pub mod context;
pub mod shared;
pub mod usecases;
