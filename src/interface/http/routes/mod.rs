pub mod info;
pub mod metrics;
pub mod person;
pub mod probes;
