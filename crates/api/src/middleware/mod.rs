pub mod jwt;
pub mod metrics;
pub mod validate;
