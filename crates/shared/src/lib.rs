pub mod abstract_trait;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod integrations;
pub mod model;
pub mod repository;
pub mod service;
pub mod state;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod utils;
