//! HTTP surface of the bookstore: routing, authentication middleware and
//! OpenAPI documentation over the services in `shared`.

pub mod handler;
pub mod middleware;

pub use self::handler::{AppRouter, build_router};
