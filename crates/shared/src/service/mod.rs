mod activity;
mod admin;
mod auth;
mod book;
mod cart;
mod order;

pub use self::activity::ActivityService;
pub use self::admin::{AdminService, AdminServiceDeps};
pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::book::{BookService, BookServiceDeps};
pub use self::cart::{CartService, CartServiceDeps};
pub use self::order::{OrderService, OrderServiceDeps};
