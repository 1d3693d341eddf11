mod activity;
mod admin;
mod book;
mod cart;
mod order;
mod user;

pub use self::activity::{Activity, EntityType};
pub use self::admin::Admin;
pub use self::book::Book;
pub use self::cart::{Cart, CartItem};
pub use self::order::{
    Order, OrderItem, OrderStatus, OrderWithItems, PaymentMethod, PaymentStatus,
};
pub use self::user::User;
