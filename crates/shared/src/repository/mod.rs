mod activity;
mod admin;
mod book;
mod cart;
mod order;
mod user;

pub use self::activity::ActivityRepository;
pub use self::admin::AdminRepository;
pub use self::book::BookRepository;
pub use self::cart::CartRepository;
pub use self::order::OrderRepository;
pub use self::user::UserRepository;
