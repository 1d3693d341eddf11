mod activity;
mod auth;
mod book;
mod cart;
mod order;

pub use self::activity::NewActivity;
pub use self::auth::{
    CreateAdminRecord, CreateUserRecord, GoogleLoginRequest, LoginRequest, RegisterAdminRequest,
    RegisterUserRequest, validate_strong_password,
};
pub use self::book::{CreateBookRequest, FindAllBooks, ImageUpload};
pub use self::cart::CartItemRequest;
pub use self::order::{
    AddressRequest, ConfirmPaymentQuery, CreateOrderRecord, CreateOrderRequest, CustomerRequest,
    FindAllOrders, NewOrderItem, OrderItemRequest, UpdateOrderRequest,
};
