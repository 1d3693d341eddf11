mod activity;
mod api;
mod auth;
mod book;
mod cart;
mod order;
mod pagination;

pub use self::activity::ActivityResponse;
pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::auth::{AdminAuthResponse, AdminResponse, UserAuthResponse, UserResponse};
pub use self::book::BookResponse;
pub use self::cart::{CartItemResponse, CartResponse, CartSummary};
pub use self::order::{
    CreateOrderResponse, OrderCounts, OrderItemResponse, OrderListResponse, OrderResponse,
    ShippingAddressResponse,
};
pub use self::pagination::Pagination;
