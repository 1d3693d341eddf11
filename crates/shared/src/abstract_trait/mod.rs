mod activity;
mod admin;
mod auth;
mod book;
mod cart;
mod hashing;
mod identity;
mod jwt;
mod order;
mod payment;
mod storage;
mod user;

pub use self::activity::{
    ActivityRepositoryTrait, ActivityServiceTrait, DynActivityRepository, DynActivityService,
};
pub use self::admin::{AdminRepositoryTrait, AdminServiceTrait, DynAdminRepository, DynAdminService};
pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::book::{
    BookCommandRepositoryTrait, BookCommandServiceTrait, BookQueryRepositoryTrait,
    BookQueryServiceTrait, DynBookCommandRepository, DynBookCommandService,
    DynBookQueryRepository, DynBookQueryService,
};
pub use self::cart::{CartRepositoryTrait, CartServiceTrait, DynCartRepository, DynCartService};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::identity::{DynIdentityVerifier, IdentityVerifierTrait, VerifiedIdentity};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::payment::{
    DynPaymentGateway, InitializePayment, PaymentGatewayTrait, PaymentInit, PaymentVerification,
};
pub use self::storage::{DynImageStore, ImageStoreTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
