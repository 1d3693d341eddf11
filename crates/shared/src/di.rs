use crate::{
    abstract_trait::{
        DynActivityRepository, DynActivityService, DynAdminRepository, DynAdminService,
        DynAuthService, DynBookCommandRepository, DynBookQueryRepository, DynCartRepository,
        DynCartService, DynHashing, DynIdentityVerifier, DynImageStore, DynJwtService,
        DynOrderCommandRepository, DynOrderQueryRepository, DynPaymentGateway,
        DynUserCommandRepository, DynUserQueryRepository,
    },
    config::{ConnectionPool, PricingConfig},
    repository::{
        ActivityRepository, AdminRepository, BookRepository, CartRepository, OrderRepository,
        UserRepository,
    },
    service::{
        ActivityService, AdminService, AdminServiceDeps, AuthService, AuthServiceDeps,
        BookService, BookServiceDeps, CartService, CartServiceDeps, OrderService,
        OrderServiceDeps,
    },
};
use std::{fmt, sync::Arc};

/// Every storage seam the services depend on.
#[derive(Clone)]
pub struct Repositories {
    pub user_query: DynUserQueryRepository,
    pub user_command: DynUserCommandRepository,
    pub admin: DynAdminRepository,
    pub book_query: DynBookQueryRepository,
    pub book_command: DynBookCommandRepository,
    pub cart: DynCartRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_command: DynOrderCommandRepository,
    pub activity: DynActivityRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        let user_repository = UserRepository::new(pool.clone());
        let book_repository = BookRepository::new(pool.clone());
        let order_repository = OrderRepository::new(pool.clone());

        Self {
            user_query: user_repository.query,
            user_command: user_repository.command,
            admin: Arc::new(AdminRepository::new(pool.clone())) as DynAdminRepository,
            book_query: book_repository.query,
            book_command: book_repository.command,
            cart: Arc::new(CartRepository::new(pool.clone())) as DynCartRepository,
            order_query: order_repository.query,
            order_command: order_repository.command,
            activity: Arc::new(ActivityRepository::new(pool)) as DynActivityRepository,
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub admin_service: DynAdminService,
    pub activity_service: DynActivityService,
    pub book_service: BookService,
    pub cart_service: DynCartService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("admin_service", &"<AdminService>")
            .field("activity_service", &"<ActivityService>")
            .field("book_service", &self.book_service)
            .field("cart_service", &"<CartService>")
            .field("order_service", &self.order_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub payment: DynPaymentGateway,
    pub identity: DynIdentityVerifier,
    pub images: DynImageStore,
    pub pricing: PricingConfig,
    pub payment_callback_url: String,
    pub allow_admin_registration: bool,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            jwt_config,
            payment,
            identity,
            images,
            pricing,
            payment_callback_url,
            allow_admin_registration,
        } = deps;

        let activity_service =
            Arc::new(ActivityService::new(repositories.activity.clone())) as DynActivityService;

        let auth_service = Arc::new(AuthService::new(AuthServiceDeps {
            hash: hash.clone(),
            jwt: jwt_config.clone(),
            identity,
            query: repositories.user_query.clone(),
            command: repositories.user_command.clone(),
        })) as DynAuthService;

        let admin_service = Arc::new(AdminService::new(AdminServiceDeps {
            hash,
            jwt: jwt_config,
            repository: repositories.admin.clone(),
            allow_registration: allow_admin_registration,
        })) as DynAdminService;

        let book_service = BookService::new(BookServiceDeps {
            query: repositories.book_query.clone(),
            command: repositories.book_command.clone(),
            images,
            activity: activity_service.clone(),
        });

        let cart_service = Arc::new(CartService::new(CartServiceDeps {
            carts: repositories.cart.clone(),
            books: repositories.book_query.clone(),
            pricing,
        })) as DynCartService;

        let order_service = OrderService::new(OrderServiceDeps {
            query: repositories.order_query.clone(),
            command: repositories.order_command.clone(),
            books: repositories.book_query.clone(),
            payment,
            activity: activity_service.clone(),
            pricing,
            callback_url: payment_callback_url,
        });

        Self {
            auth_service,
            admin_service,
            activity_service,
            book_service,
            cart_service,
            order_service,
        }
    }
}
