//! In-memory repositories and fake integrations for driving the services and
//! the HTTP router without PostgreSQL or network access.

mod fakes;
mod memory;

pub use self::fakes::{FakeIdentityVerifier, FakePaymentGateway, InMemoryImageStore};
pub use self::memory::InMemoryDb;

use crate::{
    abstract_trait::{
        DynActivityRepository, DynAdminRepository, DynBookCommandRepository,
        DynBookQueryRepository, DynCartRepository, DynHashing, DynIdentityVerifier, DynImageStore,
        DynJwtService, DynOrderCommandRepository, DynOrderQueryRepository, DynPaymentGateway,
        DynUserCommandRepository, DynUserQueryRepository,
    },
    config::{Hashing, JwtConfig, PricingConfig},
    di::{DependenciesInjectDeps, Repositories},
    state::AppState,
};
use std::{path::PathBuf, sync::Arc};

pub const TEST_JWT_SECRET: &str = "test-secret";
pub const TEST_CALLBACK_URL: &str = "http://localhost:5173/orders/verify";

impl InMemoryDb {
    pub fn repositories(&self) -> Repositories {
        Repositories {
            user_query: Arc::new(self.clone()) as DynUserQueryRepository,
            user_command: Arc::new(self.clone()) as DynUserCommandRepository,
            admin: Arc::new(self.clone()) as DynAdminRepository,
            book_query: Arc::new(self.clone()) as DynBookQueryRepository,
            book_command: Arc::new(self.clone()) as DynBookCommandRepository,
            cart: Arc::new(self.clone()) as DynCartRepository,
            order_query: Arc::new(self.clone()) as DynOrderQueryRepository,
            order_command: Arc::new(self.clone()) as DynOrderCommandRepository,
            activity: Arc::new(self.clone()) as DynActivityRepository,
        }
    }
}

/// A fully wired application state backed by in-memory fakes.
pub struct TestHarness {
    pub state: AppState,
    pub db: InMemoryDb,
    pub payment: Arc<FakePaymentGateway>,
    pub identity: Arc<FakeIdentityVerifier>,
    pub images: Arc<InMemoryImageStore>,
    pub jwt: DynJwtService,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone)]
pub struct TestOptions {
    pub pricing: PricingConfig,
    pub allow_admin_registration: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            pricing: PricingConfig::default(),
            allow_admin_registration: true,
        }
    }
}

impl TestHarness {
    pub async fn new() -> Self {
        Self::with_options(TestOptions::default()).await
    }

    pub async fn with_options(options: TestOptions) -> Self {
        let db = InMemoryDb::default();
        let payment = Arc::new(FakePaymentGateway::default());
        let identity = Arc::new(FakeIdentityVerifier::default());
        let images = Arc::new(InMemoryImageStore::default());
        let jwt = Arc::new(JwtConfig::new(TEST_JWT_SECRET)) as DynJwtService;

        let deps = DependenciesInjectDeps {
            repositories: db.repositories(),
            hash: Arc::new(Hashing::with_cost(4)) as DynHashing,
            jwt_config: jwt.clone(),
            payment: payment.clone() as DynPaymentGateway,
            identity: identity.clone() as DynIdentityVerifier,
            images: images.clone() as DynImageStore,
            pricing: options.pricing,
            payment_callback_url: TEST_CALLBACK_URL.to_string(),
            allow_admin_registration: options.allow_admin_registration,
        };

        let state = AppState::from_deps(
            deps,
            std::env::temp_dir().join("bookstore-test-uploads"),
            vec!["http://localhost:5173".to_string()],
        )
        .await;

        Self {
            state,
            db,
            payment,
            identity,
            images,
            jwt,
            pricing: options.pricing,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.state.upload_dir.clone()
    }
}
