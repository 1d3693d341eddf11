use crate::{
    abstract_trait::{
        DynHashing, DynIdentityVerifier, DynImageStore, DynJwtService, DynPaymentGateway,
    },
    config::{Config, ConnectionPool, Hashing, JwtConfig},
    di::{DependenciesInject, DependenciesInjectDeps, Repositories},
    integrations::{DisabledIdentityVerifier, FirebaseVerifier, LocalImageStore, PaystackClient},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub upload_dir: PathBuf,
    pub allowed_origins: Vec<String>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("upload_dir", &self.upload_dir)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl AppState {
    pub async fn new(pool: ConnectionPool, config: &Config) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let payment = Arc::new(
            PaystackClient::new(&config.paystack).context("Failed to build Paystack client")?,
        ) as DynPaymentGateway;

        let identity = match &config.firebase_project_id {
            Some(project_id) => {
                info!("🔑 Google login enabled for Firebase project {project_id}");
                Arc::new(FirebaseVerifier::new(project_id.clone())) as DynIdentityVerifier
            }
            None => Arc::new(DisabledIdentityVerifier) as DynIdentityVerifier,
        };

        let images = Arc::new(LocalImageStore::new(&config.upload_dir)) as DynImageStore;

        let deps = DependenciesInjectDeps {
            repositories: Repositories::postgres(pool),
            hash: hashing,
            jwt_config,
            payment,
            identity,
            images,
            pricing: config.pricing,
            payment_callback_url: config.payment_callback_url(),
            allow_admin_registration: config.allow_admin_registration,
        };

        let state = Self::from_deps(
            deps,
            PathBuf::from(&config.upload_dir),
            vec![config.frontend_url.clone(), config.admin_url.clone()],
        )
        .await;

        tokio::spawn(run_metrics_collector(state.system_metrics.clone()));

        Ok(state)
    }

    /// Builds the state around already constructed dependencies without
    /// starting background collectors.
    pub async fn from_deps(
        deps: DependenciesInjectDeps,
        upload_dir: PathBuf,
        allowed_origins: Vec<String>,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let system_metrics = Arc::new(SystemMetrics::new());

        let di_container = DependenciesInject::new(deps);

        {
            let mut registry = registry.lock().await;
            metrics.lock().await.register(&mut registry);
            system_metrics.register(&mut registry);
        }

        Self {
            di_container,
            registry,
            metrics,
            system_metrics,
            upload_dir,
            allowed_origins,
        }
    }
}
