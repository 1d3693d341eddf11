use crate::errors::ServiceError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynIdentityVerifier = Arc<dyn IdentityVerifierTrait + Send + Sync>;

#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    pub uid: String,
    pub email: String,
    pub name: Option<String>,
}

#[async_trait]
pub trait IdentityVerifierTrait {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, ServiceError>;
}
