//! Verification of Firebase ID tokens issued for Google sign-in.

use crate::{
    abstract_trait::{IdentityVerifierTrait, VerifiedIdentity},
    errors::ServiceError,
};
use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header, jwk::JwkSet};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, warn};

const JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

const JWKS_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Deserialize)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
}

pub struct FirebaseVerifier {
    client: reqwest::Client,
    project_id: String,
    jwks_url: String,
    keys: RwLock<Option<(Instant, JwkSet)>>,
}

impl FirebaseVerifier {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            project_id: project_id.into(),
            jwks_url: JWKS_URL.to_string(),
            keys: RwLock::new(None),
        }
    }

    fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    async fn fetch_keys(&self) -> Result<JwkSet, ServiceError> {
        let jwks = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| ServiceError::Identity(format!("Failed to fetch signing keys: {e}")))?
            .json::<JwkSet>()
            .await
            .map_err(|e| ServiceError::Identity(format!("Malformed signing keys: {e}")))?;

        info!("🔑 Refreshed {} Google signing key(s)", jwks.keys.len());

        *self.keys.write().await = Some((Instant::now(), jwks.clone()));

        Ok(jwks)
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, ServiceError> {
        {
            let cached = self.keys.read().await;
            let fresh = cached
                .as_ref()
                .filter(|(fetched_at, _)| fetched_at.elapsed() < JWKS_TTL)
                .and_then(|(_, jwks)| jwks.find(kid));

            if let Some(jwk) = fresh {
                return DecodingKey::from_jwk(jwk).map_err(ServiceError::from);
            }
        }

        let jwks = self.fetch_keys().await?;

        let jwk = jwks
            .find(kid)
            .ok_or_else(|| ServiceError::Identity(format!("Unknown signing key: {kid}")))?;

        DecodingKey::from_jwk(jwk).map_err(ServiceError::from)
    }
}

#[async_trait]
impl IdentityVerifierTrait for FirebaseVerifier {
    async fn verify(&self, id_token: &str) -> Result<VerifiedIdentity, ServiceError> {
        let header = decode_header(id_token)
            .map_err(|e| ServiceError::Identity(format!("Malformed token: {e}")))?;

        if header.alg != Algorithm::RS256 {
            return Err(ServiceError::Identity("Unexpected signing algorithm".into()));
        }

        let kid = header
            .kid
            .ok_or_else(|| ServiceError::Identity("Token has no key id".into()))?;

        let key = self.key_for(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.project_id.as_str()]);
        validation.set_issuer(&[self.issuer()]);

        let claims = decode::<FirebaseClaims>(id_token, &key, &validation)
            .map_err(|e| ServiceError::Identity(format!("Token rejected: {e}")))?
            .claims;

        let email = claims
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ServiceError::Identity("Token carries no email".into()))?;

        Ok(VerifiedIdentity {
            uid: claims.sub,
            email,
            name: claims.name,
        })
    }
}

/// Used when no Firebase project is configured; every token is rejected.
pub struct DisabledIdentityVerifier;

#[async_trait]
impl IdentityVerifierTrait for DisabledIdentityVerifier {
    async fn verify(&self, _id_token: &str) -> Result<VerifiedIdentity, ServiceError> {
        warn!("⚠️ Google login attempted but FIREBASE_PROJECT_ID is not set");
        Err(ServiceError::Identity("Google login is not configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issuer_is_derived_from_project() {
        let verifier = FirebaseVerifier::new("bookstore-demo");
        assert_eq!(
            verifier.issuer(),
            "https://securetoken.google.com/bookstore-demo"
        );
    }

    #[tokio::test]
    async fn rejects_malformed_tokens_before_fetching_keys() {
        let verifier = FirebaseVerifier::new("bookstore-demo");
        let err = verifier.verify("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, ServiceError::Identity(_)));
    }

    #[tokio::test]
    async fn disabled_verifier_rejects_everything() {
        let err = DisabledIdentityVerifier.verify("anything").await.unwrap_err();
        assert!(matches!(err, ServiceError::Identity(_)));
    }
}
