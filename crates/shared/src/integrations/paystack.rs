//! Paystack transaction API client.
//!
//! Only the two calls the checkout flow needs are wrapped: initialising a
//! transaction (which yields the hosted checkout URL) and verifying it once the
//! customer is redirected back.

use crate::{
    abstract_trait::{InitializePayment, PaymentGatewayTrait, PaymentInit, PaymentVerification},
    config::PaystackConfig,
    errors::ServiceError,
};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use std::time::Duration;
use tracing::{error, info};

#[derive(Debug, Deserialize)]
struct PaystackEnvelope<T> {
    status: bool,
    #[serde(default)]
    message: String,
    data: Option<T>,
}

#[derive(Clone)]
pub struct PaystackClient {
    client: reqwest::Client,
    base_url: String,
}

impl PaystackClient {
    pub fn new(config: &PaystackConfig) -> Result<Self, ServiceError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.secret_key);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth_value)
                .map_err(|e| ServiceError::Internal(format!("Invalid Paystack key: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ServiceError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ServiceError> {
        let status = response.status();

        let envelope: PaystackEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ServiceError::Payment(format!("Malformed gateway response: {e}")))?;

        if !status.is_success() || !envelope.status {
            return Err(ServiceError::Payment(format!(
                "Gateway returned {}: {}",
                status.as_u16(),
                envelope.message
            )));
        }

        envelope
            .data
            .ok_or_else(|| ServiceError::Payment("Gateway response had no data".to_string()))
    }
}

#[async_trait]
impl PaymentGatewayTrait for PaystackClient {
    async fn initialize(&self, req: &InitializePayment) -> Result<PaymentInit, ServiceError> {
        let url = format!("{}/transaction/initialize", self.base_url);

        let body = json!({
            "email": req.email,
            "amount": req.amount,
            "callback_url": req.callback_url,
            "metadata": { "orderId": req.order_code },
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("❌ Paystack initialize request failed: {e}");
                ServiceError::Payment(e.to_string())
            })?;

        let init: PaymentInit = self.handle_response(response).await?;

        info!(
            "💳 Paystack transaction {} initialised for {}",
            init.reference, req.order_code
        );

        Ok(init)
    }

    async fn verify(&self, reference: &str) -> Result<PaymentVerification, ServiceError> {
        let url = format!("{}/transaction/verify/{reference}", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("❌ Paystack verify request failed: {e}");
            ServiceError::Payment(e.to_string())
        })?;

        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_initialize_envelope() {
        let raw = r#"{
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/abc",
                "access_code": "abc",
                "reference": "ref-1"
            }
        }"#;

        let envelope: PaystackEnvelope<PaymentInit> = serde_json::from_str(raw).unwrap();
        let data = envelope.data.unwrap();

        assert!(envelope.status);
        assert_eq!(data.reference, "ref-1");
        assert_eq!(data.authorization_url, "https://checkout.paystack.com/abc");
    }

    #[test]
    fn parses_failed_envelope_without_data() {
        let raw = r#"{ "status": false, "message": "Transaction reference not found" }"#;

        let envelope: PaystackEnvelope<PaymentVerification> = serde_json::from_str(raw).unwrap();

        assert!(!envelope.status);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn rejects_invalid_secret_header() {
        let config = PaystackConfig {
            secret_key: "bad\nkey".into(),
            base_url: "https://api.paystack.co/".into(),
        };

        assert!(PaystackClient::new(&config).is_err());
    }
}
