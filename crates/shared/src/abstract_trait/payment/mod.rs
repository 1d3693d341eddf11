use crate::errors::ServiceError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type DynPaymentGateway = Arc<dyn PaymentGatewayTrait + Send + Sync>;

#[derive(Debug, Clone, Serialize)]
pub struct InitializePayment {
    pub email: String,
    pub amount: i64,
    pub order_code: String,
    pub callback_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentInit {
    pub authorization_url: String,
    pub reference: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentVerification {
    pub status: String,
    pub amount: i64,
    pub reference: String,
}

impl PaymentVerification {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[async_trait]
pub trait PaymentGatewayTrait {
    async fn initialize(&self, req: &InitializePayment) -> Result<PaymentInit, ServiceError>;
    async fn verify(&self, reference: &str) -> Result<PaymentVerification, ServiceError>;
}
