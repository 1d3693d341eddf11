use crate::{config::TokenType, errors::ServiceError};
use std::sync::Arc;

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait: Send + Sync + std::fmt::Debug {
    fn generate_token(&self, id: i32, token_type: TokenType) -> Result<String, ServiceError>;
    fn verify_token(&self, token: &str, expected_type: TokenType) -> Result<i32, ServiceError>;
}
