use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    User,
    Admin,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: i32,
    pub token_type: TokenType,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(sub: i32, token_type: TokenType, iat: usize, exp: usize) -> Self {
        Claims {
            sub,
            token_type,
            iat,
            exp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub ttl: Duration,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            ttl: Duration::hours(24),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, id: i32, token_type: TokenType) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + self.ttl).timestamp().max(0) as usize;

        let claims = Claims::new(id, token_type, iat, exp);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str, expected_type: TokenType) -> Result<i32, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                _ => ServiceError::Jwt(e),
            })?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        if token_data.claims.token_type != expected_type {
            return Err(ServiceError::InvalidTokenType);
        }

        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_and_verifies_user_token() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(42, TokenType::User).unwrap();

        assert_eq!(jwt.verify_token(&token, TokenType::User).unwrap(), 42);
    }

    #[test]
    fn rejects_token_of_other_principal_kind() {
        let jwt = JwtConfig::new("test-secret");
        let token = jwt.generate_token(7, TokenType::User).unwrap();

        let result = jwt.verify_token(&token, TokenType::Admin);
        assert!(matches!(result, Err(ServiceError::InvalidTokenType)));
    }

    #[test]
    fn rejects_expired_token() {
        let jwt = JwtConfig::new("test-secret").with_ttl(Duration::hours(-2));
        let token = jwt.generate_token(1, TokenType::Admin).unwrap();

        let result = jwt.verify_token(&token, TokenType::Admin);
        assert!(matches!(result, Err(ServiceError::TokenExpired)));
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let issuer = JwtConfig::new("secret-a");
        let verifier = JwtConfig::new("secret-b");
        let token = issuer.generate_token(1, TokenType::User).unwrap();

        assert!(matches!(
            verifier.verify_token(&token, TokenType::User),
            Err(ServiceError::Jwt(_))
        ));
    }
}
