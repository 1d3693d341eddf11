use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "reader")]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    #[schema(example = "reader@example.com")]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_strong_password"))]
    #[schema(example = "Secret123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterAdminRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    #[schema(example = "Store Admin")]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email"))]
    #[schema(example = "admin@example.com")]
    pub email: String,

    #[serde(default)]
    #[validate(custom(function = "validate_strong_password"))]
    #[schema(example = "Secret123")]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct GoogleLoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Token is required"))]
    pub token: String,
}

/// A user row ready to be inserted. Social accounts carry no password.
#[derive(Debug, Clone)]
pub struct CreateUserRecord {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
    pub firebase_uid: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateAdminRecord {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// At least 8 characters with one lowercase letter, one uppercase letter and one digit.
pub fn validate_strong_password(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= 8;
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if long_enough && has_lower && has_upper && has_digit {
        Ok(())
    } else {
        Err(ValidationError::new("weak_password").with_message(
            "Password must be at least 8 characters and include uppercase, lowercase, and a number."
                .into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strong_passwords() {
        assert!(validate_strong_password("Secret123").is_ok());
        assert!(validate_strong_password("abcDEF12").is_ok());
    }

    #[test]
    fn rejects_weak_passwords() {
        assert!(validate_strong_password("Sh0rt").is_err());
        assert!(validate_strong_password("alllowercase1").is_err());
        assert!(validate_strong_password("ALLUPPERCASE1").is_err());
        assert!(validate_strong_password("NoDigitsHere").is_err());
    }

    #[test]
    fn registration_requires_valid_email() {
        let req = RegisterUserRequest {
            username: "reader".into(),
            email: "not-an-email".into(),
            password: "Secret123".into(),
        };

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn missing_login_fields_fail_validation() {
        let req: LoginRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }
}
