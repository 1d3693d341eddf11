use axum::{
    Extension,
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::IntoResponse,
};
use shared::{
    abstract_trait::{DynAdminService, DynAuthService},
    domain::responses::{AdminResponse, UserResponse},
    errors::{HttpError, ServiceError},
};
use tracing::warn;

/// The user a request was authenticated as.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserResponse);

/// The admin a request was authenticated as.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AdminResponse);

fn bearer_token(req: &Request<Body>) -> Result<String, HttpError> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_value| auth_value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| HttpError::Unauthorized("Not authorized, token missing".to_string()))
}

fn rejection(err: ServiceError) -> HttpError {
    match err {
        ServiceError::NotFound(msg) => HttpError::Unauthorized(msg),
        other => {
            warn!("🔒 Rejected bearer token: {other}");
            match HttpError::from(other) {
                HttpError::Internal(msg) => HttpError::Internal(msg),
                _ => HttpError::Unauthorized("Not authorized, token failed".to_string()),
            }
        }
    }
}

pub async fn user_auth(
    Extension(auth): Extension<DynAuthService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = bearer_token(&req)?;

    let user = auth.authenticate(&token).await.map_err(rejection)?;

    req.extensions_mut().insert(AuthUser(user));

    Ok(next.run(req).await)
}

pub async fn admin_auth(
    Extension(admins): Extension<DynAdminService>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, HttpError> {
    let token = bearer_token(&req)?;

    let admin = admins.authenticate(&token).await.map_err(rejection)?;

    req.extensions_mut().insert(AuthAdmin(admin));

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(value: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/");
        if let Some(value) = value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn extracts_bearer_tokens() {
        let token = bearer_token(&request_with(Some("Bearer abc.def"))).unwrap();
        assert_eq!(token, "abc.def");
    }

    #[test]
    fn rejects_missing_or_foreign_schemes() {
        assert!(bearer_token(&request_with(None)).is_err());
        assert!(bearer_token(&request_with(Some("Basic dXNlcg=="))).is_err());
        assert!(bearer_token(&request_with(Some("Bearer "))).is_err());
    }

    #[test]
    fn missing_principal_keeps_its_message() {
        match rejection(ServiceError::NotFound("User not found".into())) {
            HttpError::Unauthorized(msg) => assert_eq!(msg, "User not found"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
