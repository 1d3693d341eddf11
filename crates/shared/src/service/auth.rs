use crate::{
    abstract_trait::{
        AuthServiceTrait, DynHashing, DynIdentityVerifier, DynJwtService, DynUserCommandRepository,
        DynUserQueryRepository,
    },
    config::TokenType,
    domain::{
        requests::{CreateUserRecord, GoogleLoginRequest, LoginRequest, RegisterUserRequest},
        responses::{ApiResponse, UserAuthResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::User as UserModel,
};
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct AuthService {
    hash: DynHashing,
    jwt: DynJwtService,
    identity: DynIdentityVerifier,
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
}

pub struct AuthServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub identity: DynIdentityVerifier,
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            hash,
            jwt,
            identity,
            query,
            command,
        } = deps;

        Self {
            hash,
            jwt,
            identity,
            query,
            command,
        }
    }

    fn issue(
        &self,
        user: UserModel,
        message: &str,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError> {
        let token = self.jwt.generate_token(user.user_id, TokenType::User)?;

        Ok(ApiResponse::success(
            message,
            UserAuthResponse {
                token,
                user: UserResponse::from(user),
            },
        ))
    }
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        req: &RegisterUserRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError> {
        info!("🏗️ Registering user: {}", req.email);

        req.validate()?;

        if self.query.find_by_email(&req.email).await?.is_some() {
            warn!("⚠️ Email already registered: {}", req.email);
            return Err(ServiceError::Conflict("User already exists".to_string()));
        }

        let password = self.hash.hash_password(&req.password).await?;

        let record = CreateUserRecord {
            name: req.username.trim().to_string(),
            email: req.email.trim().to_lowercase(),
            password: Some(password),
            firebase_uid: None,
        };

        let user = match self.command.create_user(&record).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(_)) => {
                return Err(ServiceError::Conflict("User already exists".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to create user '{}': {e:?}", record.email);
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ User registered: {} (ID: {})", user.email, user.user_id);

        self.issue(user, "User registered successfully")
    }

    async fn login_user(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError> {
        info!("🔐 Attempting login for email: {}", req.email);

        req.validate()?;

        let user = match self.query.find_by_email(&req.email).await? {
            Some(user) => user,
            None => {
                error!("❌ User not found: {}", req.email);
                return Err(ServiceError::InvalidCredentials);
            }
        };

        let Some(hashed) = user.password.as_deref() else {
            warn!("⚠️ Password login attempted on social account: {}", req.email);
            return Err(ServiceError::InvalidCredentials);
        };

        if self.hash.compare_password(hashed, &req.password).await.is_err() {
            error!("❌ Invalid password for user: {}", req.email);
            return Err(ServiceError::InvalidCredentials);
        }

        info!("✅ Login successful for email: {}", req.email);

        self.issue(user, "Login successful")
    }

    async fn google_login(
        &self,
        req: &GoogleLoginRequest,
    ) -> Result<ApiResponse<UserAuthResponse>, ServiceError> {
        req.validate()?;

        let identity = self.identity.verify(&req.token).await.map_err(|e| {
            error!("❌ Google token rejected: {e}");
            e
        })?;

        info!("🔐 Google login for email: {}", identity.email);

        let user = match self.query.find_by_email(&identity.email).await? {
            Some(user) => user,
            None => {
                let name = identity
                    .name
                    .clone()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| {
                        identity
                            .email
                            .split('@')
                            .next()
                            .unwrap_or_default()
                            .to_string()
                    });

                let record = CreateUserRecord {
                    name,
                    email: identity.email.to_lowercase(),
                    password: None,
                    firebase_uid: Some(identity.uid.clone()),
                };

                let user = self.command.create_user(&record).await?;
                info!("✅ Created user from Google account: {}", user.email);
                user
            }
        };

        self.issue(user, "Google login successful")
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        Ok(ApiResponse::success(
            "User fetched successfully",
            UserResponse::from(user),
        ))
    }

    async fn authenticate(&self, token: &str) -> Result<UserResponse, ServiceError> {
        let user_id = self.jwt.verify_token(token, TokenType::User)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
