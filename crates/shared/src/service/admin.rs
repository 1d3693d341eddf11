use crate::{
    abstract_trait::{AdminServiceTrait, DynAdminRepository, DynHashing, DynJwtService},
    config::TokenType,
    domain::{
        requests::{CreateAdminRecord, LoginRequest, RegisterAdminRequest},
        responses::{AdminAuthResponse, AdminResponse, ApiResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info, warn};
use validator::Validate;

pub struct AdminService {
    hash: DynHashing,
    jwt: DynJwtService,
    repository: DynAdminRepository,
    allow_registration: bool,
}

pub struct AdminServiceDeps {
    pub hash: DynHashing,
    pub jwt: DynJwtService,
    pub repository: DynAdminRepository,
    pub allow_registration: bool,
}

impl AdminService {
    pub fn new(deps: AdminServiceDeps) -> Self {
        Self {
            hash: deps.hash,
            jwt: deps.jwt,
            repository: deps.repository,
            allow_registration: deps.allow_registration,
        }
    }
}

#[async_trait]
impl AdminServiceTrait for AdminService {
    async fn register_admin(
        &self,
        req: &RegisterAdminRequest,
    ) -> Result<ApiResponse<AdminAuthResponse>, ServiceError> {
        if !self.allow_registration {
            warn!("⚠️ Admin registration attempted while disabled: {}", req.email);
            return Err(ServiceError::Forbidden(
                "Admin registration is disabled".to_string(),
            ));
        }

        req.validate()?;

        if self.repository.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::Conflict("Admin already exists".to_string()));
        }

        let password = self.hash.hash_password(&req.password).await?;

        let record = CreateAdminRecord {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_lowercase(),
            password,
        };

        let admin = match self.repository.create_admin(&record).await {
            Ok(admin) => admin,
            Err(RepositoryError::AlreadyExists(_)) => {
                return Err(ServiceError::Conflict("Admin already exists".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to create admin '{}': {e:?}", record.email);
                return Err(ServiceError::Repo(e));
            }
        };

        let token = self.jwt.generate_token(admin.admin_id, TokenType::Admin)?;

        info!("✅ Admin registered: {} (ID: {})", admin.email, admin.admin_id);

        Ok(ApiResponse::success(
            "Admin registered successfully",
            AdminAuthResponse {
                token,
                admin: AdminResponse::from(admin),
            },
        ))
    }

    async fn login_admin(
        &self,
        req: &LoginRequest,
    ) -> Result<ApiResponse<AdminAuthResponse>, ServiceError> {
        info!("🔐 Admin login attempt: {}", req.email);

        req.validate()?;

        let admin = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if self
            .hash
            .compare_password(&admin.password, &req.password)
            .await
            .is_err()
        {
            error!("❌ Invalid password for admin: {}", req.email);
            return Err(ServiceError::InvalidCredentials);
        }

        if !admin.is_active {
            warn!("⚠️ Disabled admin tried to log in: {}", req.email);
            return Err(ServiceError::Forbidden("Account is disabled".to_string()));
        }

        let token = self.jwt.generate_token(admin.admin_id, TokenType::Admin)?;

        info!("✅ Admin login successful: {}", req.email);

        Ok(ApiResponse::success(
            "Login successful",
            AdminAuthResponse {
                token,
                admin: AdminResponse::from(admin),
            },
        ))
    }

    async fn authenticate(&self, token: &str) -> Result<AdminResponse, ServiceError> {
        let admin_id = self.jwt.verify_token(token, TokenType::Admin)?;

        let admin = self
            .repository
            .find_by_id(admin_id)
            .await?
            .filter(|a| a.is_active)
            .ok_or_else(|| ServiceError::NotFound("Admin not found".to_string()))?;

        Ok(AdminResponse::from(admin))
    }
}
