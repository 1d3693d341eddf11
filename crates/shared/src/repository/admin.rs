use crate::{
    abstract_trait::AdminRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateAdminRecord, errors::RepositoryError, model::Admin as AdminModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct AdminRepository {
    db: ConnectionPool,
}

impl AdminRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepositoryTrait for AdminRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<AdminModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let admin = sqlx::query_as::<_, AdminModel>(
            r#"
            SELECT admin_id, name, email, password, is_active, created_at, updated_at
            FROM admins
            WHERE admin_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch admin {id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(admin)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AdminModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let admin = sqlx::query_as::<_, AdminModel>(
            r#"
            SELECT admin_id, name, email, password, is_active, created_at, updated_at
            FROM admins
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(admin)
    }

    async fn create_admin(&self, req: &CreateAdminRecord) -> Result<AdminModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let admin = sqlx::query_as::<_, AdminModel>(
            r#"
            INSERT INTO admins (name, email, password, created_at, updated_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING admin_id, name, email, password, is_active, created_at, updated_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(admin)
    }
}
