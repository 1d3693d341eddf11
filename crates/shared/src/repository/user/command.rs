use super::USER_COLUMNS;
use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateUserRecord, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRecord) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO users (name, email, password, firebase_uid, created_at, updated_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING {USER_COLUMNS}
            "#
        );

        let user = sqlx::query_as::<_, UserModel>(&sql)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.password)
            .bind(&req.firebase_uid)
            .fetch_one(&mut *conn)
            .await
            .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
