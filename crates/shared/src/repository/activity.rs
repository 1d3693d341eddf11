use crate::{
    abstract_trait::ActivityRepositoryTrait, config::ConnectionPool,
    domain::requests::NewActivity, errors::RepositoryError, model::Activity as ActivityModel,
};
use async_trait::async_trait;

pub struct ActivityRepository {
    db: ConnectionPool,
}

impl ActivityRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepositoryTrait for ActivityRepository {
    async fn create(&self, req: &NewActivity) -> Result<ActivityModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let activity = sqlx::query_as::<_, ActivityModel>(
            r#"
            INSERT INTO activities (admin_id, entity_type, entity_id, action, details, created_at)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP)
            RETURNING activity_id, admin_id, entity_type, entity_id, action, details, created_at
            "#,
        )
        .bind(req.admin_id)
        .bind(req.entity_type)
        .bind(req.entity_id)
        .bind(&req.action)
        .bind(&req.details)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(activity)
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<ActivityModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let activities = sqlx::query_as::<_, ActivityModel>(
            r#"
            SELECT activity_id, admin_id, entity_type, entity_id, action, details, created_at
            FROM activities
            ORDER BY created_at DESC, activity_id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(activities)
    }
}
