use crate::{
    abstract_trait::{ActivityServiceTrait, DynActivityRepository},
    domain::{
        requests::NewActivity,
        responses::{ActivityResponse, ApiResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

const RECENT_LIMIT: i64 = 100;

pub struct ActivityService {
    repository: DynActivityRepository,
}

impl ActivityService {
    pub fn new(repository: DynActivityRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ActivityServiceTrait for ActivityService {
    async fn log(&self, req: NewActivity) {
        match self.repository.create(&req).await {
            Ok(activity) => info!(
                "📝 Activity {} recorded: {} on {:?} #{}",
                activity.activity_id, activity.action, activity.entity_type, activity.entity_id
            ),
            Err(e) => error!(
                "❌ Failed to record activity '{}' for admin {}: {e:?}",
                req.action, req.admin_id
            ),
        }
    }

    async fn recent(&self) -> Result<ApiResponse<Vec<ActivityResponse>>, ServiceError> {
        let activities = self.repository.find_recent(RECENT_LIMIT).await?;

        Ok(ApiResponse::success(
            "Activity fetched successfully",
            activities.into_iter().map(ActivityResponse::from).collect(),
        ))
    }
}
