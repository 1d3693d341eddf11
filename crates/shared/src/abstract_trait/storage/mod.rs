use crate::{domain::requests::ImageUpload, errors::ServiceError};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynImageStore = Arc<dyn ImageStoreTrait + Send + Sync>;

#[async_trait]
pub trait ImageStoreTrait {
    /// Persists the image and returns its public path.
    async fn save(&self, image: &ImageUpload) -> Result<String, ServiceError>;
    async fn delete(&self, public_path: &str) -> Result<(), ServiceError>;
}
