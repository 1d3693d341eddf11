use crate::{
    abstract_trait::{
        BookCommandServiceTrait, DynActivityService, DynBookCommandRepository,
        DynBookQueryRepository, DynImageStore,
    },
    domain::{
        requests::{CreateBookRequest, ImageUpload, NewActivity},
        responses::{AdminResponse, ApiResponse, BookResponse},
    },
    errors::ServiceError,
    model::EntityType,
};
use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};
use validator::Validate;

pub struct BookCommandService {
    query: DynBookQueryRepository,
    command: DynBookCommandRepository,
    images: DynImageStore,
    activity: DynActivityService,
}

pub struct BookCommandServiceDeps {
    pub query: DynBookQueryRepository,
    pub command: DynBookCommandRepository,
    pub images: DynImageStore,
    pub activity: DynActivityService,
}

impl BookCommandService {
    pub fn new(deps: BookCommandServiceDeps) -> Self {
        Self {
            query: deps.query,
            command: deps.command,
            images: deps.images,
            activity: deps.activity,
        }
    }

    async fn discard_image(&self, path: &str) {
        if let Err(e) = self.images.delete(path).await {
            warn!("⚠️ Failed to delete image {path}: {e}");
        }
    }
}

#[async_trait]
impl BookCommandServiceTrait for BookCommandService {
    async fn create_book(
        &self,
        admin: &AdminResponse,
        req: &CreateBookRequest,
        image: Option<ImageUpload>,
    ) -> Result<ApiResponse<BookResponse>, ServiceError> {
        info!("📚 Creating book '{}' by admin {}", req.title, admin.email);

        req.validate()?;

        let image_path = match image {
            Some(upload) => {
                if upload.extension().is_none() {
                    return Err(ServiceError::BadRequest(
                        "Only PNG, JPEG, WebP or GIF images are allowed".to_string(),
                    ));
                }
                Some(self.images.save(&upload).await?)
            }
            None => None,
        };

        let book = match self.command.create_book(req, image_path.as_deref()).await {
            Ok(book) => book,
            Err(e) => {
                error!("❌ Failed to create book '{}': {e:?}", req.title);
                if let Some(path) = image_path.as_deref() {
                    self.discard_image(path).await;
                }
                return Err(ServiceError::Repo(e));
            }
        };

        self.activity
            .log(NewActivity {
                admin_id: admin.id,
                action: "CREATED BOOK".to_string(),
                entity_type: EntityType::Book,
                entity_id: book.book_id,
                details: json!({
                    "title": book.title,
                    "author": book.author,
                    "adminName": admin.name,
                    "adminEmail": admin.email,
                }),
            })
            .await;

        info!("✅ Book created: {} (ID: {})", book.title, book.book_id);

        Ok(ApiResponse::success(
            "Book created successfully",
            BookResponse::from(book),
        ))
    }

    async fn delete_book(
        &self,
        admin: &AdminResponse,
        id: i32,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let book = self
            .query
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Book not found".to_string()))?;

        self.command.delete_book(id).await.map_err(|e| {
            error!("❌ Failed to delete book {id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        if let Some(path) = book.image.as_deref() {
            self.discard_image(path).await;
        }

        self.activity
            .log(NewActivity {
                admin_id: admin.id,
                action: "DELETED BOOK".to_string(),
                entity_type: EntityType::Book,
                entity_id: book.book_id,
                details: json!({
                    "title": book.title,
                    "author": book.author,
                    "adminName": admin.name,
                    "adminEmail": admin.email,
                }),
            })
            .await;

        info!("🗑️ Book deleted: {} (ID: {id})", book.title);

        Ok(ApiResponse::success("Book deleted successfully", ()))
    }
}
