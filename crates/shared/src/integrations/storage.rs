use crate::{abstract_trait::ImageStoreTrait, domain::requests::ImageUpload, errors::ServiceError};
use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::info;
use uuid::Uuid;

pub const PUBLIC_PREFIX: &str = "/uploads/";

/// Stores book covers on the local filesystem and serves them under `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a public `/uploads/<name>` path back to a file inside the upload directory.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, ServiceError> {
        let name = public_path
            .strip_prefix(PUBLIC_PREFIX)
            .ok_or_else(|| ServiceError::Storage(format!("Not an upload path: {public_path}")))?;

        let confined = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\'])
            && !name.contains("..");

        if !confined {
            return Err(ServiceError::Storage(format!(
                "Refusing path outside upload directory: {public_path}"
            )));
        }

        Ok(self.root.join(name))
    }
}

fn unique_name(ext: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    format!("{millis}-{}.{ext}", Uuid::new_v4())
}

#[async_trait]
impl ImageStoreTrait for LocalImageStore {
    async fn save(&self, image: &ImageUpload) -> Result<String, ServiceError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ServiceError::Storage(format!("Failed to create upload dir: {e}")))?;

        let ext = image.extension().ok_or_else(|| {
            ServiceError::Storage(format!("Unsupported image type: {}", image.content_type))
        })?;
        let name = unique_name(ext);

        tokio::fs::write(self.root.join(&name), &image.bytes)
            .await
            .map_err(|e| ServiceError::Storage(format!("Failed to write {name}: {e}")))?;

        info!("🖼️ Stored image {name} ({} bytes)", image.bytes.len());

        Ok(format!("{PUBLIC_PREFIX}{name}"))
    }

    async fn delete(&self, public_path: &str) -> Result<(), ServiceError> {
        let path = self.resolve(public_path)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ServiceError::Storage(format!(
                "Failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> LocalImageStore {
        LocalImageStore::new(std::env::temp_dir().join(format!("uploads-{}", Uuid::new_v4())))
    }

    #[test]
    fn generated_names_do_not_collide() {
        assert_ne!(unique_name("png"), unique_name("png"));
    }

    #[test]
    fn refuses_paths_outside_the_upload_dir() {
        let store = temp_store();

        assert!(store.resolve("/uploads/cover.png").is_ok());
        assert!(store.resolve("/uploads/../secret").is_err());
        assert!(store.resolve("/uploads/a/b.png").is_err());
        assert!(store.resolve("/uploads/").is_err());
        assert!(store.resolve("/etc/passwd").is_err());
    }

    #[tokio::test]
    async fn saves_and_deletes_images() {
        let store = temp_store();

        let path = store
            .save(&ImageUpload {
                file_name: "cover.png".into(),
                content_type: "image/png".into(),
                bytes: vec![1, 2, 3],
            })
            .await
            .unwrap();

        assert!(path.starts_with(PUBLIC_PREFIX));
        assert!(path.ends_with(".png"));

        let on_disk = store.resolve(&path).unwrap();
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), vec![1, 2, 3]);

        store.delete(&path).await.unwrap();
        assert!(!on_disk.exists());

        // deleting twice is fine
        store.delete(&path).await.unwrap();

        let _ = tokio::fs::remove_dir_all(store.root()).await;
    }

    #[tokio::test]
    async fn extension_follows_content_type_not_file_name() {
        let store = temp_store();

        let path = store
            .save(&ImageUpload {
                file_name: "cover.html".into(),
                content_type: "image/jpeg".into(),
                bytes: vec![1],
            })
            .await
            .unwrap();
        assert!(path.ends_with(".jpg"));

        let svg = store
            .save(&ImageUpload {
                file_name: "cover.svg".into(),
                content_type: "image/svg+xml".into(),
                bytes: b"<svg/>".to_vec(),
            })
            .await;
        assert!(matches!(svg, Err(ServiceError::Storage(_))));

        let _ = tokio::fs::remove_dir_all(store.root()).await;
    }
}
