use async_trait::async_trait;
use kernel::repository::storage::StorageRepository;
use shared::{
    config::StorageConfig,
    error::{AppError, AppResult},
};
use std::path::{Component, Path, PathBuf};

/// Filesystem-backed blob store. Objects live under `root_dir` and are
/// served by something else (reverse proxy, CDN) under
/// `public_base_url`.
pub struct LocalStorageClient {
    root_dir: PathBuf,
    public_base_url: String,
}

impl LocalStorageClient {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            root_dir: config.root_dir.clone(),
            public_base_url: config.public_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let relative = Path::new(path);
        let traversal = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)));
        if traversal || path.is_empty() {
            return Err(AppError::UnprocessableEntity(format!(
                "invalid storage path: {path}"
            )));
        }
        Ok(self.root_dir.join(relative))
    }
}

#[async_trait]
impl StorageRepository for LocalStorageClient {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> AppResult<String> {
        let target = self.resolve(path)?;
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::StorageOperationError)?;
        }
        tokio::fs::write(&target, bytes)
            .await
            .map_err(AppError::StorageOperationError)?;
        Ok(format!("{}/{}", self.public_base_url, path))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let target = self.resolve(path)?;
        tokio::fs::remove_file(&target)
            .await
            .map_err(AppError::StorageOperationError)?;
        Ok(())
    }

    fn object_path(&self, url: &str) -> Option<String> {
        url.strip_prefix(&self.public_base_url)
            .map(|rest| rest.trim_start_matches('/').to_string())
            .filter(|rest| !rest.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::StorageConfig;

    fn client() -> LocalStorageClient {
        LocalStorageClient::new(&StorageConfig {
            root_dir: std::env::temp_dir().join("lenslot-storage-test"),
            public_base_url: "http://localhost:8080/media/".into(),
        })
    }

    #[tokio::test]
    async fn upload_returns_the_public_url_and_delete_removes_the_file() {
        let client = client();
        let path = format!("portfolio/{}/shot.jpg", uuid::Uuid::new_v4());

        let url = client.upload(&path, b"not really a jpeg".to_vec()).await.unwrap();
        assert_eq!(url, format!("http://localhost:8080/media/{path}"));
        assert_eq!(client.object_path(&url), Some(path.clone()));

        client.delete(&path).await.unwrap();
        assert!(client.delete(&path).await.is_err());
    }

    #[tokio::test]
    async fn traversal_paths_are_rejected() {
        let client = client();
        assert!(client.upload("../escape.jpg", vec![]).await.is_err());
        assert!(client.delete("/etc/passwd").await.is_err());
    }

    #[test]
    fn foreign_urls_do_not_map_to_a_path() {
        let client = client();
        assert_eq!(client.object_path("https://elsewhere.example/cat.png"), None);
        assert_eq!(client.object_path("http://localhost:8080/media/"), None);
    }
}
