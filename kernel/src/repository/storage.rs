use async_trait::async_trait;
use shared::error::AppResult;

/// The blob store boundary. Paths are relative keys such as
/// `portfolio/{user_id}/{file_name}`; `upload` returns the public URL
/// the stored object is reachable under.
#[async_trait]
pub trait StorageRepository: Send + Sync {
    async fn upload(&self, path: &str, bytes: Vec<u8>) -> AppResult<String>;
    async fn delete(&self, path: &str) -> AppResult<()>;
    /// Map a public URL issued by `upload` back to its storage path.
    /// `None` for URLs this store did not issue.
    fn object_path(&self, url: &str) -> Option<String>;
}
