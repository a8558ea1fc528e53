use crate::model::{
    id::UserId,
    photographer::{
        event::{AddPortfolioImages, RemovePortfolioImage, UpdatePhotographerProfile},
        Photographer, PhotographerSearchQuery,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PhotographerRepository: Send + Sync {
    /// Directory listing, optionally filtered by a case-insensitive
    /// substring of the user name.
    async fn find_all(&self, query: PhotographerSearchQuery) -> AppResult<Vec<Photographer>>;
    async fn find_by_id(&self, photographer_id: UserId) -> AppResult<Option<Photographer>>;
    async fn update_profile(&self, event: UpdatePhotographerProfile) -> AppResult<()>;
    async fn add_portfolio_images(&self, event: AddPortfolioImages) -> AppResult<()>;
    /// Removing a URL that is not in the portfolio is a no-op.
    async fn remove_portfolio_image(&self, event: RemovePortfolioImage) -> AppResult<()>;
}
