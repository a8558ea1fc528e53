use crate::model::id::{PortfolioImageId, UserId};

pub mod event;

/// A photographer as shown in the directory: the public profile fields
/// plus the ordered portfolio.
#[derive(Debug, Clone)]
pub struct Photographer {
    pub user_id: UserId,
    pub user_name: String,
    pub short_description: String,
    pub detailed_description: String,
    pub price: String,
    pub is_available: bool,
    pub profile_image_url: Option<String>,
    pub portfolio: Vec<PortfolioImage>,
}

#[derive(Debug, Clone)]
pub struct PortfolioImage {
    pub image_id: PortfolioImageId,
    pub image_url: String,
}

/// Directory listing filter. `user_name` is a case-insensitive substring
/// match; `None` lists every photographer.
#[derive(Debug, Default)]
pub struct PhotographerSearchQuery {
    pub user_name: Option<String>,
}
