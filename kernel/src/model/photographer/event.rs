use crate::model::id::UserId;
use derive_new::new;

/// Partial update of the photographer-only profile fields. `None` leaves
/// the stored value untouched.
#[derive(Debug)]
pub struct UpdatePhotographerProfile {
    pub user_id: UserId,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub price: Option<String>,
    pub is_available: Option<bool>,
}

#[derive(new)]
pub struct AddPortfolioImages {
    pub user_id: UserId,
    pub image_urls: Vec<String>,
}

#[derive(new)]
pub struct RemovePortfolioImage {
    pub user_id: UserId,
    pub image_url: String,
}
