use kernel::model::{
    id::{PortfolioImageId, UserId},
    photographer::{Photographer, PortfolioImage},
};
use sqlx::FromRow;

#[derive(FromRow)]
pub struct PhotographerRow {
    pub user_id: UserId,
    pub user_name: String,
    pub short_description: String,
    pub detailed_description: String,
    pub price: String,
    pub is_available: bool,
    pub profile_image_url: Option<String>,
}

impl PhotographerRow {
    // The portfolio comes from a separate query, so the conversion takes
    // it as an argument instead of implementing From.
    pub fn into_photographer(self, portfolio: Vec<PortfolioImage>) -> Photographer {
        let PhotographerRow {
            user_id,
            user_name,
            short_description,
            detailed_description,
            price,
            is_available,
            profile_image_url,
        } = self;
        Photographer {
            user_id,
            user_name,
            short_description,
            detailed_description,
            price,
            is_available,
            profile_image_url,
            portfolio,
        }
    }
}

#[derive(FromRow)]
pub struct PortfolioImageRow {
    pub image_id: PortfolioImageId,
    pub user_id: UserId,
    pub image_url: String,
}

impl From<PortfolioImageRow> for PortfolioImage {
    fn from(value: PortfolioImageRow) -> Self {
        let PortfolioImageRow {
            image_id,
            user_id: _,
            image_url,
        } = value;
        PortfolioImage {
            image_id,
            image_url,
        }
    }
}
