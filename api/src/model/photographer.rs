use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    photographer::{
        event::{RemovePortfolioImage, UpdatePhotographerProfile},
        Photographer, PhotographerSearchQuery,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerListQuery {
    pub user_name: Option<String>,
}

impl From<PhotographerListQuery> for PhotographerSearchQuery {
    fn from(value: PhotographerListQuery) -> Self {
        Self {
            user_name: value.user_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographerResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub short_description: String,
    pub detailed_description: String,
    pub price: String,
    pub is_available: bool,
    pub profile_image_url: Option<String>,
    pub portfolio_images: Vec<String>,
}

impl From<Photographer> for PhotographerResponse {
    fn from(value: Photographer) -> Self {
        let Photographer {
            user_id,
            user_name,
            short_description,
            detailed_description,
            price,
            is_available,
            profile_image_url,
            portfolio,
        } = value;
        Self {
            user_id,
            user_name,
            short_description,
            detailed_description,
            price,
            is_available,
            profile_image_url,
            portfolio_images: portfolio.into_iter().map(|image| image.image_url).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotographersResponse {
    pub items: Vec<PhotographerResponse>,
}

impl From<Vec<Photographer>> for PhotographersResponse {
    fn from(value: Vec<Photographer>) -> Self {
        Self {
            items: value.into_iter().map(PhotographerResponse::from).collect(),
        }
    }
}

/// Every field is optional so the dashboard can save a single field
/// without resending the rest.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotographerProfileRequest {
    #[garde(skip)]
    pub short_description: Option<String>,
    #[garde(skip)]
    pub detailed_description: Option<String>,
    #[garde(skip)]
    pub price: Option<String>,
    #[garde(skip)]
    pub is_available: Option<bool>,
}

#[derive(new)]
pub struct UpdatePhotographerProfileRequestWithUserId(UserId, UpdatePhotographerProfileRequest);

impl From<UpdatePhotographerProfileRequestWithUserId> for UpdatePhotographerProfile {
    fn from(value: UpdatePhotographerProfileRequestWithUserId) -> Self {
        let UpdatePhotographerProfileRequestWithUserId(user_id, request) = value;
        Self {
            user_id,
            short_description: request.short_description,
            detailed_description: request.detailed_description,
            price: request.price,
            is_available: request.is_available,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RemovePortfolioImageRequest {
    #[garde(length(min = 1))]
    pub image_url: String,
}

#[derive(new)]
pub struct RemovePortfolioImageRequestWithUserId(UserId, RemovePortfolioImageRequest);

impl From<RemovePortfolioImageRequestWithUserId> for RemovePortfolioImage {
    fn from(value: RemovePortfolioImageRequestWithUserId) -> Self {
        let RemovePortfolioImageRequestWithUserId(user_id, request) = value;
        Self {
            user_id,
            image_url: request.image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImagesResponse {
    pub image_urls: Vec<String>,
}
