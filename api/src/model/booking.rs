use kernel::model::{
    booking::{BookedClient, Contact, HiredPhotographer},
    id::{BookingId, UserId},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedClientResponse {
    pub booking_id: BookingId,
    pub client_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub confirmed: bool,
}

impl From<BookedClient> for BookedClientResponse {
    fn from(value: BookedClient) -> Self {
        let BookedClient {
            booking_id,
            client_id,
            user_name,
            profile_image_url,
            confirmed,
        } = value;
        Self {
            booking_id,
            client_id,
            user_name,
            profile_image_url,
            confirmed,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedClientsResponse {
    pub items: Vec<BookedClientResponse>,
}

impl From<Vec<BookedClient>> for BookedClientsResponse {
    fn from(value: Vec<BookedClient>) -> Self {
        Self {
            items: value.into_iter().map(BookedClientResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiredPhotographerResponse {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
}

impl From<HiredPhotographer> for HiredPhotographerResponse {
    fn from(value: HiredPhotographer) -> Self {
        let HiredPhotographer {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
        } = value;
        Self {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiredPhotographersResponse {
    pub items: Vec<HiredPhotographerResponse>,
}

impl From<Vec<HiredPhotographer>> for HiredPhotographersResponse {
    fn from(value: Vec<HiredPhotographer>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(HiredPhotographerResponse::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub status: String,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        let Contact {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
            status,
        } = value;
        Self {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
            status: status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsResponse {
    pub items: Vec<ContactResponse>,
}

impl From<Vec<Contact>> for ContactsResponse {
    fn from(value: Vec<Contact>) -> Self {
        Self {
            items: value.into_iter().map(ContactResponse::from).collect(),
        }
    }
}
