use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{BookedClient, Booking, BookingStatus, Contact, HiredPhotographer},
    id::{BookingId, UserId},
};
use shared::error::AppError;
use sqlx::FromRow;
use std::str::FromStr;

fn parse_status(status: &str) -> Result<BookingStatus, AppError> {
    BookingStatus::from_str(status)
        .map_err(|_| AppError::ConversionEntityError(format!("unknown booking status: {status}")))
}

#[derive(FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub client_id: UserId,
    pub photographer_id: UserId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = AppError;

    fn try_from(value: BookingRow) -> Result<Self, Self::Error> {
        let BookingRow {
            booking_id,
            client_id,
            photographer_id,
            status,
            created_at,
            updated_at,
        } = value;
        Ok(Booking {
            booking_id,
            client_id,
            photographer_id,
            status: parse_status(&status)?,
            created_at,
            updated_at,
        })
    }
}

// Hire requests joined with the client's public profile fields, for the
// photographer's dashboard.
#[derive(FromRow)]
pub struct BookedClientRow {
    pub booking_id: BookingId,
    pub client_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub status: String,
}

impl TryFrom<BookedClientRow> for BookedClient {
    type Error = AppError;

    fn try_from(value: BookedClientRow) -> Result<Self, Self::Error> {
        let BookedClientRow {
            booking_id,
            client_id,
            user_name,
            profile_image_url,
            status,
        } = value;
        let status = parse_status(&status)?;
        Ok(BookedClient {
            booking_id,
            client_id,
            user_name,
            profile_image_url,
            confirmed: status == BookingStatus::Confirmed,
        })
    }
}

#[derive(FromRow)]
pub struct HiredPhotographerRow {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
}

impl From<HiredPhotographerRow> for HiredPhotographer {
    fn from(value: HiredPhotographerRow) -> Self {
        let HiredPhotographerRow {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
        } = value;
        HiredPhotographer {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
        }
    }
}

#[derive(FromRow)]
pub struct ContactRow {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub status: String,
}

impl TryFrom<ContactRow> for Contact {
    type Error = AppError;

    fn try_from(value: ContactRow) -> Result<Self, Self::Error> {
        let ContactRow {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
            status,
        } = value;
        Ok(Contact {
            booking_id,
            photographer_id,
            user_name,
            profile_image_url,
            status: parse_status(&status)?,
        })
    }
}
