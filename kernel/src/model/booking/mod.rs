use crate::model::id::{BookingId, UserId};
use chrono::{DateTime, Utc};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

pub mod event;

/// One (client, photographer) pair and where it stands in the hire flow.
/// "Uncontacted" has no row at all; a `Rejected` row is kept so the pair
/// history survives, but behaves like an uncontacted pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub client_id: UserId,
    pub photographer_id: UserId,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum BookingStatus {
    Contacted,
    HireRequested,
    Confirmed,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BookingAction {
    Contact,
    Hire,
    Confirm,
    Reject,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot {action} a booking that is {from:?}")]
    InvalidTransition {
        from: Option<BookingStatus>,
        action: BookingAction,
    },
}

impl BookingStatus {
    /// The single place booking transitions are decided. `current` is
    /// `None` for a pair without a booking record.
    ///
    /// Contact      : Uncontacted | Rejected -> Contacted
    /// Hire         : Contacted              -> HireRequested
    /// Confirm      : HireRequested          -> Confirmed (terminal)
    /// Reject       : HireRequested          -> Rejected
    pub fn transition(
        current: Option<BookingStatus>,
        action: BookingAction,
    ) -> Result<BookingStatus, TransitionError> {
        use BookingAction::*;
        use BookingStatus::*;

        match (current, action) {
            (None | Some(Rejected), Contact) => Ok(Contacted),
            (Some(Contacted), Hire) => Ok(HireRequested),
            (Some(HireRequested), Confirm) => Ok(Confirmed),
            (Some(HireRequested), Reject) => Ok(Rejected),
            (from, action) => Err(TransitionError::InvalidTransition { from, action }),
        }
    }

    /// A contact may only be withdrawn before a hire request is made.
    pub fn can_cancel_contact(self) -> bool {
        self == BookingStatus::Contacted
    }

    /// Whether the pair may still exchange chat messages.
    pub fn is_live(self) -> bool {
        self != BookingStatus::Rejected
    }
}

/// A pending or confirmed hire request as seen from the photographer's
/// dashboard.
#[derive(Debug, Clone)]
pub struct BookedClient {
    pub booking_id: BookingId,
    pub client_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub confirmed: bool,
}

/// A confirmed booking as seen from the client's dashboard.
#[derive(Debug, Clone)]
pub struct HiredPhotographer {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
}

/// A photographer the client has reached out to, regardless of how far
/// the pair has progressed.
#[derive(Debug, Clone)]
pub struct Contact {
    pub booking_id: BookingId,
    pub photographer_id: UserId,
    pub user_name: String,
    pub profile_image_url: Option<String>,
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::BookingAction::*;
    use super::BookingStatus::*;
    use super::*;

    #[test]
    fn contact_is_allowed_for_fresh_and_rejected_pairs() {
        assert_eq!(BookingStatus::transition(None, Contact), Ok(Contacted));
        assert_eq!(
            BookingStatus::transition(Some(Rejected), Contact),
            Ok(Contacted)
        );
    }

    #[test]
    fn contact_is_refused_for_active_pairs() {
        for status in [Contacted, HireRequested, Confirmed] {
            assert_eq!(
                BookingStatus::transition(Some(status), Contact),
                Err(TransitionError::InvalidTransition {
                    from: Some(status),
                    action: Contact,
                })
            );
        }
    }

    #[test]
    fn hire_follows_contact_and_nothing_else() {
        assert_eq!(
            BookingStatus::transition(Some(Contacted), Hire),
            Ok(HireRequested)
        );
        assert!(BookingStatus::transition(None, Hire).is_err());
        assert!(BookingStatus::transition(Some(Confirmed), Hire).is_err());
        assert!(BookingStatus::transition(Some(Rejected), Hire).is_err());
    }

    #[test]
    fn confirm_and_reject_require_a_pending_hire_request() {
        assert_eq!(
            BookingStatus::transition(Some(HireRequested), Confirm),
            Ok(Confirmed)
        );
        assert_eq!(
            BookingStatus::transition(Some(HireRequested), Reject),
            Ok(Rejected)
        );
        assert!(BookingStatus::transition(Some(Contacted), Confirm).is_err());
        assert!(BookingStatus::transition(Some(Contacted), Reject).is_err());
    }

    #[test]
    fn confirmed_is_terminal() {
        for action in [Contact, Hire, Confirm, Reject] {
            assert!(BookingStatus::transition(Some(Confirmed), action).is_err());
        }
    }

    #[test]
    fn full_hire_flow_reaches_confirmed() {
        let status = BookingStatus::transition(None, Contact).unwrap();
        let status = BookingStatus::transition(Some(status), Hire).unwrap();
        let status = BookingStatus::transition(Some(status), Confirm).unwrap();
        assert_eq!(status, Confirmed);
    }

    #[test]
    fn rejected_pair_can_start_over() {
        let status = BookingStatus::transition(None, Contact).unwrap();
        let status = BookingStatus::transition(Some(status), Hire).unwrap();
        let status = BookingStatus::transition(Some(status), Reject).unwrap();
        assert_eq!(status, Rejected);
        assert_eq!(
            BookingStatus::transition(Some(status), Contact),
            Ok(Contacted)
        );
    }

    #[test]
    fn only_a_plain_contact_can_be_withdrawn() {
        assert!(Contacted.can_cancel_contact());
        assert!(!HireRequested.can_cancel_contact());
        assert!(!Confirmed.can_cancel_contact());
        assert!(!Rejected.can_cancel_contact());
    }

    #[test]
    fn chat_stops_once_a_pair_is_rejected() {
        assert!(Contacted.is_live());
        assert!(HireRequested.is_live());
        assert!(Confirmed.is_live());
        assert!(!Rejected.is_live());
    }

    #[test]
    fn status_matches_its_database_representation() {
        use std::str::FromStr;
        assert_eq!(HireRequested.as_ref(), "hire_requested");
        assert_eq!(
            BookingStatus::from_str("hire_requested").unwrap(),
            HireRequested
        );
        assert!(BookingStatus::from_str("pending").is_err());
    }
}
