use crate::database::{
    model::booking::{BookedClientRow, BookingRow, ContactRow, HiredPhotographerRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::{
            event::{
                CancelContact, ConfirmBooking, ContactPhotographer, RejectBooking, RequestHire,
            },
            BookedClient, Booking, BookingAction, BookingStatus, Contact, HiredPhotographer,
        },
        id::{BookingId, NotificationId, UserId},
        role::Role,
    },
    repository::booking::BookingRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn contact(&self, event: ContactPhotographer) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        // The target must exist and actually be a photographer.
        let role: Option<(String,)> = sqlx::query_as("SELECT role FROM users WHERE user_id = $1")
            .bind(event.photographer_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        let Some((role,)) = role else {
            return Err(AppError::EntityNotFound(format!(
                "photographer ({}) not found",
                event.photographer_id
            )));
        };
        if role != Role::Photographer.as_ref() {
            return Err(AppError::UnprocessableEntity(format!(
                "user ({}) is not a photographer",
                event.photographer_id
            )));
        }

        let current = self
            .find_pair_in_tx(&mut tx, event.client_id, event.photographer_id)
            .await?;
        let next = transition(current.as_ref().map(|b| b.status), BookingAction::Contact)?;

        let booking_id = match current {
            None => {
                let booking_id = BookingId::new();
                let res = sqlx::query(
                    r#"
                        INSERT INTO bookings
                        (booking_id, client_id, photographer_id, status, created_at, updated_at)
                        VALUES ($1, $2, $3, $4, now(), now())
                    "#,
                )
                .bind(booking_id)
                .bind(event.client_id)
                .bind(event.photographer_id)
                .bind(next.as_ref())
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

                if res.rows_affected() < 1 {
                    return Err(AppError::NoRowsAffectedError(
                        "No booking record has been created".into(),
                    ));
                }
                booking_id
            }
            // Re-contact of a rejected pair reuses the row.
            Some(booking) => {
                self.update_status(&mut tx, booking.booking_id, next).await?;
                booking.booking_id
            }
        };

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn cancel_contact(&self, event: CancelContact) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let booking = self
            .find_pair_in_tx(&mut tx, event.client_id, event.photographer_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("the pair has no contact".into()))?;

        if !booking.status.can_cancel_contact() {
            return Err(AppError::UnprocessableEntity(format!(
                "a booking that is {} cannot be withdrawn",
                booking.status
            )));
        }

        let res = sqlx::query("DELETE FROM bookings WHERE booking_id = $1")
            .bind(booking.booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn request_hire(&self, event: RequestHire) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let booking = self
            .find_pair_in_tx(&mut tx, event.client_id, event.photographer_id)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity("the photographer has not been contacted".into())
            })?;
        let next = transition(Some(booking.status), BookingAction::Hire)?;

        self.update_status(&mut tx, booking.booking_id, next).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking.booking_id)
    }

    async fn confirm(&self, event: ConfirmBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let booking = self
            .find_by_id_in_tx(&mut tx, event.booking_id)
            .await?;
        if booking.photographer_id != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        let next = transition(Some(booking.status), BookingAction::Confirm)?;
        self.update_status(&mut tx, booking.booking_id, next).await?;

        let photographer_name = self.fetch_user_name(&mut tx, booking.photographer_id).await?;
        self.insert_notification(
            &mut tx,
            booking.client_id,
            booking.booking_id,
            format!("Your hire request was confirmed by {photographer_name}."),
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn reject(&self, event: RejectBooking) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        self.set_transaction_serializable(&mut tx).await?;

        let booking = self
            .find_by_id_in_tx(&mut tx, event.booking_id)
            .await?;
        if booking.photographer_id != event.requested_user {
            return Err(AppError::ForbiddenOperation);
        }

        let next = transition(Some(booking.status), BookingAction::Reject)?;
        self.update_status(&mut tx, booking.booking_id, next).await?;

        // The pair's chat history goes away together with the request.
        sqlx::query("DELETE FROM chat_messages WHERE booking_id = $1")
            .bind(booking.booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let photographer_name = self.fetch_user_name(&mut tx, booking.photographer_id).await?;
        self.insert_notification(
            &mut tx,
            booking.client_id,
            booking.booking_id,
            format!("Your hire request was rejected by {photographer_name}."),
        )
        .await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, client_id, photographer_id, status, created_at, updated_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_booked_clients(&self, photographer_id: UserId) -> AppResult<Vec<BookedClient>> {
        let rows: Vec<BookedClientRow> = sqlx::query_as(
            r#"
                SELECT b.booking_id, b.client_id, u.user_name, u.profile_image_url, b.status
                FROM bookings AS b
                INNER JOIN users AS u ON b.client_id = u.user_id
                WHERE b.photographer_id = $1 AND b.status IN ($2, $3)
                ORDER BY b.created_at ASC
            "#,
        )
        .bind(photographer_id)
        .bind(BookingStatus::HireRequested.as_ref())
        .bind(BookingStatus::Confirmed.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(BookedClient::try_from).collect()
    }

    async fn find_hired_photographers(
        &self,
        client_id: UserId,
    ) -> AppResult<Vec<HiredPhotographer>> {
        let rows: Vec<HiredPhotographerRow> = sqlx::query_as(
            r#"
                SELECT b.booking_id, b.photographer_id, u.user_name, u.profile_image_url
                FROM bookings AS b
                INNER JOIN users AS u ON b.photographer_id = u.user_id
                WHERE b.client_id = $1 AND b.status = $2
                ORDER BY b.updated_at DESC
            "#,
        )
        .bind(client_id)
        .bind(BookingStatus::Confirmed.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(HiredPhotographer::from).collect())
    }

    async fn find_contacts(&self, client_id: UserId) -> AppResult<Vec<Contact>> {
        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
                SELECT b.booking_id, b.photographer_id, u.user_name, u.profile_image_url, b.status
                FROM bookings AS b
                INNER JOIN users AS u ON b.photographer_id = u.user_id
                WHERE b.client_id = $1 AND b.status <> $2
                ORDER BY b.created_at ASC
            "#,
        )
        .bind(client_id)
        .bind(BookingStatus::Rejected.as_ref())
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Contact::try_from).collect()
    }
}

fn transition(
    current: Option<BookingStatus>,
    action: BookingAction,
) -> AppResult<BookingStatus> {
    BookingStatus::transition(current, action)
        .map_err(|e| AppError::UnprocessableEntity(e.to_string()))
}

impl BookingRepositoryImpl {
    // The precondition reads and the writes they guard must observe a
    // consistent snapshot.
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    async fn find_pair_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        client_id: UserId,
        photographer_id: UserId,
    ) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, client_id, photographer_id, status, created_at, updated_at
                FROM bookings
                WHERE client_id = $1 AND photographer_id = $2
            "#,
        )
        .bind(client_id)
        .bind(photographer_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()
    }

    async fn find_by_id_in_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking_id: BookingId,
    ) -> AppResult<Booking> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT booking_id, client_id, photographer_id, status, created_at, updated_at
                FROM bookings
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Booking::try_from).transpose()?.ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({booking_id}) not found"))
        })
    }

    async fn update_status(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        booking_id: BookingId,
        next: BookingStatus,
    ) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET status = $2, updated_at = now()
                WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .bind(next.as_ref())
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        Ok(())
    }

    async fn fetch_user_name(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
    ) -> AppResult<String> {
        let (user_name,): (String,) =
            sqlx::query_as("SELECT user_name FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&mut **tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        Ok(user_name)
    }

    async fn insert_notification(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
        booking_id: BookingId,
        message: String,
    ) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                INSERT INTO notifications
                (notification_id, user_id, booking_id, message, created_at)
                VALUES ($1, $2, $3, $4, now())
            "#,
        )
        .bind(NotificationId::new())
        .bind(user_id)
        .bind(booking_id)
        .bind(message)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No notification record has been created".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        message::MessageRepositoryImpl, notification::NotificationRepositoryImpl,
        user::UserRepositoryImpl,
    };
    use kernel::{
        model::{message::event::SendMessage, role::Role, user::event::CreateUser},
        repository::{
            message::MessageRepository, notification::NotificationRepository,
            user::UserRepository,
        },
    };

    async fn register(pool: &sqlx::PgPool, user_name: &str, role: Role) -> UserId {
        UserRepositoryImpl::new(ConnectionPool::new(pool.clone()))
            .create(CreateUser {
                user_name: user_name.into(),
                email: format!("{user_name}@example.com"),
                password: "pw".into(),
                role,
            })
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn confirm_flow_books_the_client_and_notifies_exactly_once(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;

        repo.contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        let booking_id = repo
            .request_hire(RequestHire::new(client_id, photographer_id))
            .await?;
        repo.confirm(ConfirmBooking::new(booking_id, photographer_id))
            .await?;

        let booked = repo.find_booked_clients(photographer_id).await?;
        assert_eq!(booked.len(), 1);
        assert_eq!(booked[0].client_id, client_id);
        assert!(booked[0].confirmed);

        let hired = repo.find_hired_photographers(client_id).await?;
        assert_eq!(hired.len(), 1);
        assert_eq!(hired[0].photographer_id, photographer_id);

        let notifications = NotificationRepositoryImpl::new(ConnectionPool::new(pool))
            .find_all_by_user_id(client_id)
            .await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Your hire request was confirmed by anna."
        );
        assert_eq!(notifications[0].booking_id, Some(booking_id));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn reject_flow_clears_the_pair_and_its_chat(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let messages = MessageRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;

        repo.contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        let booking_id = repo
            .request_hire(RequestHire::new(client_id, photographer_id))
            .await?;
        messages
            .send(SendMessage::new(booking_id, client_id, "hello!".into()))
            .await?;

        repo.reject(RejectBooking::new(booking_id, photographer_id))
            .await?;

        assert!(repo.find_booked_clients(photographer_id).await?.is_empty());
        assert!(repo.find_hired_photographers(client_id).await?.is_empty());

        let remaining: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM chat_messages WHERE booking_id = $1")
                .bind(booking_id)
                .fetch_one(&pool)
                .await?;
        assert_eq!(remaining.0, 0);

        let notifications = NotificationRepositoryImpl::new(ConnectionPool::new(pool))
            .find_all_by_user_id(client_id)
            .await?;
        assert_eq!(notifications.len(), 1);
        assert_eq!(
            notifications[0].message,
            "Your hire request was rejected by anna."
        );

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn rejected_pair_can_be_contacted_again(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;

        let first = repo
            .contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        repo.request_hire(RequestHire::new(client_id, photographer_id))
            .await?;
        repo.reject(RejectBooking::new(first, photographer_id)).await?;

        let second = repo
            .contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        assert_eq!(first, second);

        let contacts = repo.find_contacts(client_id).await?;
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].status, BookingStatus::Contacted);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn invalid_transitions_are_refused(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;

        // Hire before contact.
        let res = repo
            .request_hire(RequestHire::new(client_id, photographer_id))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        let booking_id = repo
            .contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;

        // Double contact.
        let res = repo
            .contact(ContactPhotographer::new(client_id, photographer_id))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // Confirm before hire.
        let res = repo.confirm(ConfirmBooking::new(booking_id, photographer_id)).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        repo.request_hire(RequestHire::new(client_id, photographer_id))
            .await?;

        // A hire request can no longer be withdrawn by the client.
        let res = repo
            .cancel_contact(CancelContact::new(client_id, photographer_id))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        // Only the pair's photographer may confirm.
        let other = register(&pool, "mallory", Role::Photographer).await;
        let res = repo.confirm(ConfirmBooking::new(booking_id, other)).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_plain_contact_can_be_withdrawn(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;

        repo.contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        repo.cancel_contact(CancelContact::new(client_id, photographer_id))
            .await?;

        assert!(repo.find_contacts(client_id).await?.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn contacting_a_client_is_refused(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let other_client = register(&pool, "dave", Role::Client).await;

        let res = repo
            .contact(ContactPhotographer::new(client_id, other_client))
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }
}
