use crate::database::{
    model::{booking::BookingRow, message::ChatMessageRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        booking::Booking,
        id::{BookingId, MessageId, UserId},
        message::{event::SendMessage, ChatMessage},
    },
    repository::message::MessageRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MessageRepositoryImpl {
    db: ConnectionPool,
}

impl MessageRepositoryImpl {
    async fn find_booking(&self, booking_id: BookingId) -> AppResult<Booking> {
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

        row.map(Booking::try_from).transpose()?.ok_or_else(|| {
            AppError::EntityNotFound(format!("booking ({booking_id}) not found"))
        })
    }
}

fn ensure_party(booking: &Booking, user_id: UserId) -> AppResult<()> {
    if booking.client_id != user_id && booking.photographer_id != user_id {
        return Err(AppError::ForbiddenOperation);
    }
    Ok(())
}

#[async_trait]
impl MessageRepository for MessageRepositoryImpl {
    async fn send(&self, event: SendMessage) -> AppResult<MessageId> {
        let booking = self.find_booking(event.booking_id).await?;
        ensure_party(&booking, event.sender_id)?;
        if !booking.status.is_live() {
            return Err(AppError::UnprocessableEntity(
                "the booking has been rejected".into(),
            ));
        }

        let message_id = MessageId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO chat_messages (message_id, booking_id, sender_id, body, sent_at)
                VALUES ($1, $2, $3, $4, now())
            "#,
        )
        .bind(message_id)
        .bind(event.booking_id)
        .bind(event.sender_id)
        .bind(&event.body)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No chat message record has been created".into(),
            ));
        }

        Ok(message_id)
    }

    async fn find_by_booking_id(
        &self,
        booking_id: BookingId,
        requested_user: UserId,
    ) -> AppResult<Vec<ChatMessage>> {
        let booking = self.find_booking(booking_id).await?;
        ensure_party(&booking, requested_user)?;

        let rows: Vec<ChatMessageRow> = sqlx::query_as(
            r#"
                SELECT message_id, booking_id, sender_id, body, sent_at
                FROM chat_messages
                WHERE booking_id = $1
                ORDER BY sent_at ASC
            "#,
        )
        .bind(booking_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(ChatMessage::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{booking::BookingRepositoryImpl, user::UserRepositoryImpl};
    use kernel::{
        model::{
            booking::event::{ContactPhotographer, RequestHire},
            role::Role,
            user::event::CreateUser,
        },
        repository::{booking::BookingRepository, user::UserRepository},
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
    async fn both_parties_can_chat_but_nobody_else(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let bookings = BookingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let messages = MessageRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let client_id = register(&pool, "carol", Role::Client).await;
        let photographer_id = register(&pool, "anna", Role::Photographer).await;
        let stranger_id = register(&pool, "mallory", Role::Client).await;

        bookings
            .contact(ContactPhotographer::new(client_id, photographer_id))
            .await?;
        let booking_id = bookings
            .request_hire(RequestHire::new(client_id, photographer_id))
            .await?;

        messages
            .send(SendMessage::new(booking_id, client_id, "hi!".into()))
            .await?;
        messages
            .send(SendMessage::new(booking_id, photographer_id, "hello!".into()))
            .await?;

        let res = messages
            .send(SendMessage::new(booking_id, stranger_id, "let me in".into()))
            .await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        let history = messages.find_by_booking_id(booking_id, client_id).await?;
        let bodies: Vec<&str> = history.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["hi!", "hello!"]);

        let res = messages.find_by_booking_id(booking_id, stranger_id).await;
        assert!(matches!(res, Err(AppError::ForbiddenOperation)));

        Ok(())
    }
}
