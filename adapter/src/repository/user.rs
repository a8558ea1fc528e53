use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        role::Role,
        user::{
            event::{CreateUser, UpdateProfileImage, UpdateUserName},
            User,
        },
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

// The unique indexes on user_name and email are the uniqueness check;
// there is no scan-then-write race to worry about.
fn map_unique_violation(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::UnprocessableEntity("the user name or email address is already taken".into())
        }
        e => AppError::SpecificOperationError(e),
    }
}

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<UserId> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let mut tx = self.db.begin().await?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, password_hash, role)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(map_unique_violation)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        if event.role == Role::Photographer {
            sqlx::query(
                r#"
                    INSERT INTO photographer_profiles
                    (user_id, short_description, detailed_description, price, is_available)
                    VALUES ($1, '', '', '', false)
                "#,
            )
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(user_id)
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, profile_image_url
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update_user_name(&self, event: UpdateUserName) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = $2, updated_at = now()
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&event.user_name)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_unique_violation)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }

    async fn update_profile_image(&self, event: UpdateProfileImage) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET profile_image_url = $2, updated_at = now()
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(&event.profile_image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::redis::RedisClient;
    use crate::repository::auth::AuthRepositoryImpl;
    use kernel::repository::auth::AuthRepository;
    use shared::config::RedisConfig;
    use std::sync::Arc;

    fn auth_repo(pool: sqlx::PgPool) -> AuthRepositoryImpl {
        // The redis client connects lazily; verify_user only needs the db.
        let kv = RedisClient::new(&RedisConfig {
            host: "localhost".into(),
            port: 6379,
        })
        .unwrap();
        AuthRepositoryImpl::new(ConnectionPool::new(pool), Arc::new(kv), 3600)
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn created_credentials_verify_and_round_trip(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));

        let user_id = repo
            .create(CreateUser {
                user_name: "anna".into(),
                email: "anna@example.com".into(),
                password: "hunter2!".into(),
                role: Role::Photographer,
            })
            .await?;

        let user = repo.find_current_user(user_id).await?.unwrap();
        assert_eq!(user.user_name, "anna");
        assert_eq!(user.email, "anna@example.com");
        assert_eq!(user.role, Role::Photographer);
        assert_eq!(user.profile_image_url, None);

        let verified = auth_repo(pool).verify_user("anna@example.com", "hunter2!").await?;
        assert_eq!(verified, user_id);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn wrong_password_is_unauthenticated(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        repo.create(CreateUser {
            user_name: "bob".into(),
            email: "bob@example.com".into(),
            password: "correct".into(),
            role: Role::Client,
        })
        .await?;

        let res = auth_repo(pool).verify_user("bob@example.com", "wrong").await;
        assert!(matches!(res, Err(AppError::UnauthenticatedError)));

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn duplicate_user_name_is_refused(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        repo.create(CreateUser {
            user_name: "anna".into(),
            email: "anna@example.com".into(),
            password: "pw".into(),
            role: Role::Client,
        })
        .await?;

        let res = repo
            .create(CreateUser {
                user_name: "anna".into(),
                email: "other@example.com".into(),
                password: "pw".into(),
                role: Role::Client,
            })
            .await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));

        Ok(())
    }
}
