use crate::database::{
    model::photographer::{PhotographerRow, PortfolioImageRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        photographer::{
            event::{AddPortfolioImages, RemovePortfolioImage, UpdatePhotographerProfile},
            Photographer, PhotographerSearchQuery, PortfolioImage,
        },
    },
    repository::photographer::PhotographerRepository,
};
use shared::error::{AppError, AppResult};
use std::collections::HashMap;

const PHOTOGRAPHER_COLUMNS: &str = r#"
    u.user_id,
    u.user_name,
    p.short_description,
    p.detailed_description,
    p.price,
    p.is_available,
    u.profile_image_url
"#;

// User input is a plain substring, not a pattern.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[derive(new)]
pub struct PhotographerRepositoryImpl {
    db: ConnectionPool,
}

impl PhotographerRepositoryImpl {
    async fn load_portfolios(
        &self,
        user_ids: &[UserId],
    ) -> AppResult<HashMap<UserId, Vec<PortfolioImage>>> {
        let raw_ids: Vec<uuid::Uuid> = user_ids.iter().map(|id| id.raw()).collect();
        let rows: Vec<PortfolioImageRow> = sqlx::query_as(
            r#"
                SELECT image_id, user_id, image_url
                FROM portfolio_images
                WHERE user_id = ANY($1)
                ORDER BY position ASC
            "#,
        )
        .bind(&raw_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let mut portfolios: HashMap<UserId, Vec<PortfolioImage>> = HashMap::new();
        for row in rows {
            portfolios
                .entry(row.user_id)
                .or_default()
                .push(PortfolioImage::from(row));
        }
        Ok(portfolios)
    }
}

#[async_trait]
impl PhotographerRepository for PhotographerRepositoryImpl {
    async fn find_all(&self, query: PhotographerSearchQuery) -> AppResult<Vec<Photographer>> {
        let rows: Vec<PhotographerRow> = match query.user_name {
            Some(ref user_name) => {
                sqlx::query_as(&format!(
                    r#"
                        SELECT {PHOTOGRAPHER_COLUMNS}
                        FROM users AS u
                        INNER JOIN photographer_profiles AS p ON u.user_id = p.user_id
                        WHERE u.user_name ILIKE $1
                        ORDER BY u.created_at ASC
                    "#
                ))
                .bind(format!("%{}%", escape_like(user_name)))
                .fetch_all(self.db.inner_ref())
                .await
            }
            None => {
                sqlx::query_as(&format!(
                    r#"
                        SELECT {PHOTOGRAPHER_COLUMNS}
                        FROM users AS u
                        INNER JOIN photographer_profiles AS p ON u.user_id = p.user_id
                        ORDER BY u.created_at ASC
                    "#
                ))
                .fetch_all(self.db.inner_ref())
                .await
            }
        }
        .map_err(AppError::SpecificOperationError)?;

        let user_ids: Vec<UserId> = rows.iter().map(|row| row.user_id).collect();
        let mut portfolios = self.load_portfolios(&user_ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let portfolio = portfolios.remove(&row.user_id).unwrap_or_default();
                row.into_photographer(portfolio)
            })
            .collect())
    }

    async fn find_by_id(&self, photographer_id: UserId) -> AppResult<Option<Photographer>> {
        let row: Option<PhotographerRow> = sqlx::query_as(&format!(
            r#"
                SELECT {PHOTOGRAPHER_COLUMNS}
                FROM users AS u
                INNER JOIN photographer_profiles AS p ON u.user_id = p.user_id
                WHERE u.user_id = $1
            "#
        ))
        .bind(photographer_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut portfolios = self.load_portfolios(&[photographer_id]).await?;
        let portfolio = portfolios.remove(&photographer_id).unwrap_or_default();
        Ok(Some(row.into_photographer(portfolio)))
    }

    async fn update_profile(&self, event: UpdatePhotographerProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE photographer_profiles
                SET
                    short_description = COALESCE($2, short_description),
                    detailed_description = COALESCE($3, detailed_description),
                    price = COALESCE($4, price),
                    is_available = COALESCE($5, is_available)
                WHERE user_id = $1
            "#,
        )
        .bind(event.user_id)
        .bind(event.short_description)
        .bind(event.detailed_description)
        .bind(event.price)
        .bind(event.is_available)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "specified photographer not found".into(),
            ));
        }

        Ok(())
    }

    async fn add_portfolio_images(&self, event: AddPortfolioImages) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let (max_position,): (Option<i32>,) =
            sqlx::query_as("SELECT MAX(position) FROM portfolio_images WHERE user_id = $1")
                .bind(event.user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;

        let mut position = max_position.unwrap_or(-1);
        for image_url in &event.image_urls {
            position += 1;
            sqlx::query(
                r#"
                    INSERT INTO portfolio_images (image_id, user_id, image_url, position)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (user_id, image_url) DO NOTHING
                "#,
            )
            .bind(kernel::model::id::PortfolioImageId::new())
            .bind(event.user_id)
            .bind(image_url)
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn remove_portfolio_image(&self, event: RemovePortfolioImage) -> AppResult<()> {
        // Zero rows affected is fine: removing an absent URL is a no-op.
        sqlx::query("DELETE FROM portfolio_images WHERE user_id = $1 AND image_url = $2")
            .bind(event.user_id)
            .bind(&event.image_url)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::user::UserRepositoryImpl;
    use kernel::{
        model::{role::Role, user::event::CreateUser},
        repository::user::UserRepository,
    };

    async fn register_photographer(pool: &sqlx::PgPool, user_name: &str) -> UserId {
        UserRepositoryImpl::new(ConnectionPool::new(pool.clone()))
            .create(CreateUser {
                user_name: user_name.into(),
                email: format!("{user_name}@example.com"),
                password: "pw".into(),
                role: Role::Photographer,
            })
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn search_matches_user_name_substrings_case_insensitively(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = PhotographerRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        for name in ["Anna", "Bob", "Annette"] {
            register_photographer(&pool, name).await;
        }

        let res = repo
            .find_all(PhotographerSearchQuery {
                user_name: Some("ann".into()),
            })
            .await?;
        let names: Vec<&str> = res.iter().map(|p| p.user_name.as_str()).collect();
        assert_eq!(names, vec!["Anna", "Annette"]);

        let res = repo.find_all(PhotographerSearchQuery::default()).await?;
        assert_eq!(res.len(), 3);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn like_wildcards_in_the_query_are_literal(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PhotographerRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        register_photographer(&pool, "Anna").await;

        let res = repo
            .find_all(PhotographerSearchQuery {
                user_name: Some("%".into()),
            })
            .await?;
        assert!(res.is_empty());

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn portfolio_is_ordered_and_removal_is_idempotent(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = PhotographerRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let photographer_id = register_photographer(&pool, "Anna").await;

        repo.add_portfolio_images(AddPortfolioImages::new(
            photographer_id,
            vec!["http://blob/a.jpg".into(), "http://blob/b.jpg".into()],
        ))
        .await?;
        repo.add_portfolio_images(AddPortfolioImages::new(
            photographer_id,
            vec!["http://blob/c.jpg".into()],
        ))
        .await?;

        let photographer = repo.find_by_id(photographer_id).await?.unwrap();
        let urls: Vec<&str> = photographer
            .portfolio
            .iter()
            .map(|i| i.image_url.as_str())
            .collect();
        assert_eq!(
            urls,
            vec!["http://blob/a.jpg", "http://blob/b.jpg", "http://blob/c.jpg"]
        );

        repo.remove_portfolio_image(RemovePortfolioImage::new(
            photographer_id,
            "http://blob/b.jpg".into(),
        ))
        .await?;
        // Removing the same URL again must not fail.
        repo.remove_portfolio_image(RemovePortfolioImage::new(
            photographer_id,
            "http://blob/b.jpg".into(),
        ))
        .await?;

        let photographer = repo.find_by_id(photographer_id).await?.unwrap();
        assert_eq!(photographer.portfolio.len(), 2);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn profile_update_is_partial(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = PhotographerRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let photographer_id = register_photographer(&pool, "Anna").await;

        repo.update_profile(UpdatePhotographerProfile {
            user_id: photographer_id,
            short_description: Some("weddings".into()),
            detailed_description: None,
            price: Some("120".into()),
            is_available: Some(true),
        })
        .await?;
        repo.update_profile(UpdatePhotographerProfile {
            user_id: photographer_id,
            short_description: None,
            detailed_description: Some("ten years of weddings".into()),
            price: None,
            is_available: None,
        })
        .await?;

        let photographer = repo.find_by_id(photographer_id).await?.unwrap();
        assert_eq!(photographer.short_description, "weddings");
        assert_eq!(photographer.detailed_description, "ten years of weddings");
        assert_eq!(photographer.price, "120");
        assert!(photographer.is_available);

        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn availability_surfaces_through_the_directory_listing(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = PhotographerRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let available_id = register_photographer(&pool, "Anna").await;
        register_photographer(&pool, "Bob").await;

        repo.update_profile(UpdatePhotographerProfile {
            user_id: available_id,
            short_description: None,
            detailed_description: None,
            price: None,
            is_available: Some(true),
        })
        .await?;

        let listing = repo.find_all(PhotographerSearchQuery::default()).await?;
        let flags: Vec<(&str, bool)> = listing
            .iter()
            .map(|p| (p.user_name.as_str(), p.is_available))
            .collect();
        assert_eq!(flags, vec![("Anna", true), ("Bob", false)]);

        Ok(())
    }
}
