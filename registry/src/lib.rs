use adapter::{
    database::ConnectionPool,
    redis::RedisClient,
    repository::{
        auth::AuthRepositoryImpl, booking::BookingRepositoryImpl, health::HealthCheckRepositoryImpl,
        message::MessageRepositoryImpl, notification::NotificationRepositoryImpl,
        photographer::PhotographerRepositoryImpl, user::UserRepositoryImpl,
    },
    storage::LocalStorageClient,
};
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, health::HealthCheckRepository,
    message::MessageRepository, notification::NotificationRepository,
    photographer::PhotographerRepository, storage::StorageRepository, user::UserRepository,
};
use shared::config::AppConfig;
use std::sync::Arc;

/// The composition root: every repository is built once here and handed
/// out as a trait object.
#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    photographer_repository: Arc<dyn PhotographerRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    notification_repository: Arc<dyn NotificationRepository>,
    message_repository: Arc<dyn MessageRepository>,
    storage_repository: Arc<dyn StorageRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let photographer_repository = Arc::new(PhotographerRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let notification_repository = Arc::new(NotificationRepositoryImpl::new(pool.clone()));
        let message_repository = Arc::new(MessageRepositoryImpl::new(pool.clone()));
        let storage_repository = Arc::new(LocalStorageClient::new(&app_config.storage));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            photographer_repository,
            booking_repository,
            notification_repository,
            message_repository,
            storage_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn photographer_repository(&self) -> Arc<dyn PhotographerRepository> {
        self.photographer_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn notification_repository(&self) -> Arc<dyn NotificationRepository> {
        self.notification_repository.clone()
    }

    pub fn message_repository(&self) -> Arc<dyn MessageRepository> {
        self.message_repository.clone()
    }

    pub fn storage_repository(&self) -> Arc<dyn StorageRepository> {
        self.storage_repository.clone()
    }
}
