use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: env::var("DATABASE_HOST")?,
            port: env::var("DATABASE_PORT")?.parse()?,
            username: env::var("DATABASE_USERNAME")?,
            password: env::var("DATABASE_PASSWORD")?,
            database: env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: env::var("REDIS_HOST")?,
            port: env::var("REDIS_PORT")?.parse()?,
        };
        let auth = AuthConfig {
            ttl: env::var("AUTH_TOKEN_TTL")?.parse()?,
        };
        let storage = StorageConfig {
            root_dir: env::var("STORAGE_ROOT_DIR")?.into(),
            public_base_url: env::var("STORAGE_PUBLIC_BASE_URL")?,
        };
        Ok(Self {
            database,
            redis,
            auth,
            storage,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    /// Access token lifetime in seconds.
    pub ttl: u64,
}

pub struct StorageConfig {
    /// Directory uploaded files are written under.
    pub root_dir: PathBuf,
    /// Base URL the contents of `root_dir` are served from.
    pub public_base_url: String,
}
