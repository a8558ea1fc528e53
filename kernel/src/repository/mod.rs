pub mod auth;
pub mod booking;
pub mod health;
pub mod message;
pub mod notification;
pub mod photographer;
pub mod storage;
pub mod user;
