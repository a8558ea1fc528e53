pub mod auth;
pub mod booking;
pub mod id;
pub mod message;
pub mod notification;
pub mod photographer;
pub mod role;
pub mod user;
