pub mod event;

/// Opaque session token handed out at login and presented as a Bearer
/// token on every authorized request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
