use strum::{AsRefStr, Display, EnumString};

/// Which side of the marketplace a user is on. Assigned at signup and
/// never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Client,
    Photographer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_matches_its_database_representation() {
        assert_eq!(Role::Client.as_ref(), "client");
        assert_eq!(Role::Photographer.as_ref(), "photographer");
        assert_eq!(Role::from_str("photographer").unwrap(), Role::Photographer);
        assert!(Role::from_str("admin").is_err());
    }
}
