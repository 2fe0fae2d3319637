//! User identity model

use serde::{Deserialize, Serialize};

/// Fallback avatar initial when no name is known
const FALLBACK_INITIAL: &str = "U";

/// The signed-in identity.
///
/// Nothing here is validated; whatever was stored is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    /// Avatar image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// Create a user without an avatar
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Attach an avatar URL
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// First character of the user's name, or `"U"` when there is none.
#[must_use]
pub fn avatar_initial(user: Option<&User>) -> String {
    user.and_then(|user| user.name.chars().next())
        .map_or_else(|| FALLBACK_INITIAL.to_string(), |c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_avatar_is_optional_in_json() {
        let user: User = serde_json::from_str(r#"{"name":"Ada","email":"ada@example.com"}"#).unwrap();
        assert_eq!(user, User::new("Ada", "ada@example.com"));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_avatar_initial() {
        let user = User::new("john", "john@example.com");
        assert_eq!(avatar_initial(Some(&user)), "j");
        assert_eq!(avatar_initial(Some(&User::new("", "x@example.com"))), "U");
        assert_eq!(avatar_initial(None), "U");
    }
}
