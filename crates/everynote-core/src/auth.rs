//! Mock sign-in providers.
//!
//! There is no identity backend. Google sign-in fabricates a fixed demo
//! user; Apple sign-in is not available yet.

use std::fmt;

use thiserror::Error;

use crate::models::User;

const DEMO_NAME: &str = "John Doe";
const DEMO_EMAIL: &str = "john.doe@gmail.com";
const DEMO_AVATAR: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face";

/// Sign-in buttons offered on the login screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginProvider {
    Google,
    Apple,
}

impl LoginProvider {
    /// Button caption
    #[must_use]
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Google => "Log In with Google",
            Self::Apple => "Log In with Apple",
        }
    }
}

impl fmt::Display for LoginProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Google => f.write_str("Google"),
            Self::Apple => f.write_str("Apple"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("{0} login coming soon!")]
    NotImplemented(LoginProvider),
    #[error(transparent)]
    Storage(#[from] crate::error::Error),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// The fixed identity produced by the mock Google sign-in
#[must_use]
pub fn demo_user() -> User {
    User::new(DEMO_NAME, DEMO_EMAIL).with_avatar(DEMO_AVATAR)
}

/// Resolve the identity a provider signs in as.
pub fn sign_in(provider: LoginProvider) -> AuthResult<User> {
    match provider {
        LoginProvider::Google => Ok(demo_user()),
        LoginProvider::Apple => Err(AuthError::NotImplemented(provider)),
    }
}
