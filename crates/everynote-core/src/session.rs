//! Root session state: who is signed in and which screen to show.

use crate::auth::{self, AuthResult, LoginProvider};
use crate::error::Result;
use crate::models::User;
use crate::storage::{LocalStorage, UserPersistence};

/// Prompt shown before signing out
pub const LOGOUT_CONFIRMATION: &str =
    "Are you sure you want to logout and return to the login screen?";

/// Top-level screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Home,
}

/// The authenticated user, rehydrated from local storage at boot.
pub struct Session<S> {
    storage: S,
    user: Option<User>,
}

impl<S: LocalStorage> Session<S> {
    /// Restore the persisted user, if any.
    ///
    /// A stored record that cannot be read is logged and treated as
    /// signed out; the record itself is left in place.
    pub fn restore(storage: S) -> Self {
        let user = match storage.load_user() {
            Ok(user) => user,
            Err(e) => {
                tracing::error!("Error parsing stored user data: {}", e);
                None
            }
        };
        if let Some(user) = &user {
            tracing::info!("Restored session for {}", user.email);
        }
        Self { storage, user }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub const fn screen(&self) -> Screen {
        if self.is_authenticated() {
            Screen::Home
        } else {
            Screen::Login
        }
    }

    /// Sign in as `user` and persist the identity.
    ///
    /// The in-memory session is updated even if the write fails.
    pub fn login(&mut self, user: User) -> Result<()> {
        tracing::info!("Signed in as {}", user.email);
        let result = self.storage.save_user(&user);
        self.user = Some(user);
        result
    }

    /// Sign in through one of the login screen's providers
    pub fn login_with(&mut self, provider: LoginProvider) -> AuthResult<User> {
        let user = auth::sign_in(provider)?;
        self.login(user.clone())?;
        Ok(user)
    }

    /// Sign out and forget the persisted identity
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.user.take() {
            tracing::info!("Signed out {}", user.email);
        }
        self.storage.clear_user()
    }

    /// Apply the answer to [`LOGOUT_CONFIRMATION`].
    ///
    /// Returns whether the session was ended.
    pub fn answer_logout(&mut self, confirmed: bool) -> Result<bool> {
        if !confirmed {
            tracing::debug!("Logout cancelled");
            return Ok(false);
        }
        self.logout()?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{demo_user, AuthError};
    use crate::storage::{MemoryStorage, SqliteLocalStorage, USER_KEY};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn starts_on_login_without_stored_user() {
        let session = Session::restore(MemoryStorage::new());
        assert_eq!(session.screen(), Screen::Login);
        assert!(session.user().is_none());
    }

    #[test]
    fn mock_login_yields_demo_user_and_home_screen() {
        let storage = MemoryStorage::new();
        let mut session = Session::restore(storage.clone());

        let user = session.login_with(LoginProvider::Google).unwrap();
        assert_eq!(user, demo_user());
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(storage.load_user().unwrap(), Some(demo_user()));
    }

    #[test]
    fn apple_login_keeps_login_screen() {
        let storage = MemoryStorage::new();
        let mut session = Session::restore(storage.clone());

        let error = session.login_with(LoginProvider::Apple).unwrap_err();
        assert!(matches!(error, AuthError::NotImplemented(_)));
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
    }

    #[test]
    fn restores_persisted_user_after_reload() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("local_storage.db");

        let mut session = Session::restore(SqliteLocalStorage::open(&path).unwrap());
        session.login(demo_user()).unwrap();
        drop(session);

        let reloaded = Session::restore(SqliteLocalStorage::open(&path).unwrap());
        assert_eq!(reloaded.screen(), Screen::Home);
        assert_eq!(reloaded.user(), Some(&demo_user()));
    }

    #[test]
    fn clearing_stored_user_returns_to_login_on_reload() {
        let storage = MemoryStorage::new();
        Session::restore(storage.clone()).login(demo_user()).unwrap();

        storage.remove_item(USER_KEY).unwrap();

        let reloaded = Session::restore(storage);
        assert_eq!(reloaded.screen(), Screen::Login);
    }

    #[test]
    fn malformed_stored_user_is_treated_as_signed_out() {
        let storage = MemoryStorage::new();
        storage.set_item(USER_KEY, "not json").unwrap();

        let session = Session::restore(storage.clone());
        assert_eq!(session.screen(), Screen::Login);
        // The bad record is not cleaned up
        assert_eq!(storage.get_item(USER_KEY).unwrap().as_deref(), Some("not json"));
    }

    #[test]
    fn declined_logout_keeps_session() {
        let storage = MemoryStorage::new();
        let mut session = Session::restore(storage.clone());
        session.login(demo_user()).unwrap();

        assert!(!session.answer_logout(false).unwrap());
        assert_eq!(session.screen(), Screen::Home);
        assert!(storage.get_item(USER_KEY).unwrap().is_some());
    }

    #[test]
    fn confirmed_logout_clears_user_and_storage() {
        let storage = MemoryStorage::new();
        let mut session = Session::restore(storage.clone());
        session.login(demo_user()).unwrap();

        assert!(session.answer_logout(true).unwrap());
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(storage.get_item(USER_KEY).unwrap(), None);
    }
}
