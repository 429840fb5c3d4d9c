//! Administrator session guard.
//!
//! Two states: `LoggedOut` (initial) and `LoggedIn(username)`. The guard is a
//! trust boundary inside a single client, not a security boundary.

use tracing::{info, warn};

use crate::authenticator::Authenticator;
use crate::confirm::{Confirm, DestructiveAction};
use crate::error::AdminError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        username: String,
    },
}

pub struct SessionGuard {
    authenticator: Box<dyn Authenticator>,
    state: SessionState,
}

impl SessionGuard {
    pub fn new(authenticator: Box<dyn Authenticator>) -> Self {
        Self {
            authenticator,
            state: SessionState::LoggedOut,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn { username } => Some(username),
            SessionState::LoggedOut => None,
        }
    }

    /// Log in if the pair is accepted by the authenticator.
    ///
    /// A rejected attempt leaves the state untouched.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AdminError> {
        if !self.authenticator.authenticate(username, password) {
            warn!(username, "rejected administrator login");
            return Err(AdminError::InvalidCredentials);
        }
        info!(username, "administrator logged in");
        self.state = SessionState::LoggedIn {
            username: username.to_string(),
        };
        Ok(())
    }

    /// Log out once the caller confirms. Returns whether the session ended.
    ///
    /// Logging out while logged out is a no-op and asks nothing.
    pub fn logout(&mut self, confirm: &mut dyn Confirm) -> bool {
        let SessionState::LoggedIn { username } = &self.state else {
            return false;
        };
        if !confirm.confirm(&DestructiveAction::Logout) {
            return false;
        }
        info!(username = %username, "administrator logged out");
        self.state = SessionState::LoggedOut;
        true
    }

    /// The logged-in administrator, or `NotLoggedIn`.
    pub fn require_admin(&self) -> Result<&str, AdminError> {
        self.username().ok_or(AdminError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authenticator::StaticAuthenticator;
    use crate::confirm::Confirmation;

    fn guard() -> SessionGuard {
        SessionGuard::new(Box::new(StaticAuthenticator::default()))
    }

    #[test]
    fn starts_logged_out() {
        let guard = guard();
        assert_eq!(guard.state(), &SessionState::LoggedOut);
        assert_eq!(guard.require_admin(), Err(AdminError::NotLoggedIn));
    }

    #[test]
    fn valid_credentials_log_in() {
        let mut guard = guard();
        guard.login("admin", "password").unwrap();
        assert_eq!(guard.username(), Some("admin"));
        assert_eq!(guard.require_admin(), Ok("admin"));
    }

    #[test]
    fn invalid_credentials_leave_state_alone() {
        let mut guard = guard();
        assert_eq!(
            guard.login("admin", "letmein"),
            Err(AdminError::InvalidCredentials)
        );
        assert!(!guard.is_logged_in());

        guard.login("admin", "password").unwrap();
        assert_eq!(
            guard.login("mallory", "password"),
            Err(AdminError::InvalidCredentials)
        );
        assert_eq!(guard.username(), Some("admin"));
    }

    #[test]
    fn logout_needs_confirmation() {
        let mut guard = guard();
        guard.login("admin", "password").unwrap();

        assert!(!guard.logout(&mut Confirmation::Declined));
        assert!(guard.is_logged_in());

        assert!(guard.logout(&mut Confirmation::Granted));
        assert_eq!(guard.state(), &SessionState::LoggedOut);
    }

    #[test]
    fn logout_when_logged_out_asks_nothing() {
        let mut guard = guard();
        let mut asked = false;
        let mut ask = |_: &DestructiveAction| {
            asked = true;
            true
        };
        assert!(!guard.logout(&mut ask));
        assert!(!asked);
    }
}
