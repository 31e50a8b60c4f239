// ABOUTME: Explicit login session state for dependency injection into the network layer
// ABOUTME: Replaces ambient auth-token/user-id globals with an owned, clearable context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 PulseFit

use std::fmt;

/// Login session state passed explicitly to the network collaborator.
///
/// Earlier builds kept the auth token and user id in process-wide globals
/// set at login. This type makes that state an owned value with a clear
/// lifecycle: created by [`SessionContext::login`], queried through
/// accessors, emptied by [`SessionContext::logout`]. The schedule resolver
/// itself never reads it; it exists so the app shell can thread one session
/// object through its request layer instead of reaching for ambient state.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    auth_token: Option<String>,
    user_id: Option<String>,
}

impl SessionContext {
    /// Fresh, logged-out context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auth_token: None,
            user_id: None,
        }
    }

    /// Context for a just-completed login.
    #[must_use]
    pub fn login(auth_token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            auth_token: Some(auth_token.into()),
            user_id: Some(user_id.into()),
        }
    }

    /// Drop the credentials in place (logout lifecycle step).
    pub fn logout(&mut self) {
        self.auth_token = None;
        self.user_id = None;
    }

    /// Whether a user is currently logged in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Bearer token for authenticated requests, when logged in.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    /// Identifier of the logged-in user, when logged in.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }
}

// Manual Debug keeps the bearer token out of logs.
impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .field("user_id", &self.user_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout_clears_credentials() {
        let mut session = SessionContext::login("token-123", "user-9");
        assert!(session.is_logged_in());
        assert_eq!(session.auth_token(), Some("token-123"));
        assert_eq!(session.user_id(), Some("user-9"));

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.auth_token(), None);
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let session = SessionContext::login("secret", "user-9");
        let rendered = format!("{session:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("redacted"));
    }
}
