//! Page controllers: each view loads what its screen needs, runs the local
//! guards and keeps one error and one success message for display.

pub mod auth;
pub mod dashboard;
pub mod leagues;
pub mod lineup;
pub mod squad;
pub mod standings;

use crate::http::client::ApiClient;
use crate::models::league::LeagueId;
use crate::models::user::AuthResponse;
use crate::session::store::SessionStore;
use crate::utils::errors::{AppError, SessionError, ValidationError};

/// Everything a view talks to: the API and the session it persists into.
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
}

impl AppContext {
    pub fn new(api_base: &str, session: SessionStore) -> Self {
        let api = ApiClient::new(api_base).with_token(session.token());
        Self { api, session }
    }

    pub fn require_token(&self) -> Result<(), ValidationError> {
        match self.session.token() {
            Some(_) => Ok(()),
            None => Err(ValidationError::NotLoggedIn),
        }
    }

    pub fn require_league(&self) -> Result<LeagueId, ValidationError> {
        self.session
            .selected_league()
            .ok_or(ValidationError::NoLeagueSelected)
    }

    pub fn sign_in(&mut self, auth: &AuthResponse) -> Result<(), SessionError> {
        self.session.set_token(&auth.token)?;
        self.session.set_current_user(&auth.stored_user())?;
        self.api.set_token(Some(&auth.token));
        Ok(())
    }

    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.session.clear_auth()?;
        self.api.set_token(None);
        Ok(())
    }

    pub fn select_league(&mut self, league_id: LeagueId) -> Result<(), SessionError> {
        self.session.set_selected_league(league_id)
    }
}

/// The single error and success line a view shows.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ViewStatus {
    pub error: Option<String>,
    pub success: Option<String>,
}

impl ViewStatus {
    pub fn clear(&mut self) {
        self.error = None;
        self.success = None;
    }

    pub fn fail(&mut self, error: impl Into<AppError>) {
        self.success = None;
        self.error = Some(error.into().to_string());
    }

    pub fn succeed(&mut self, message: &str) {
        self.error = None;
        self.success = Some(message.to_string());
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
