use reqwest::StatusCode;
use thiserror::Error;

use crate::fantasy::rules::{SALARY_CAP, SQUAD_SIZE, STARTERS_REQUIRED};
use crate::models::player::PlayerId;

/// Failures of an outbound call to the fantasy API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. Displays the backend's `detail` verbatim.
    #[error("{detail}")]
    Backend { status: StatusCode, detail: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response body for {endpoint} ({message})")]
    Decode { endpoint: String, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Transport(error) => error.status(),
            ApiError::Decode { .. } => None,
        }
    }
}

/// Guards checked before anything is sent to the backend.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("You can only select {size} players.", size = SQUAD_SIZE)]
    SquadFull,
    #[error("Select exactly {size} players.", size = SQUAD_SIZE)]
    SquadSize(usize),
    #[error("Budget exceeded: ${0:.1}m / ${cap}m", cap = SALARY_CAP)]
    BudgetExceeded(f64),
    #[error("Player {0} is not in the catalog.")]
    UnknownPlayer(PlayerId),
    #[error("You need to save a squad first.")]
    NoSquad,
    #[error("Select exactly {count} starters.", count = STARTERS_REQUIRED)]
    TooManyStarters,
    #[error("Player {0} is not in your squad.")]
    NotInSquad(PlayerId),
    #[error("Captain and vice must be picked from your starters.")]
    NotAStarter(PlayerId),
    #[error("Choose {count} starters plus captain and vice.", count = STARTERS_REQUIRED)]
    IncompleteLineup,
    #[error("Captain and vice must be different players.")]
    SameCaptainAndVice,
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),
    #[error("Invalid league ID")]
    InvalidLeagueId,
    #[error("Not logged in.")]
    NotLoggedIn,
    #[error("Select a league first.")]
    NoLeagueSelected,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Unable to access session file `{path}` ({source})")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Session file `{path}` is corrupted ({source})")]
    Corrupted {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Unable to encode session value ({0})")]
    Encode(#[from] serde_json::Error),
}

/// The single message a view shows, whatever went wrong.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unable to load settings ({0})")]
    Load(#[from] config::ConfigError),
    #[error("Unknown log level `{0}`")]
    LogLevel(String),
}
