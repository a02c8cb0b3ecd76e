use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::logger;
use crate::models::league::LeagueId;
use crate::models::user::StoredUser;
use crate::utils::errors::SessionError;

pub const TOKEN_KEY: &str = "gridcap_token";
pub const USER_KEY: &str = "gridcap_user";
pub const LEAGUE_KEY: &str = "gridcap_selected_league";

/// Key-value session storage: auth token, cached user and selected league.
///
/// Values are strings, the same shape browser storage would hold. With a
/// backing file every write is flushed immediately; without one the store
/// lives only for the current process.
#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl SessionStore {
    /// Opens the store at `path`. A missing file is an empty session.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        let values = match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|source| SessionError::Corrupted {
                path: path.display().to_string(),
                source,
            })?,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => {
                return Err(SessionError::Io {
                    path: path.display().to_string(),
                    source,
                })
            }
        };

        logger!(DEBUG, "[SESSION] Opened `{}` ({} keys)", path.display(), values.len());
        Ok(Self {
            path: Some(path.to_path_buf()),
            values,
        })
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) -> Result<(), SessionError> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    pub fn token(&self) -> Option<&str> {
        self.get(TOKEN_KEY)
    }

    pub fn set_token(&mut self, token: &str) -> Result<(), SessionError> {
        self.set(TOKEN_KEY, token.to_string())
    }

    /// A cached profile that no longer parses reads as absent.
    pub fn current_user(&self) -> Option<StoredUser> {
        let raw = self.get(USER_KEY)?;
        match serde_json::from_str(raw) {
            Ok(user) => Some(user),
            Err(error) => {
                logger!(WARN, "[SESSION] Ignoring unreadable cached user ({error})");
                None
            }
        }
    }

    pub fn set_current_user(&mut self, user: &StoredUser) -> Result<(), SessionError> {
        let raw = serde_json::to_string(user)?;
        self.set(USER_KEY, raw)
    }

    pub fn selected_league(&self) -> Option<LeagueId> {
        self.get(LEAGUE_KEY)?.trim().parse().ok()
    }

    pub fn set_selected_league(&mut self, league_id: LeagueId) -> Result<(), SessionError> {
        self.set(LEAGUE_KEY, league_id.to_string())
    }

    /// Logging out forgets the token, the cached user and the league.
    pub fn clear_auth(&mut self) -> Result<(), SessionError> {
        for key in [TOKEN_KEY, USER_KEY, LEAGUE_KEY] {
            self.values.remove(key);
        }
        self.flush()
    }

    fn flush(&self) -> Result<(), SessionError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let io_error = |source| SessionError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        let mut file = private_file(path).map_err(io_error)?;
        file.write_all(raw.as_bytes()).map_err(io_error)
    }
}

/// Opens the session file for rewriting. The bearer token lives here, so a
/// newly created file is readable by its owner only.
fn private_file(path: &Path) -> std::io::Result<fs::File> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}
