use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Profile cached in the session store for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl AuthResponse {
    pub fn stored_user(&self) -> StoredUser {
        StoredUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
