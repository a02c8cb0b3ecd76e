use serde::{Deserialize, Serialize};

use crate::models::league::LeagueId;
use crate::models::player::Player;

/// A saved roster as confirmed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Squad {
    pub squad_id: i64,
    pub league_id: LeagueId,
    pub budget_used: f64,
    pub players: Vec<Player>,
}
