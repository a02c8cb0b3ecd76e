use serde::{Deserialize, Serialize};

use crate::models::league::LeagueId;
use crate::models::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupRequest {
    pub league_id: LeagueId,
    pub gw: u32,
    pub starters: Vec<PlayerId>,
    pub captain: PlayerId,
    pub vice: PlayerId,
}

#[derive(Debug, Deserialize)]
pub struct LineupResponse {
    pub lineup_id: i64,
}
