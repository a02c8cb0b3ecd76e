use serde::Serialize;

use crate::models::league::LeagueId;
use crate::models::player::PlayerId;

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct CreateLeagueRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct JoinLeagueRequest {
    pub league_id: LeagueId,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct SaveSquadRequest {
    pub league_id: LeagueId,
    pub player_ids: Vec<PlayerId>,
}
