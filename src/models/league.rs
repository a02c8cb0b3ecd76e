use serde::{Deserialize, Serialize};

pub type LeagueId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub league_id: LeagueId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LeagueCreateResponse {
    pub league_id: LeagueId,
}

#[derive(Debug, Deserialize)]
pub struct MembershipResponse {
    pub membership_id: i64,
}
