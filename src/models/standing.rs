use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub team_name: String,
    pub points: i64,
}

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
}
