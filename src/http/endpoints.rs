use crate::http::client::ApiClient;
use crate::models::client_requests::{
    CreateLeagueRequest, JoinLeagueRequest, LoginRequest, RegisterRequest, SaveSquadRequest,
};
use crate::models::league::{League, LeagueCreateResponse, LeagueId, MembershipResponse};
use crate::models::lineup::{LineupRequest, LineupResponse};
use crate::models::player::Player;
use crate::models::squad::Squad;
use crate::models::standing::StandingsResponse;
use crate::models::user::{AuthResponse, MeResponse};
use crate::utils::errors::ApiError;

// Auth
impl ApiClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn me(&self) -> Result<MeResponse, ApiError> {
        self.get("/auth/me").await
    }
}

// Leagues
impl ApiClient {
    pub async fn my_leagues(&self) -> Result<Vec<League>, ApiError> {
        self.get("/leagues/mine").await
    }

    pub async fn create_league(&self, name: &str) -> Result<LeagueCreateResponse, ApiError> {
        let request = CreateLeagueRequest {
            name: name.to_string(),
        };
        self.post("/leagues/create", &request).await
    }

    pub async fn join_league(&self, league_id: LeagueId) -> Result<MembershipResponse, ApiError> {
        self.post("/leagues/join", &JoinLeagueRequest { league_id }).await
    }

    pub async fn standings(&self, league_id: LeagueId) -> Result<StandingsResponse, ApiError> {
        self.get(&format!("/standings/{league_id}")).await
    }
}

// Squad and lineup
impl ApiClient {
    pub async fn players(&self) -> Result<Vec<Player>, ApiError> {
        self.get("/players").await
    }

    /// `None` when nothing has been saved for this league yet.
    pub async fn squad(&self, league_id: LeagueId) -> Result<Option<Squad>, ApiError> {
        self.get(&format!("/squad?league_id={league_id}")).await
    }

    pub async fn save_squad(&self, request: &SaveSquadRequest) -> Result<Squad, ApiError> {
        self.post("/squad/save", request).await
    }

    pub async fn set_lineup(&self, request: &LineupRequest) -> Result<LineupResponse, ApiError> {
        self.post("/lineup/set", request).await
    }
}
