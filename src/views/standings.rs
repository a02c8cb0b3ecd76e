use crate::models::league::LeagueId;
use crate::models::standing::Standing;
use crate::utils::errors::{AppError, ValidationError};
use crate::views::{AppContext, ViewStatus};

/// League table as computed by the backend.
#[derive(Debug, Default)]
pub struct StandingsView {
    pub status: ViewStatus,
    pub league_id: Option<LeagueId>,
    pub standings: Vec<Standing>,
}

impl StandingsView {
    pub async fn load(ctx: &AppContext, league_id: LeagueId) -> Self {
        let mut view = StandingsView::default();
        if let Err(error) = view.try_load(ctx, league_id).await {
            view.status.fail(error);
        }
        view
    }

    async fn try_load(&mut self, ctx: &AppContext, league_id: LeagueId) -> Result<(), AppError> {
        ctx.require_token()?;
        if league_id < 1 {
            return Err(ValidationError::InvalidLeagueId.into());
        }
        self.league_id = Some(league_id);
        self.standings = ctx.api.standings(league_id).await?.standings;
        Ok(())
    }

    /// Rows numbered from 1, in the order the backend ranked them.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Standing)> {
        self.standings.iter().enumerate().map(|(index, row)| (index + 1, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::context;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_loads_ranked_rows() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [
                    {"team_name": "Blitz", "points": 88},
                    {"team_name": "Red Zone", "points": 61}
                ]
            })))
            .mount(&server)
            .await;

        let ctx = context(&server.uri(), Some("tok"), None);
        let view = StandingsView::load(&ctx, 4).await;

        assert!(view.status.is_ok());
        let rows: Vec<(usize, &str, i64)> = view
            .ranked()
            .map(|(rank, row)| (rank, row.team_name.as_str(), row.points))
            .collect();
        assert_eq!(rows, vec![(1, "Blitz", 88), (2, "Red Zone", 61)]);
    }

    #[tokio::test]
    async fn test_invalid_league_id() {
        let ctx = context("http://127.0.0.1:9", Some("tok"), None);
        let view = StandingsView::load(&ctx, 0).await;
        assert_eq!(view.status.error.as_deref(), Some("Invalid league ID"));
    }

    #[tokio::test]
    async fn test_not_a_member() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/4"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"detail": "Not a member of this league"})),
            )
            .mount(&server)
            .await;

        let ctx = context(&server.uri(), Some("tok"), None);
        let view = StandingsView::load(&ctx, 4).await;
        assert_eq!(
            view.status.error.as_deref(),
            Some("Not a member of this league")
        );
    }
}
