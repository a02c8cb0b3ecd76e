use crate::logger;
use crate::models::league::LeagueId;
use crate::utils::errors::{AppError, ValidationError};
use crate::views::{AppContext, ViewStatus};

/// Create-league and join-league forms. Either one selects the league it
/// lands on.
#[derive(Debug, Default)]
pub struct LeagueView {
    pub status: ViewStatus,
    pub league_id: Option<LeagueId>,
}

impl LeagueView {
    pub async fn create(&mut self, ctx: &mut AppContext, name: &str) {
        self.status.clear();
        match LeagueView::try_create(ctx, name).await {
            Ok(league_id) => {
                logger!(INFO, "[LEAGUE] Created league {league_id}");
                self.league_id = Some(league_id);
                self.status.succeed(&format!(
                    "League created! Share ID {league_id} so friends can join."
                ));
            }
            Err(error) => self.status.fail(error),
        }
    }

    pub async fn join(&mut self, ctx: &mut AppContext, league_id: LeagueId) {
        self.status.clear();
        match LeagueView::try_join(ctx, league_id).await {
            Ok(()) => {
                logger!(INFO, "[LEAGUE] Joined league {league_id}");
                self.league_id = Some(league_id);
                self.status.succeed(&format!("Joined league {league_id}."));
            }
            Err(error) => self.status.fail(error),
        }
    }

    async fn try_create(ctx: &mut AppContext, name: &str) -> Result<LeagueId, AppError> {
        ctx.require_token()?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField("League name").into());
        }

        let response = ctx.api.create_league(name).await?;
        ctx.select_league(response.league_id)?;
        Ok(response.league_id)
    }

    async fn try_join(ctx: &mut AppContext, league_id: LeagueId) -> Result<(), AppError> {
        ctx.require_token()?;
        if league_id < 1 {
            return Err(ValidationError::InvalidLeagueId.into());
        }

        let membership = ctx.api.join_league(league_id).await?;
        logger!(DEBUG, "[LEAGUE] Membership {} in league {league_id}", membership.membership_id);
        ctx.select_league(league_id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::context;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_failure_renders_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/create"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "name taken"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut ctx = context(&server.uri(), Some("tok"), None);
        let mut view = LeagueView::default();
        view.create(&mut ctx, "Sunday Squad").await;

        assert_eq!(view.status.error.as_deref(), Some("name taken"));
        assert!(view.status.success.is_none());
        assert!(ctx.session.selected_league().is_none());
    }

    #[tokio::test]
    async fn test_create_selects_new_league() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/create"))
            .and(body_json(json!({"name": "Sunday Squad"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"league_id": 17})))
            .mount(&server)
            .await;

        let mut ctx = context(&server.uri(), Some("tok"), None);
        let mut view = LeagueView::default();
        view.create(&mut ctx, "  Sunday Squad ").await;

        assert!(view.status.is_ok());
        assert_eq!(view.league_id, Some(17));
        assert_eq!(ctx.session.selected_league(), Some(17));
    }

    #[tokio::test]
    async fn test_join_selects_league() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/join"))
            .and(body_json(json!({"league_id": 9})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"membership_id": 30})))
            .mount(&server)
            .await;

        let mut ctx = context(&server.uri(), Some("tok"), Some(2));
        let mut view = LeagueView::default();
        view.join(&mut ctx, 9).await;

        assert!(view.status.is_ok());
        assert_eq!(ctx.session.selected_league(), Some(9));
    }

    #[tokio::test]
    async fn test_join_already_member() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/leagues/join"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Already a member"})))
            .mount(&server)
            .await;

        let mut ctx = context(&server.uri(), Some("tok"), Some(2));
        let mut view = LeagueView::default();
        view.join(&mut ctx, 9).await;

        assert_eq!(view.status.error.as_deref(), Some("Already a member"));
        assert_eq!(ctx.session.selected_league(), Some(2));
    }

    #[tokio::test]
    async fn test_local_guards() {
        let mut ctx = context("http://127.0.0.1:9", Some("tok"), None);
        let mut view = LeagueView::default();

        view.create(&mut ctx, "   ").await;
        assert_eq!(view.status.error.as_deref(), Some("League name is required."));

        view.join(&mut ctx, 0).await;
        assert_eq!(view.status.error.as_deref(), Some("Invalid league ID"));
    }
}
