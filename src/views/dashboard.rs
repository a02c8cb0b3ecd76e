use crate::logger;
use crate::models::league::{League, LeagueId};
use crate::models::user::MeResponse;
use crate::utils::errors::AppError;
use crate::views::{AppContext, ViewStatus};

/// Profile, joined leagues and the league currently selected.
#[derive(Debug, Default)]
pub struct DashboardView {
    pub status: ViewStatus,
    pub user: Option<MeResponse>,
    pub leagues: Vec<League>,
    pub selected_league: Option<LeagueId>,
}

impl DashboardView {
    pub async fn load(ctx: &AppContext) -> Self {
        let mut view = DashboardView::default();
        if let Err(error) = view.try_load(ctx).await {
            view.status.fail(error);
        }
        view
    }

    async fn try_load(&mut self, ctx: &AppContext) -> Result<(), AppError> {
        ctx.require_token()?;
        let user = ctx.api.me().await?;
        logger!(DEBUG, "[DASHBOARD] Loaded profile {} <{}>", user.id, user.email);
        self.user = Some(user);
        self.leagues = ctx.api.my_leagues().await?;
        self.selected_league = ctx.session.selected_league();
        Ok(())
    }

    pub fn select_league(&mut self, ctx: &mut AppContext, league_id: LeagueId) {
        self.status.clear();
        match ctx.select_league(league_id) {
            Ok(()) => {
                self.selected_league = Some(league_id);
                let name = self
                    .leagues
                    .iter()
                    .find(|league| league.league_id == league_id)
                    .map_or_else(|| format!("League {league_id}"), |league| league.name.clone());
                self.status.succeed(&format!("Selected {name}."));
            }
            Err(error) => self.status.fail(error),
        }
    }

    pub fn selected(&self) -> Option<&League> {
        let id = self.selected_league?;
        self.leagues.iter().find(|league| league.league_id == id)
    }
}
