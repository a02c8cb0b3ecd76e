use crate::fantasy::lineup_builder::LineupBuilder;
use crate::logger;
use crate::models::league::LeagueId;
use crate::models::player::PlayerId;
use crate::utils::errors::{AppError, ValidationError};
use crate::views::{AppContext, ViewStatus};

/// Lineup screen: starters, captain and vice for the selected league.
#[derive(Debug, Default)]
pub struct LineupView {
    pub status: ViewStatus,
    pub league_id: Option<LeagueId>,
    pub builder: Option<LineupBuilder>,
}

impl LineupView {
    pub async fn load(ctx: &AppContext) -> Self {
        let mut view = LineupView::default();
        if let Err(error) = view.try_load(ctx).await {
            view.status.fail(error);
        }
        view
    }

    async fn try_load(&mut self, ctx: &AppContext) -> Result<(), AppError> {
        ctx.require_token()?;
        let league_id = ctx.require_league()?;
        self.league_id = Some(league_id);

        let squad = ctx.api.squad(league_id).await?;
        self.builder = Some(LineupBuilder::new(squad)?);
        Ok(())
    }

    pub fn toggle_starter(&mut self, player_id: PlayerId) -> bool {
        self.apply(|builder| builder.toggle_starter(player_id).map(|_| ()))
    }

    /// Marks each of these players as a starter. Ids already starting are
    /// left alone, so a repeated id never toggles a player back out.
    pub fn select_starters(&mut self, player_ids: &[PlayerId]) -> bool {
        for id in player_ids {
            let starting = self.builder.as_ref().is_some_and(|b| b.is_starter(*id));
            if !starting && !self.toggle_starter(*id) {
                return false;
            }
        }
        true
    }

    pub fn set_captain(&mut self, player_id: Option<PlayerId>) -> bool {
        self.apply(|builder| builder.set_captain(player_id))
    }

    pub fn set_vice(&mut self, player_id: Option<PlayerId>) -> bool {
        self.apply(|builder| builder.set_vice(player_id))
    }

    fn apply<F>(&mut self, change: F) -> bool
    where
        F: FnOnce(&mut LineupBuilder) -> Result<(), ValidationError>,
    {
        self.status.clear();
        let result = match self.builder.as_mut() {
            Some(builder) => change(builder),
            None => Err(ValidationError::NoSquad),
        };
        match result {
            Ok(()) => true,
            Err(error) => {
                self.status.fail(error);
                false
            }
        }
    }

    pub fn can_submit(&self) -> bool {
        self.league_id.is_some() && self.builder.as_ref().is_some_and(LineupBuilder::can_submit)
    }

    pub async fn submit(&mut self, ctx: &AppContext) {
        self.status.clear();
        match self.try_submit(ctx).await {
            Ok(()) => self
                .status
                .succeed("Lineup saved! Check the standings to see results."),
            Err(error) => self.status.fail(error),
        }
    }

    async fn try_submit(&self, ctx: &AppContext) -> Result<(), AppError> {
        let builder = self.builder.as_ref().ok_or(ValidationError::NoSquad)?;
        let league_id = self.league_id.ok_or(ValidationError::NoLeagueSelected)?;
        let request = builder.validate(league_id)?;

        let response = ctx.api.set_lineup(&request).await?;
        logger!(
            INFO,
            "[LINEUP] Saved lineup {} for league {league_id}, gameweek {}",
            response.lineup_id,
            request.gw
        );
        Ok(())
    }
}
