use crate::fantasy::squad_selector::{SquadSelector, Toggle};
use crate::logger;
use crate::models::league::LeagueId;
use crate::models::player::PlayerId;
use crate::utils::errors::AppError;
use crate::views::{AppContext, ViewStatus};

/// Squad builder screen for the selected league.
#[derive(Debug, Default)]
pub struct SquadView {
    pub status: ViewStatus,
    pub league_id: Option<LeagueId>,
    pub selector: SquadSelector,
}

impl SquadView {
    /// Loads the catalog and any saved squad at the same time.
    pub async fn load(ctx: &AppContext) -> Self {
        let mut view = SquadView::default();
        if let Err(error) = view.try_load(ctx).await {
            view.status.fail(error);
        }
        view
    }

    async fn try_load(&mut self, ctx: &AppContext) -> Result<(), AppError> {
        ctx.require_token()?;
        let league_id = ctx.require_league()?;
        self.league_id = Some(league_id);

        let (catalog, saved) = tokio::try_join!(ctx.api.players(), ctx.api.squad(league_id))?;
        logger!(
            DEBUG,
            "[SQUAD] Loaded {} players, saved squad: {}",
            catalog.len(),
            saved.is_some()
        );
        self.selector = SquadSelector::new(catalog).with_saved(saved);
        Ok(())
    }

    pub fn toggle(&mut self, player_id: PlayerId) -> Option<Toggle> {
        self.status.clear();
        match self.selector.toggle(player_id) {
            Ok(toggle) => Some(toggle),
            Err(error) => {
                self.status.fail(error);
                None
            }
        }
    }

    /// Starts the selection over from exactly these players.
    pub fn select_only(&mut self, player_ids: &[PlayerId]) {
        let current: Vec<PlayerId> = self.selector.selected().iter().map(|p| p.id).collect();
        for id in current.into_iter().filter(|id| !player_ids.contains(id)) {
            self.toggle(id);
        }
        for id in player_ids {
            if self.selector.is_selected(*id) {
                continue;
            }
            if self.toggle(*id).is_none() {
                return;
            }
        }
    }

    pub fn can_save(&self) -> bool {
        self.league_id.is_some() && self.selector.can_save()
    }

    /// Validates locally; only a valid squad is sent.
    pub async fn save(&mut self, ctx: &AppContext) {
        self.status.clear();
        match self.try_save(ctx).await {
            Ok(()) => self
                .status
                .succeed("Squad saved! Proceed to set your lineup."),
            Err(error) => self.status.fail(error),
        }
    }

    async fn try_save(&mut self, ctx: &AppContext) -> Result<(), AppError> {
        let league_id = match self.league_id {
            Some(id) => id,
            None => ctx.require_league()?,
        };
        let request = self.selector.validate(league_id)?;

        let squad = ctx.api.save_squad(&request).await?;
        logger!(
            INFO,
            "[SQUAD] Saved squad {} for league {league_id} ({:.1}m used)",
            squad.squad_id,
            squad.budget_used
        );
        self.selector.apply_saved(squad);
        Ok(())
    }
}
