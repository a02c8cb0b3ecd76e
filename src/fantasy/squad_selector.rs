use std::collections::BTreeMap;

use crate::fantasy::rules::{SALARY_CAP_TENTHS, SQUAD_SIZE};
use crate::models::client_requests::SaveSquadRequest;
use crate::models::league::LeagueId;
use crate::models::player::{Player, PlayerId};
use crate::models::squad::Squad;
use crate::utils::errors::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Working selection of players drawn from the catalog.
///
/// Never holds more than [`SQUAD_SIZE`] players. The running cost is derived
/// from the selection every time it is asked for.
#[derive(Debug, Clone, Default)]
pub struct SquadSelector {
    catalog: Vec<Player>,
    selected: Vec<Player>,
}

impl SquadSelector {
    pub fn new(catalog: Vec<Player>) -> Self {
        Self {
            catalog,
            selected: Vec::new(),
        }
    }

    /// Seeds the selection from a squad saved earlier, if any.
    pub fn with_saved(mut self, squad: Option<Squad>) -> Self {
        if let Some(squad) = squad {
            self.apply_saved(squad);
        }
        self
    }

    pub fn catalog(&self) -> &[Player] {
        &self.catalog
    }

    pub fn selected(&self) -> &[Player] {
        &self.selected
    }

    pub fn is_selected(&self, player_id: PlayerId) -> bool {
        self.selected.iter().any(|p| p.id == player_id)
    }

    /// Adds or removes a catalog player. Adding to a full selection is
    /// rejected and leaves it untouched.
    pub fn toggle(&mut self, player_id: PlayerId) -> Result<Toggle, ValidationError> {
        if let Some(index) = self.selected.iter().position(|p| p.id == player_id) {
            self.selected.remove(index);
            return Ok(Toggle::Removed);
        }

        if self.selected.len() >= SQUAD_SIZE {
            return Err(ValidationError::SquadFull);
        }

        let player = self
            .catalog
            .iter()
            .find(|p| p.id == player_id)
            .ok_or(ValidationError::UnknownPlayer(player_id))?;
        self.selected.push(player.clone());
        Ok(Toggle::Added)
    }

    pub fn total_cost(&self) -> f64 {
        self.total_tenths() as f64 / 10.0
    }

    fn total_tenths(&self) -> i64 {
        self.selected.iter().map(Player::cost_tenths).sum()
    }

    pub fn is_over_budget(&self) -> bool {
        self.total_tenths() > SALARY_CAP_TENTHS
    }

    pub fn can_save(&self) -> bool {
        self.selected.len() == SQUAD_SIZE && !self.is_over_budget()
    }

    /// Builds the save request, or the reason the squad cannot be sent.
    pub fn validate(&self, league_id: LeagueId) -> Result<SaveSquadRequest, ValidationError> {
        if self.selected.len() != SQUAD_SIZE {
            return Err(ValidationError::SquadSize(self.selected.len()));
        }
        if self.is_over_budget() {
            return Err(ValidationError::BudgetExceeded(self.total_cost()));
        }

        Ok(SaveSquadRequest {
            league_id,
            player_ids: self.selected.iter().map(|p| p.id).collect(),
        })
    }

    /// Replaces the working selection with the roster the backend confirmed.
    pub fn apply_saved(&mut self, squad: Squad) {
        self.selected = squad.players;
    }

    /// Catalog grouped by position, in position order.
    pub fn by_position(&self) -> BTreeMap<&str, Vec<&Player>> {
        let mut grouped: BTreeMap<&str, Vec<&Player>> = BTreeMap::new();
        for player in &self.catalog {
            grouped.entry(player.position.as_str()).or_default().push(player);
        }
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, cost: f64) -> Player {
        Player {
            id,
            name: format!("Player {id}"),
            position: if id % 2 == 0 { "WR" } else { "RB" }.to_string(),
            team: "KC".to_string(),
            cost,
        }
    }

    fn catalog(count: PlayerId, cost: f64) -> Vec<Player> {
        (1..=count).map(|id| player(id, cost)).collect()
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selector = SquadSelector::new(catalog(3, 5.0));
        assert_eq!(selector.toggle(2), Ok(Toggle::Added));
        assert!(selector.is_selected(2));
        assert_eq!(selector.toggle(2), Ok(Toggle::Removed));
        assert!(selector.selected().is_empty());
    }

    #[test]
    fn test_sixteenth_addition_is_rejected() {
        let mut selector = SquadSelector::new(catalog(20, 5.0));
        for id in 1..=15 {
            selector.toggle(id).unwrap();
        }

        assert_eq!(selector.toggle(16), Err(ValidationError::SquadFull));
        assert_eq!(selector.selected().len(), 15);
        assert!(!selector.is_selected(16));
        assert_eq!(
            ValidationError::SquadFull.to_string(),
            "You can only select 15 players."
        );
    }

    #[test]
    fn test_removal_still_allowed_when_full() {
        let mut selector = SquadSelector::new(catalog(16, 5.0));
        for id in 1..=15 {
            selector.toggle(id).unwrap();
        }
        assert_eq!(selector.toggle(15), Ok(Toggle::Removed));
        assert_eq!(selector.toggle(16), Ok(Toggle::Added));
    }

    #[test]
    fn test_unknown_player_is_rejected() {
        let mut selector = SquadSelector::new(catalog(3, 5.0));
        assert_eq!(selector.toggle(99), Err(ValidationError::UnknownPlayer(99)));
    }

    #[test]
    fn test_save_disabled_over_budget() {
        let mut selector = SquadSelector::new(catalog(15, 10.0));
        for id in 1..=15 {
            selector.toggle(id).unwrap();
        }

        assert_eq!(selector.total_cost(), 150.0);
        assert!(!selector.can_save());
        assert_eq!(
            selector.validate(1),
            Err(ValidationError::BudgetExceeded(150.0))
        );
    }

    #[test]
    fn test_save_disabled_until_fifteen() {
        let mut selector = SquadSelector::new(catalog(15, 5.0));
        for id in 1..=14 {
            selector.toggle(id).unwrap();
        }
        assert!(!selector.can_save());
        assert_eq!(selector.validate(1), Err(ValidationError::SquadSize(14)));

        selector.toggle(15).unwrap();
        assert!(selector.can_save());
        let request = selector.validate(8).unwrap();
        assert_eq!(request.league_id, 8);
        assert_eq!(request.player_ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_exactly_at_cap_with_decimal_costs() {
        // 6.6 * 15 = 99.0 and 14 * 6.6 + 7.6 = 100.0; float sums drift past both.
        let mut players = catalog(14, 6.6);
        players.push(player(15, 7.6));
        let mut selector = SquadSelector::new(players);
        for id in 1..=15 {
            selector.toggle(id).unwrap();
        }

        assert_eq!(selector.total_cost(), 100.0);
        assert!(selector.can_save());
    }

    #[test]
    fn test_apply_saved_replaces_selection() {
        let mut selector = SquadSelector::new(catalog(20, 5.0));
        selector.toggle(1).unwrap();

        let squad = Squad {
            squad_id: 1,
            league_id: 2,
            budget_used: 75.0,
            players: catalog(15, 5.0),
        };
        selector.apply_saved(squad);
        assert_eq!(selector.selected().len(), 15);
        assert!(selector.is_selected(15));
    }

    #[test]
    fn test_by_position_groups_catalog() {
        let selector = SquadSelector::new(catalog(5, 5.0));
        let grouped = selector.by_position();
        assert_eq!(grouped.keys().copied().collect::<Vec<_>>(), vec!["RB", "WR"]);
        assert_eq!(grouped["RB"].len(), 3);
        assert_eq!(grouped["WR"].len(), 2);
    }
}
