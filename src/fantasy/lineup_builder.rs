use crate::fantasy::rules::{DEFAULT_GAMEWEEK, STARTERS_REQUIRED};
use crate::fantasy::squad_selector::Toggle;
use crate::models::league::LeagueId;
use crate::models::lineup::LineupRequest;
use crate::models::player::{Player, PlayerId};
use crate::models::squad::Squad;
use crate::utils::errors::ValidationError;

/// Starters plus captain and vice picked from a saved squad.
///
/// Captain and vice always point at current starters: dropping a starter
/// clears any designation it held.
#[derive(Debug, Clone)]
pub struct LineupBuilder {
    squad: Vec<Player>,
    starters: Vec<PlayerId>,
    captain: Option<PlayerId>,
    vice: Option<PlayerId>,
}

impl LineupBuilder {
    pub fn new(squad: Option<Squad>) -> Result<Self, ValidationError> {
        let squad = squad.ok_or(ValidationError::NoSquad)?;
        Ok(Self {
            squad: squad.players,
            starters: Vec::new(),
            captain: None,
            vice: None,
        })
    }

    pub fn squad(&self) -> &[Player] {
        &self.squad
    }

    pub fn starters(&self) -> &[PlayerId] {
        &self.starters
    }

    /// Starters resolved against the squad, in the order they were picked.
    pub fn starter_players(&self) -> Vec<&Player> {
        self.starters
            .iter()
            .filter_map(|id| self.squad.iter().find(|p| p.id == *id))
            .collect()
    }

    pub fn captain(&self) -> Option<PlayerId> {
        self.captain
    }

    pub fn vice(&self) -> Option<PlayerId> {
        self.vice
    }

    pub fn is_starter(&self, player_id: PlayerId) -> bool {
        self.starters.contains(&player_id)
    }

    pub fn toggle_starter(&mut self, player_id: PlayerId) -> Result<Toggle, ValidationError> {
        if let Some(index) = self.starters.iter().position(|id| *id == player_id) {
            self.starters.remove(index);
            self.repair_designations();
            return Ok(Toggle::Removed);
        }

        if self.starters.len() >= STARTERS_REQUIRED {
            return Err(ValidationError::TooManyStarters);
        }
        if !self.squad.iter().any(|p| p.id == player_id) {
            return Err(ValidationError::NotInSquad(player_id));
        }

        self.starters.push(player_id);
        Ok(Toggle::Added)
    }

    pub fn set_captain(&mut self, player_id: Option<PlayerId>) -> Result<(), ValidationError> {
        self.captain = self.designate(player_id)?;
        Ok(())
    }

    pub fn set_vice(&mut self, player_id: Option<PlayerId>) -> Result<(), ValidationError> {
        self.vice = self.designate(player_id)?;
        Ok(())
    }

    fn designate(&self, player_id: Option<PlayerId>) -> Result<Option<PlayerId>, ValidationError> {
        match player_id {
            Some(id) if !self.is_starter(id) => Err(ValidationError::NotAStarter(id)),
            other => Ok(other),
        }
    }

    fn repair_designations(&mut self) {
        if self.captain.is_some_and(|id| !self.starters.contains(&id)) {
            self.captain = None;
        }
        if self.vice.is_some_and(|id| !self.starters.contains(&id)) {
            self.vice = None;
        }
    }

    pub fn can_submit(&self) -> bool {
        self.validate(0).is_ok()
    }

    /// Builds the request for the current gameweek, or the first rule the
    /// lineup breaks.
    pub fn validate(&self, league_id: LeagueId) -> Result<LineupRequest, ValidationError> {
        let (Some(captain), Some(vice)) = (self.captain, self.vice) else {
            return Err(ValidationError::IncompleteLineup);
        };
        if self.starters.len() != STARTERS_REQUIRED {
            return Err(ValidationError::IncompleteLineup);
        }
        if captain == vice {
            return Err(ValidationError::SameCaptainAndVice);
        }

        Ok(LineupRequest {
            league_id,
            gw: DEFAULT_GAMEWEEK,
            starters: self.starters.clone(),
            captain,
            vice,
        })
    }
}
