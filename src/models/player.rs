use serde::{Deserialize, Serialize};

pub type PlayerId = i64;

/// Catalog entry served by `GET /players`. Cost is in millions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub team: String,
    pub cost: f64,
}

impl Player {
    /// Cost in tenths of a million, so squad totals add up exactly.
    pub fn cost_tenths(&self) -> i64 {
        (self.cost * 10.0).round() as i64
    }
}

/// Formats an amount of millions the way prices are shown: `$7.5m`.
pub fn format_money(amount: f64) -> String {
    format!("${amount:.1}m")
}
