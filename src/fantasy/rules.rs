/// Salary cap for a squad, in millions.
pub const SALARY_CAP: f64 = 100.0;
pub const SQUAD_SIZE: usize = 15;
pub const STARTERS_REQUIRED: usize = 9;

/// Only the first gameweek is wired in.
pub const DEFAULT_GAMEWEEK: u32 = 1;

pub(crate) const SALARY_CAP_TENTHS: i64 = (SALARY_CAP as i64) * 10;
