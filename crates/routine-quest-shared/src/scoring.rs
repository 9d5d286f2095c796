//! XP scoring.
//!
//! XP starts from a base value, gains the boost-time multiplier when the
//! action happens inside the user's personal boost window, and then a
//! streak bonus of 5% per streak day, counting at most
//! `MAX_STREAK_BONUS` days.

use crate::config::APP_CONFIG;
use crate::models::{CheckInStatus, Session};

/// Bonus added per counted streak day.
pub const STREAK_BONUS_PER_DAY: f64 = 0.05;

/// Computes the XP award for one action.
///
/// Negative `streak_days` are not rejected; they shrink the multiplier.
///
/// # Examples
///
/// ```
/// use routine_quest_shared::calculate_xp;
///
/// assert_eq!(calculate_xp(10.0, false, 0), 10);
/// assert_eq!(calculate_xp(10.0, true, 0), 11);
/// assert_eq!(calculate_xp(10.0, false, 100), 15);
/// ```
pub fn calculate_xp(base_xp: f64, is_pbt: bool, streak_days: i64) -> i64 {
    let mut xp = base_xp;

    if is_pbt {
        xp *= APP_CONFIG.pbt_bonus_multiplier;
    }

    let counted_days = streak_days.min(i64::from(APP_CONFIG.max_streak_bonus));
    let streak_bonus = counted_days as f64 * STREAK_BONUS_PER_DAY;
    xp *= 1.0 + streak_bonus;

    round_half_up(xp)
}

/// [`calculate_xp`] with `BASE_XP_PER_STEP` as the base.
pub fn calculate_step_xp(is_pbt: bool, streak_days: i64) -> i64 {
    calculate_xp(f64::from(APP_CONFIG.base_xp_per_step), is_pbt, streak_days)
}

/// Total XP for a session: one step award per completed check-in.
/// Skipped and failed steps earn nothing.
pub fn session_xp(session: &Session, is_pbt: bool, streak_days: i64) -> i64 {
    let completed = session.count_by_status(CheckInStatus::Completed) as i64;
    completed * calculate_step_xp(is_pbt, streak_days)
}

// Halves round toward positive infinity, matching the clients.
fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}
