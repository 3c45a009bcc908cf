//! Fixed-divisor feature scaling.
//!
//! Each scaled column is divided by the nominal maximum for its quantity. No
//! clamping is applied: scores above 100 or overtime clock values simply land
//! outside [0, 1].

use super::models::{CompletePlay, FeatureRow};

/// Yards from the opponent's goal line; a full field is 100 yards.
pub const YARDLINE_DIVISOR: f64 = 100.0;
/// Seconds in a 15-minute quarter.
pub const QUARTER_SECONDS: f64 = 900.0;
/// Seconds in a 30-minute half.
pub const HALF_SECONDS: f64 = 1800.0;
/// Seconds in a 60-minute regulation game.
pub const GAME_SECONDS: f64 = 3600.0;
pub const MAX_DOWN: f64 = 4.0;
pub const YDSTOGO_DIVISOR: f64 = 100.0;
/// Timeouts per half.
pub const MAX_TIMEOUTS: f64 = 3.0;
/// Heuristic score scale, not a true bound.
pub const SCORE_DIVISOR: f64 = 100.0;

/// Scale one complete play into an output feature row.
pub fn normalize(play: &CompletePlay) -> FeatureRow {
    FeatureRow {
        posteam_type: play.posteam_home,
        yardline_100: play.yardline_100 / YARDLINE_DIVISOR,
        quarter_seconds_remaining: play.quarter_seconds_remaining / QUARTER_SECONDS,
        half_seconds_remaining: play.half_seconds_remaining / HALF_SECONDS,
        game_seconds_remaining: play.game_seconds_remaining / GAME_SECONDS,
        down: play.down / MAX_DOWN,
        goal_to_go: play.goal_to_go,
        ydstogo: play.ydstogo / YDSTOGO_DIVISOR,
        posteam_timeouts_remaining: play.posteam_timeouts_remaining / MAX_TIMEOUTS,
        defteam_timeouts_remaining: play.defteam_timeouts_remaining / MAX_TIMEOUTS,
        posteam_score: play.posteam_score / SCORE_DIVISOR,
        defteam_score: play.defteam_score / SCORE_DIVISOR,
        posteam_won: play.posteam_won,
    }
}

pub fn normalize_all(plays: &[CompletePlay]) -> Vec<FeatureRow> {
    plays.iter().map(normalize).collect()
}
