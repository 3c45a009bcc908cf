//! Per-game winner resolution from the final possession play.

use std::collections::BTreeMap;
use tracing::debug;

use super::models::{GameWinner, PlayRecord};

/// Latest non-missing values seen for a game's possession plays.
struct LastSeen<'a> {
    posteam: &'a str,
    defteam: Option<&'a str>,
    score_differential_post: Option<f64>,
}

/// Winner implied by the final score differential of the possession team.
///
/// Positive → possession team, negative → defense, zero or unknown → `None`.
pub fn pick_winner(
    score_differential_post: Option<f64>,
    posteam: &str,
    defteam: Option<&str>,
) -> Option<String> {
    match score_differential_post {
        Some(diff) if diff > 0.0 => Some(posteam.to_string()),
        Some(diff) if diff < 0.0 => defteam.map(str::to_string),
        _ => None,
    }
}

/// Resolve one winner row per game, in ascending game id order.
///
/// Plays without a possession team (kickoffs, timeouts, period ends) are
/// skipped, so a game made only of such plays gets no row at all. Within a
/// game the last possession play wins; if one of its fields is missing, the
/// most recent earlier value of that field is used instead.
pub fn resolve_winners(plays: &[PlayRecord]) -> Vec<GameWinner> {
    let mut games: BTreeMap<&str, LastSeen<'_>> = BTreeMap::new();

    for play in plays {
        let (Some(game_id), Some(posteam)) = (play.game_id.as_deref(), play.posteam.as_deref())
        else {
            continue;
        };
        let last = games.entry(game_id).or_insert(LastSeen {
            posteam,
            defteam: None,
            score_differential_post: None,
        });
        last.posteam = posteam;
        if let Some(defteam) = play.defteam.as_deref() {
            last.defteam = Some(defteam);
        }
        if let Some(diff) = play.score_differential_post {
            last.score_differential_post = Some(diff);
        }
    }

    games
        .into_iter()
        .map(|(game_id, last)| {
            let winner = pick_winner(last.score_differential_post, last.posteam, last.defteam);
            debug!(
                "Game {}: final differential {:?} for {} → winner {:?}",
                game_id, last.score_differential_post, last.posteam, winner
            );
            GameWinner {
                game_id: game_id.to_string(),
                posteam: last.posteam.to_string(),
                defteam: last.defteam.map(str::to_string),
                score_differential_post: last.score_differential_post,
                winner,
            }
        })
        .collect()
}
