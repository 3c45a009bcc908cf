use std::collections::HashMap;

use super::models::{AnnotatedPlay, GameWinner, PlayRecord};

/// 1 for a home possession team, 0 for anything else (away, unknown, missing).
pub fn home_indicator(posteam_type: Option<&str>) -> u8 {
    u8::from(posteam_type == Some("home"))
}

/// Left-join each play onto its game's winner and derive the outcome label.
///
/// Every play is kept. A play whose game has no winner row, or whose winner is
/// undecided, is labelled `posteam_won = 0`: a loss and an unknown result are
/// indistinguishable in the label.
pub fn annotate(plays: Vec<PlayRecord>, winners: &[GameWinner]) -> Vec<AnnotatedPlay> {
    let by_game: HashMap<&str, Option<&str>> = winners
        .iter()
        .map(|w| (w.game_id.as_str(), w.winner.as_deref()))
        .collect();

    plays
        .into_iter()
        .map(|play| {
            let winner = play
                .game_id
                .as_deref()
                .and_then(|id| by_game.get(id).copied().flatten())
                .map(str::to_string);
            let posteam_won = match (play.posteam.as_deref(), winner.as_deref()) {
                (Some(posteam), Some(winner)) => u8::from(posteam == winner),
                _ => 0,
            };
            AnnotatedPlay {
                posteam_home: home_indicator(play.posteam_type.as_deref()),
                posteam_won,
                winner,
                play,
            }
        })
        .collect()
}
