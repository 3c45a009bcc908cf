use super::models::{AnnotatedPlay, CompletePlay};

impl AnnotatedPlay {
    /// The fully-populated form of this play, or `None` if any loaded column
    /// is missing. The resolved winner is not checked: an undecided game still
    /// yields complete plays labelled 0.
    pub fn complete(self) -> Option<CompletePlay> {
        let p = self.play;
        Some(CompletePlay {
            game_id: p.game_id?,
            posteam: p.posteam?,
            posteam_home: self.posteam_home,
            defteam: p.defteam?,
            side_of_field: p.side_of_field?,
            yardline_100: p.yardline_100?,
            quarter_seconds_remaining: p.quarter_seconds_remaining?,
            half_seconds_remaining: p.half_seconds_remaining?,
            game_seconds_remaining: p.game_seconds_remaining?,
            down: p.down?,
            goal_to_go: p.goal_to_go?,
            ydstogo: p.ydstogo?,
            posteam_timeouts_remaining: p.posteam_timeouts_remaining?,
            defteam_timeouts_remaining: p.defteam_timeouts_remaining?,
            posteam_score: p.posteam_score?,
            defteam_score: p.defteam_score?,
            score_differential_post: p.score_differential_post?,
            posteam_won: self.posteam_won,
        })
    }
}

/// Drop every play with a missing value. Returns the kept plays in order and
/// the number dropped.
pub fn drop_incomplete(plays: Vec<AnnotatedPlay>) -> (Vec<CompletePlay>, usize) {
    let total = plays.len();
    let kept: Vec<CompletePlay> = plays.into_iter().filter_map(AnnotatedPlay::complete).collect();
    let dropped = total - kept.len();
    (kept, dropped)
}
