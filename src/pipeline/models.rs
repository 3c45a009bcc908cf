use serde::Serialize;

/// One row of the source play-by-play table, restricted to the columns the
/// pipeline reads. Every field may be missing in the source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayRecord {
    pub game_id: Option<String>,
    /// Team with the ball on this play
    pub posteam: Option<String>,
    /// "home" | "away"
    pub posteam_type: Option<String>,
    pub defteam: Option<String>,
    pub side_of_field: Option<String>,
    /// Distance to the opponent's end zone (0–100)
    pub yardline_100: Option<f64>,
    pub quarter_seconds_remaining: Option<f64>,
    pub half_seconds_remaining: Option<f64>,
    pub game_seconds_remaining: Option<f64>,
    pub down: Option<f64>,
    pub goal_to_go: Option<f64>,
    pub ydstogo: Option<f64>,
    pub posteam_timeouts_remaining: Option<f64>,
    pub defteam_timeouts_remaining: Option<f64>,
    pub posteam_score: Option<f64>,
    pub defteam_score: Option<f64>,
    /// posteam score minus defteam score after the play
    pub score_differential_post: Option<f64>,
}

/// Resolved outcome of one game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameWinner {
    pub game_id: String,
    /// Possession team of the final possession play
    pub posteam: String,
    pub defteam: Option<String>,
    pub score_differential_post: Option<f64>,
    /// `None` when the final differential is zero or unknown
    pub winner: Option<String>,
}

/// A play joined with its game's resolved winner
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedPlay {
    pub play: PlayRecord,
    pub winner: Option<String>,
    /// 1 if the possession team plays at home, 0 otherwise
    pub posteam_home: u8,
    /// 1 if the possession team went on to win, 0 otherwise (including unknown winner)
    pub posteam_won: u8,
}

/// An annotated play with every column present.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct CompletePlay {
    pub game_id: String,
    pub posteam: String,
    pub posteam_home: u8,
    pub defteam: String,
    pub side_of_field: String,
    pub yardline_100: f64,
    pub quarter_seconds_remaining: f64,
    pub half_seconds_remaining: f64,
    pub game_seconds_remaining: f64,
    pub down: f64,
    pub goal_to_go: f64,
    pub ydstogo: f64,
    pub posteam_timeouts_remaining: f64,
    pub defteam_timeouts_remaining: f64,
    pub posteam_score: f64,
    pub defteam_score: f64,
    pub score_differential_post: f64,
    pub posteam_won: u8,
}

/// One row of the output feature table. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    pub posteam_type: u8,
    pub yardline_100: f64,
    pub quarter_seconds_remaining: f64,
    pub half_seconds_remaining: f64,
    pub game_seconds_remaining: f64,
    pub down: f64,
    pub goal_to_go: f64,
    pub ydstogo: f64,
    pub posteam_timeouts_remaining: f64,
    pub defteam_timeouts_remaining: f64,
    pub posteam_score: f64,
    pub defteam_score: f64,
    pub posteam_won: u8,
}

/// Output header, in the same order as the fields of [`FeatureRow`].
pub const OUTPUT_COLUMNS: [&str; 13] = [
    "posteam_type",
    "yardline_100",
    "quarter_seconds_remaining",
    "half_seconds_remaining",
    "game_seconds_remaining",
    "down",
    "goal_to_go",
    "ydstogo",
    "posteam_timeouts_remaining",
    "defteam_timeouts_remaining",
    "posteam_score",
    "defteam_score",
    "posteam_won",
];
