//! Source table loading.
//!
//! Only the columns listed in [`REQUIRED_COLUMNS`] are read; everything else in
//! the play-by-play export is ignored. Missing-value markers follow the pandas
//! defaults the dataset was produced with, so `NA`, empty cells and friends all
//! load as `None`.

use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use super::error::{PipelineError, Result};
use super::models::PlayRecord;

/// Columns that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "game_id",
    "posteam",
    "posteam_type",
    "defteam",
    "side_of_field",
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
    "score_differential_post",
];

/// Cell contents treated as a missing value.
pub const NA_TOKENS: [&str; 20] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null", "none",
];

fn is_missing(raw: &str) -> bool {
    NA_TOKENS.contains(&raw)
}

/// Position of one required column in the input header.
#[derive(Debug, Clone, Copy)]
struct Column {
    index: usize,
    name: &'static str,
}

impl Column {
    fn locate(headers: &StringRecord, name: &'static str) -> Result<Self> {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .map(|index| Column { index, name })
            .ok_or(PipelineError::MissingColumn { column: name })
    }

    fn text(&self, record: &StringRecord) -> Option<String> {
        let raw = record.get(self.index).unwrap_or("");
        if is_missing(raw.trim()) {
            None
        } else {
            Some(raw.to_string())
        }
    }

    fn number(&self, record: &StringRecord, line: u64) -> Result<Option<f64>> {
        let raw = record.get(self.index).unwrap_or("").trim();
        if is_missing(raw) {
            return Ok(None);
        }
        raw.parse::<f64>()
            .map(Some)
            .map_err(|_| PipelineError::Parse {
                line,
                column: self.name,
                value: raw.to_string(),
            })
    }
}

/// Header positions of every required column.
#[derive(Debug, Clone)]
struct ColumnIndex {
    game_id: Column,
    posteam: Column,
    posteam_type: Column,
    defteam: Column,
    side_of_field: Column,
    yardline_100: Column,
    quarter_seconds_remaining: Column,
    half_seconds_remaining: Column,
    game_seconds_remaining: Column,
    down: Column,
    goal_to_go: Column,
    ydstogo: Column,
    posteam_timeouts_remaining: Column,
    defteam_timeouts_remaining: Column,
    posteam_score: Column,
    defteam_score: Column,
    score_differential_post: Column,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let [
            game_id,
            posteam,
            posteam_type,
            defteam,
            side_of_field,
            yardline_100,
            quarter_seconds_remaining,
            half_seconds_remaining,
            game_seconds_remaining,
            down,
            goal_to_go,
            ydstogo,
            posteam_timeouts_remaining,
            defteam_timeouts_remaining,
            posteam_score,
            defteam_score,
            score_differential_post,
        ] = REQUIRED_COLUMNS;
        Ok(ColumnIndex {
            game_id: Column::locate(headers, game_id)?,
            posteam: Column::locate(headers, posteam)?,
            posteam_type: Column::locate(headers, posteam_type)?,
            defteam: Column::locate(headers, defteam)?,
            side_of_field: Column::locate(headers, side_of_field)?,
            yardline_100: Column::locate(headers, yardline_100)?,
            quarter_seconds_remaining: Column::locate(headers, quarter_seconds_remaining)?,
            half_seconds_remaining: Column::locate(headers, half_seconds_remaining)?,
            game_seconds_remaining: Column::locate(headers, game_seconds_remaining)?,
            down: Column::locate(headers, down)?,
            goal_to_go: Column::locate(headers, goal_to_go)?,
            ydstogo: Column::locate(headers, ydstogo)?,
            posteam_timeouts_remaining: Column::locate(headers, posteam_timeouts_remaining)?,
            defteam_timeouts_remaining: Column::locate(headers, defteam_timeouts_remaining)?,
            posteam_score: Column::locate(headers, posteam_score)?,
            defteam_score: Column::locate(headers, defteam_score)?,
            score_differential_post: Column::locate(headers, score_differential_post)?,
        })
    }

    fn extract(&self, record: &StringRecord) -> Result<PlayRecord> {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        Ok(PlayRecord {
            game_id: self.game_id.text(record),
            posteam: self.posteam.text(record),
            posteam_type: self.posteam_type.text(record),
            defteam: self.defteam.text(record),
            side_of_field: self.side_of_field.text(record),
            yardline_100: self.yardline_100.number(record, line)?,
            quarter_seconds_remaining: self.quarter_seconds_remaining.number(record, line)?,
            half_seconds_remaining: self.half_seconds_remaining.number(record, line)?,
            game_seconds_remaining: self.game_seconds_remaining.number(record, line)?,
            down: self.down.number(record, line)?,
            goal_to_go: self.goal_to_go.number(record, line)?,
            ydstogo: self.ydstogo.number(record, line)?,
            posteam_timeouts_remaining: self.posteam_timeouts_remaining.number(record, line)?,
            defteam_timeouts_remaining: self.defteam_timeouts_remaining.number(record, line)?,
            posteam_score: self.posteam_score.number(record, line)?,
            defteam_score: self.defteam_score.number(record, line)?,
            score_differential_post: self.score_differential_post.number(record, line)?,
        })
    }
}

/// Load every play from the CSV file at `path`, in file order.
pub fn load_plays(path: &Path, delimiter: u8) -> Result<Vec<PlayRecord>> {
    let file = File::open(path).map_err(|source| PipelineError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let plays = load_plays_from_reader(BufReader::new(file), delimiter)?;
    info!("Loaded {} play(s) from {}", plays.len(), path.display());
    Ok(plays)
}

/// Load plays from any reader, in input order.
pub fn load_plays_from_reader<R: Read>(rdr: R, delimiter: u8) -> Result<Vec<PlayRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(rdr);
    let columns = ColumnIndex::from_headers(reader.headers()?)?;
    debug!("Resolved {} required column(s)", REQUIRED_COLUMNS.len());

    let mut plays = Vec::new();
    let mut record = StringRecord::new();
    while reader.read_record(&mut record)? {
        plays.push(columns.extract(&record)?);
    }
    Ok(plays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const HEADER: &str = "play_id,game_id,home_team,posteam,posteam_type,defteam,side_of_field,yardline_100,quarter_seconds_remaining,half_seconds_remaining,game_seconds_remaining,down,goal_to_go,ydstogo,posteam_timeouts_remaining,defteam_timeouts_remaining,posteam_score,defteam_score,score_differential_post";

    fn sample(rows: &[&str]) -> String {
        let mut s = HEADER.to_string();
        for r in rows {
            s.push('\n');
            s.push_str(r);
        }
        s
    }

    #[test]
    fn loads_required_columns_and_ignores_extras() {
        let data = sample(&[
            "46,2009091000,PIT,PIT,home,TEN,TEN,30,900,1800,3600,1,0,10,3,3,0,0,0",
            "68,2009091000,PIT,PIT,home,TEN,PIT,58,893,1793,3593,2,0,5,3,3,0,0,0",
        ]);
        let plays = load_plays_from_reader(data.as_bytes(), b',').unwrap();
        assert_eq!(plays.len(), 2);

        let p = &plays[1];
        assert_eq!(p.game_id.as_deref(), Some("2009091000"));
        assert_eq!(p.posteam.as_deref(), Some("PIT"));
        assert_eq!(p.posteam_type.as_deref(), Some("home"));
        assert_eq!(p.defteam.as_deref(), Some("TEN"));
        assert_eq!(p.side_of_field.as_deref(), Some("PIT"));
        assert_relative_eq!(p.yardline_100.unwrap(), 58.0);
        assert_relative_eq!(p.quarter_seconds_remaining.unwrap(), 893.0);
        assert_relative_eq!(p.down.unwrap(), 2.0);
        assert_relative_eq!(p.ydstogo.unwrap(), 5.0);
        assert_eq!(p.score_differential_post, Some(0.0));
    }

    #[test]
    fn preserves_row_order() {
        let data = sample(&[
            "1,G3,A,A,home,B,B,10,1,1,1,1,0,1,3,3,0,0,0",
            "2,G1,A,A,home,B,B,20,1,1,1,1,0,1,3,3,0,0,0",
            "3,G2,A,A,home,B,B,30,1,1,1,1,0,1,3,3,0,0,0",
        ]);
        let plays = load_plays_from_reader(data.as_bytes(), b',').unwrap();
        let ids: Vec<_> = plays.iter().map(|p| p.game_id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["G3", "G1", "G2"]);
    }

    #[test]
    fn na_tokens_load_as_missing() {
        let data = sample(&["1,G1,A,NA,,NA,NA,35,900,1800,3600,NA,NaN,,3,3,0,0,"]);
        let plays = load_plays_from_reader(data.as_bytes(), b',').unwrap();
        let p = &plays[0];
        assert!(p.posteam.is_none());
        assert!(p.posteam_type.is_none());
        assert!(p.defteam.is_none());
        assert!(p.side_of_field.is_none());
        assert!(p.down.is_none());
        assert!(p.goal_to_go.is_none());
        assert!(p.ydstogo.is_none());
        assert!(p.score_differential_post.is_none());
        assert_eq!(p.yardline_100, Some(35.0));
    }

    #[test]
    fn fractional_and_negative_numbers_parse() {
        let data = sample(&["1,G1,A,A,away,B,B,35.0,12.5,1800,3600,1.0,1,10,3,2,3,10,-7"]);
        let plays = load_plays_from_reader(data.as_bytes(), b',').unwrap();
        assert_relative_eq!(plays[0].quarter_seconds_remaining.unwrap(), 12.5);
        assert_relative_eq!(plays[0].score_differential_post.unwrap(), -7.0);
    }

    #[test]
    fn missing_column_is_fatal() {
        let data = "game_id,posteam,defteam\nG1,A,B";
        let err = load_plays_from_reader(data.as_bytes(), b',').unwrap_err();
        match err {
            PipelineError::MissingColumn { column } => assert_eq!(column, "posteam_type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_value_is_fatal_with_location() {
        let data = sample(&[
            "1,G1,A,A,home,B,B,35,900,1800,3600,1,0,10,3,3,0,0,0",
            "2,G1,A,A,home,B,B,midfield,900,1800,3600,1,0,10,3,3,0,0,0",
        ]);
        let err = load_plays_from_reader(data.as_bytes(), b',').unwrap_err();
        match err {
            PipelineError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "yardline_100");
                assert_eq!(value, "midfield");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ragged_row_is_fatal() {
        let data = sample(&["1,G1,A,A,home"]);
        let err = load_plays_from_reader(data.as_bytes(), b',').unwrap_err();
        assert!(matches!(err, PipelineError::Csv(_)));
    }

    #[test]
    fn custom_delimiter() {
        let data = sample(&["1,G1,A,A,home,B,B,35,900,1800,3600,1,0,10,3,3,0,0,0"]).replace(',', ";");
        let plays = load_plays_from_reader(data.as_bytes(), b';').unwrap();
        assert_eq!(plays.len(), 1);
        assert_eq!(plays[0].yardline_100, Some(35.0));
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plays(&dir.path().join("absent.csv"), b',').unwrap_err();
        assert!(matches!(err, PipelineError::Open { .. }));
    }
}
