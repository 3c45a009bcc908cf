use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Counters and timings for one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rows_read: usize,
    /// Games with at least one possession play
    pub games_resolved: usize,
    /// Games whose final differential was zero or unknown; their plays are labelled 0
    pub games_undecided: Vec<String>,
    /// Plays whose game had no known winner at annotation time
    pub rows_without_winner: usize,
    pub rows_dropped: usize,
    pub rows_written: usize,
    /// Written rows with `posteam_won = 1`
    pub positive_labels: usize,
}

impl RunSummary {
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }

    /// Share of written rows labelled as a possession-team win.
    pub fn positive_rate(&self) -> f64 {
        if self.rows_written == 0 {
            return 0.0;
        }
        self.positive_labels as f64 / self.rows_written as f64
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize run summary")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write run summary to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::Duration;

    fn summary() -> RunSummary {
        let started_at = Utc::now();
        RunSummary {
            input: PathBuf::from("in.csv"),
            output: PathBuf::from("out.csv"),
            started_at,
            finished_at: started_at + Duration::milliseconds(250),
            rows_read: 10,
            games_resolved: 2,
            games_undecided: vec!["G2".to_string()],
            rows_without_winner: 4,
            rows_dropped: 2,
            rows_written: 8,
            positive_labels: 3,
        }
    }

    #[test]
    fn derived_metrics() {
        let s = summary();
        assert_eq!(s.elapsed_ms(), 250);
        assert_relative_eq!(s.positive_rate(), 0.375);
    }

    #[test]
    fn positive_rate_of_empty_output_is_zero() {
        let mut s = summary();
        s.rows_written = 0;
        s.positive_labels = 0;
        assert_relative_eq!(s.positive_rate(), 0.0);
    }

    #[test]
    fn json_file_contains_counters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        summary().write_json(&path).unwrap();

        let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(v["rows_read"], 10);
        assert_eq!(v["rows_written"], 8);
        assert_eq!(v["games_undecided"][0], "G2");
        assert_eq!(v["input"], "in.csv");
    }
}
