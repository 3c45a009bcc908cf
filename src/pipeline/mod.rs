pub mod annotate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod winner;
pub mod writer;

use chrono::Utc;
use tracing::{info, warn};

use crate::config::Config;
use crate::summary::RunSummary;
use error::Result;
use models::{FeatureRow, PlayRecord};

/// Feature rows plus the bookkeeping gathered while producing them.
#[derive(Debug, Clone)]
pub struct Prepared {
    pub rows: Vec<FeatureRow>,
    pub games_resolved: usize,
    pub games_undecided: Vec<String>,
    pub rows_without_winner: usize,
    pub rows_dropped: usize,
}

/// Resolve winners, annotate, filter and normalize an in-memory play table.
pub fn prepare(plays: Vec<PlayRecord>) -> Prepared {
    let winners = winner::resolve_winners(&plays);
    let games_undecided: Vec<String> = winners
        .iter()
        .filter(|w| w.winner.is_none())
        .map(|w| w.game_id.clone())
        .collect();
    info!("Resolved winners for {} game(s)", winners.len());
    if !games_undecided.is_empty() {
        warn!(
            "{} game(s) ended level or without a final differential; their plays are labelled posteam_won=0",
            games_undecided.len()
        );
    }

    let annotated = annotate::annotate(plays, &winners);
    let rows_without_winner = annotated.iter().filter(|p| p.winner.is_none()).count();

    let (complete, rows_dropped) = filter::drop_incomplete(annotated);
    if rows_dropped > 0 {
        info!("Dropped {} play(s) with missing values", rows_dropped);
    }

    Prepared {
        rows: normalize::normalize_all(&complete),
        games_resolved: winners.len(),
        games_undecided,
        rows_without_winner,
        rows_dropped,
    }
}

/// Run the full load → prepare → write pipeline described by `config`.
pub fn run(config: &Config) -> Result<RunSummary> {
    let started_at = Utc::now();
    let delimiter = config.delimiter_byte();

    let plays = loader::load_plays(&config.input, delimiter)?;
    let rows_read = plays.len();

    let prepared = prepare(plays);
    writer::write_features(&config.output, &prepared.rows, delimiter)?;

    Ok(RunSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        started_at,
        finished_at: Utc::now(),
        rows_read,
        games_resolved: prepared.games_resolved,
        games_undecided: prepared.games_undecided,
        rows_without_winner: prepared.rows_without_winner,
        rows_dropped: prepared.rows_dropped,
        rows_written: prepared.rows.len(),
        positive_labels: prepared.rows.iter().filter(|r| r.posteam_won == 1).count(),
    })
}
