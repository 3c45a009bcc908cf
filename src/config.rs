use clap::Parser;
use std::path::PathBuf;

/// NFL play-by-play feature preparation
#[derive(Parser, Debug, Clone)]
#[command(name = "playprep", version, about)]
pub struct Config {
    /// Source play-by-play CSV (nflscrapR layout)
    #[arg(
        long,
        env = "PLAYPREP_INPUT",
        default_value = "NFL Play by Play 2009-2018 (v5).csv"
    )]
    pub input: PathBuf,

    /// Destination for the normalized feature table
    #[arg(long, env = "PLAYPREP_OUTPUT", default_value = "NormalizedPlayData.csv")]
    pub output: PathBuf,

    /// Optional path for a JSON run summary
    #[arg(long, env = "PLAYPREP_SUMMARY")]
    pub summary: Option<PathBuf>,

    /// Field delimiter used by both input and output
    #[arg(long, env = "PLAYPREP_DELIMITER", default_value = ",")]
    pub delimiter: char,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("delimiter must be a single ASCII character");
        }
        if matches!(self.delimiter, '"' | '\n' | '\r') {
            anyhow::bail!("delimiter cannot be a quote or line break");
        }
        if self.input == self.output {
            anyhow::bail!(
                "output path must differ from input path ({})",
                self.input.display()
            );
        }
        Ok(())
    }

    /// Delimiter as the byte the csv reader and writer expect.
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter as u8
    }
}
