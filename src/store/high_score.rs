use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Plain-text high-score persistence.
///
/// The file holds a single integer. A missing or unparsable file reads
/// as zero rather than an error, so a fresh install starts clean.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the stored high score, defaulting to 0.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Persist `score` if it beats the stored value. Returns whether a
    /// write happened.
    pub fn record(&self, score: u32) -> Result<bool> {
        if score <= self.load() {
            return Ok(false);
        }
        fs::write(&self.path, score.to_string()).with_context(|| {
            format!("Failed to write high score to {}", self.path.display())
        })?;
        Ok(true)
    }
}
