//! High-score persistence.
//!
//! The best score is kept in a small JSON file: `{"high_score": 1230}`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct HighScoreFile {
    high_score: u32,
}

/// File-backed high score
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
    best: u32,
}

impl HighScoreStore {
    /// Open the store, reading the current best if the file exists.
    ///
    /// A missing file means no score yet. An unreadable or malformed file
    /// also starts from zero; the error is returned alongside so the caller
    /// can report it.
    pub fn open(path: impl Into<PathBuf>) -> (Self, Option<anyhow::Error>) {
        let path = path.into();
        match read_best(&path) {
            Ok(best) => (Self { path, best }, None),
            Err(err) => (Self { path, best: 0 }, Some(err)),
        }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score; writes the file only when it beats the stored best.
    ///
    /// Returns whether the file was updated.
    pub fn record(&mut self, score: u32) -> Result<bool> {
        if score <= self.best {
            return Ok(false);
        }
        self.best = score;
        self.save()?;
        Ok(true)
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string(&HighScoreFile {
            high_score: self.best,
        })?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }
        fs::write(&self.path, json).with_context(|| format!("writing {}", self.path.display()))
    }
}

fn read_best(path: &Path) -> Result<u32> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err).with_context(|| format!("reading {}", path.display())),
    };
    let file: HighScoreFile = serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(file.high_score)
}
