//! Optional JSONL log of gameplay events.
//!
//! One JSON object per line, tagged by `type`. Write failures disable the
//! log instead of interrupting play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::ClearCommit;
use crate::types::PlacementEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    Placement {
        episode_id: u32,
        piece_id: u32,
        shape: &'static str,
        row: i8,
        col: i8,
        cells_placed: u32,
        rows_cleared: u32,
        cols_cleared: u32,
        points: u32,
        score: u32,
        high_score: u32,
        refilled: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        feedback: Option<&'static str>,
    },
    ClearCommitted {
        episode_id: u32,
        cells_cleared: u32,
        game_over: bool,
    },
    GameOver {
        episode_id: u32,
        score: u32,
        high_score: u32,
        placements: u32,
    },
    Restart {
        episode_id: u32,
        seed: u32,
    },
}

impl GameEvent {
    pub fn placement(episode_id: u32, ev: &PlacementEvent) -> Self {
        GameEvent::Placement {
            episode_id,
            piece_id: ev.piece_id,
            shape: ev.shape.as_str(),
            row: ev.row,
            col: ev.col,
            cells_placed: ev.cells_placed,
            rows_cleared: ev.rows_cleared,
            cols_cleared: ev.cols_cleared,
            points: ev.points,
            score: ev.score,
            high_score: ev.high_score,
            refilled: ev.refilled,
            feedback: ev.feedback.map(|f| f.message),
        }
    }

    pub fn clear_committed(episode_id: u32, commit: ClearCommit) -> Self {
        GameEvent::ClearCommitted {
            episode_id,
            cells_cleared: commit.cells_cleared,
            game_over: commit.game_over,
        }
    }
}

/// Appends events to a file, one JSON line each.
pub struct EventLog {
    out: Option<BufWriter<File>>,
    buf: Vec<u8>,
}

impl EventLog {
    /// A log that drops every event.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Open `path` for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self {
            out: Some(BufWriter::new(file)),
            buf: Vec::with_capacity(512),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn record(&mut self, event: &GameEvent) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, event).is_err() {
            return;
        }
        self.buf.push(b'\n');
        if out.write_all(&self.buf).is_err() {
            self.out = None;
        }
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if out.flush().is_err() {
                self.out = None;
            }
        }
    }
}

impl Drop for EventLog {
    fn drop(&mut self) {
        self.flush();
    }
}
