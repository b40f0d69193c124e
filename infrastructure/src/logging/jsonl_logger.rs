//! JSONL session transcript.
//!
//! One line per [`SessionEvent`]:
//!
//! ```text
//! {"timestamp":"...","type":"vote_recorded","feature_index":0,"round":2,"data":{"player_id":"player-1","card":"5"}}
//! ```
//!
//! `data` is left out for events without details.

use scrum_poker_application::{SessionEvent, SessionEventLogger};
use serde::Serialize;
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    timestamp: String,
    #[serde(rename = "type")]
    kind: &'a str,
    feature_index: usize,
    round: u32,
    #[serde(skip_serializing_if = "is_null")]
    data: &'a Value,
}

fn is_null(value: &&Value) -> bool {
    value.is_null()
}

/// Appends session events to a JSONL file.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Resumed sessions keep writing to
/// the same transcript.
pub struct JsonlSessionLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlSessionLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create session log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open session log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionEventLogger for JsonlSessionLogger {
    fn log(&self, event: SessionEvent) {
        let line = TranscriptLine {
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            kind: event.kind,
            feature_index: event.position.feature_index,
            round: event.position.round,
            data: &event.payload,
        };

        let Ok(line) = serde_json::to_string(&line) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlSessionLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
