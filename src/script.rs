//! Replays CSV key scripts through a [`CalculatorEngine`].
//!
//! A key script has a single `key` column holding keypad labels. Rows are
//! read one at a time; unknown labels and malformed rows are logged at warn
//! level and skipped.

use crate::config::EngineConfig;
use crate::engine::CalculatorEngine;
use crate::error::{EngineError, Result};
use crate::key::KeyRecord;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::Serialize;
use std::io::{Read, Write};

/// Display after one replayed key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptEntry {
    /// 1-based count of accepted keys.
    pub step: usize,

    /// Canonical label of the key, e.g. `×` for `x`.
    pub key: String,

    pub display: String,
}

/// Drives an engine from key scripts and records what it displayed.
pub struct ScriptRunner {
    engine: CalculatorEngine,
    transcript: Vec<TranscriptEntry>,
}

impl ScriptRunner {
    pub fn new(config: EngineConfig) -> Self {
        ScriptRunner {
            engine: CalculatorEngine::with_config(config),
            transcript: Vec::new(),
        }
    }

    /// Replays keys from a CSV reader in streaming fashion.
    ///
    /// Engine state carries over between calls, so several scripts can be
    /// fed to one runner.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<KeyRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => match record.parse() {
                    Some(event) => {
                        let snapshot = self.engine.apply(event);
                        debug!("Row {}: {} -> {:?}", row_num, event, snapshot.display);
                        self.transcript.push(TranscriptEntry {
                            step: self.transcript.len() + 1,
                            key: event.to_string(),
                            display: snapshot.display,
                        });
                    }
                    None => {
                        let e = EngineError::UnknownKey {
                            row: row_num,
                            label: record.key,
                        };
                        warn!("{}", e);
                    }
                },
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Writes the transcript as CSV with header `step,key,display`.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["step", "key", "display"])?;
        for entry in &self.transcript {
            csv_writer.write_record([
                entry.step.to_string(),
                entry.key.clone(),
                entry.display.clone(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes only the final display text followed by a newline.
    pub fn write_final<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.engine.display_text())?;
        Ok(())
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
