//! JSON file holding the last completed projection
//!
//! The file is a JSON object; only the `last_simulation` key is owned here and
//! any other keys are preserved on write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::projection::ProjectionResult;

/// Default data file next to the working directory
pub const DEFAULT_DATA_FILE: &str = "simulation_data.json";

const LAST_SIMULATION_KEY: &str = "last_simulation";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Stored record of the last completed questionnaire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastSimulation {
    pub result: ProjectionResult,
    pub timestamp: String,
}

/// Summary shown before a new questionnaire starts
#[derive(Debug, Clone, PartialEq)]
pub struct HomeSummary {
    pub total_savings: i64,
    pub yearly_savings: f64,
    pub advice: String,
    pub timestamp: String,
    /// Start age and trajectory of the last run, if any
    pub trajectory: Option<(u32, Vec<i64>)>,
}

impl HomeSummary {
    pub const PLACEHOLDER_ADVICE: &'static str = "Run a simulation to see your projection.";
    pub const NEVER_RUN: &'static str = "never";

    pub fn from_last(last: Option<&LastSimulation>) -> Self {
        match last {
            Some(last) => Self {
                total_savings: last.result.total_savings,
                yearly_savings: last.result.yearly_savings,
                advice: last.result.advice.clone(),
                timestamp: last.timestamp.clone(),
                trajectory: Some((last.result.start_age, last.result.asset_trajectory.clone())),
            },
            None => Self {
                total_savings: 0,
                yearly_savings: 0.0,
                advice: Self::PLACEHOLDER_ADVICE.to_string(),
                timestamp: Self::NEVER_RUN.to_string(),
                trajectory: None,
            },
        }
    }
}

/// File-backed store for the last result
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole data file; a missing or blank file is an empty object
    fn load_data(&self) -> Result<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(Error::io(&self.path, e)),
        };

        if text.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str(&text)? {
            Value::Object(map) => Ok(map),
            other => Err(Error::Storage(format!(
                "{} holds {} instead of an object",
                self.path.display(),
                json_kind(&other)
            ))),
        }
    }

    fn save_data(&self, data: &Map<String, Value>) -> Result<()> {
        let text = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, text).map_err(|e| Error::io(&self.path, e))
    }

    /// Replace the stored last result, stamping it with the current time
    pub fn save_simulation_result(&self, result: &ProjectionResult) -> Result<LastSimulation> {
        let mut data = self.load_data()?;
        let record = LastSimulation {
            result: result.clone(),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        data.insert(LAST_SIMULATION_KEY.to_string(), serde_json::to_value(&record)?);
        self.save_data(&data)?;

        log::info!("Saved last simulation to {}", self.path.display());
        Ok(record)
    }

    /// Stored last result, None when nothing has been saved
    pub fn load_last_simulation_result(&self) -> Result<Option<LastSimulation>> {
        let mut data = self.load_data()?;
        match data.remove(LAST_SIMULATION_KEY) {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => {
                log::info!("No previous simulation in {}", self.path.display());
                Ok(None)
            }
        }
    }

    pub fn home_summary(&self) -> Result<HomeSummary> {
        let last = self.load_last_simulation_result()?;
        Ok(HomeSummary::from_last(last.as_ref()))
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
