//! Per-scenario step reports, serialisable as one JSON result file per run.

use crate::HarnessError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const EPIC: &str = "Petstore API";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    /// The presence assertion rejected a response.
    Failed,
    /// Anything else stopped the scenario: transport, serialization, bad request.
    Broken,
}

impl Outcome {
    pub fn from_error(error: &HarnessError) -> Self {
        if error.is_assertion() {
            Outcome::Failed
        } else {
            Outcome::Broken
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    pub name: String,
    pub method: String,
    pub path: String,
    pub status_code: Option<u16>,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub run_id: Uuid,
    pub epic: String,
    pub feature: String,
    pub story: String,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub outcome: Outcome,
    pub steps: Vec<StepRecord>,
}

impl ScenarioReport {
    pub fn new(name: &str, feature: &str, story: &str) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            epic: EPIC.to_string(),
            feature: feature.to_string(),
            story: story.to_string(),
            name: name.to_string(),
            started_at: Utc::now(),
            finished_at: None,
            outcome: Outcome::Passed,
            steps: Vec::new(),
        }
    }

    pub fn push_step(&mut self, step: StepRecord) {
        if step.outcome != Outcome::Passed && self.outcome == Outcome::Passed {
            self.outcome = step.outcome;
        }
        self.steps.push(step);
    }

    /// Close the report. An error overrides a passing outcome even when it
    /// happened outside any step (for example while building a payload).
    pub fn finish(&mut self, error: Option<&HarnessError>) {
        if let Some(error) = error {
            if self.outcome == Outcome::Passed {
                self.outcome = Outcome::from_error(error);
            }
        }
        self.finished_at = Some(Utc::now());
    }

    pub fn is_passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    pub fn file_name(&self) -> String {
        format!("{}-result.json", self.run_id)
    }

    pub fn to_json_pretty(&self) -> Result<String, HarnessError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| HarnessError::from_serialization_error(e, "scenario report"))
    }

    /// Write `{run_id}-result.json` into `dir`, creating it if needed.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, HarnessError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .map_err(|e| HarnessError::from_report_io_error(e, &dir.display().to_string()))?;

        let path = dir.join(self.file_name());
        std::fs::write(&path, self.to_json_pretty()?)
            .map_err(|e| HarnessError::from_report_io_error(e, &path.display().to_string()))?;

        Ok(path)
    }
}
