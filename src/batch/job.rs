//! Jobs, outcomes and the aggregated batch report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::discovery::derive_output_path;
use crate::error::AsciiError;

/// One file to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Build one job per input, deriving outputs under `out_dir`.
pub fn plan_jobs(inputs: Vec<PathBuf>, out_dir: &Path, suffix: &str) -> Vec<ConversionJob> {
    inputs
        .into_iter()
        .map(|input| {
            let output = derive_output_path(&input, out_dir, suffix);
            ConversionJob { input, output }
        })
        .collect()
}

/// Terminal state of a job.
#[derive(Debug)]
pub enum JobStatus {
    Succeeded(PathBuf),
    Failed(AsciiError),
}

/// Result of one job, sent from a worker to the aggregator.
#[derive(Debug)]
pub struct JobOutcome {
    pub input: PathBuf,
    pub status: JobStatus,
}

impl JobOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, JobStatus::Succeeded(_))
    }

    /// Written path, if the job succeeded.
    pub fn output(&self) -> Option<&Path> {
        match &self.status {
            JobStatus::Succeeded(path) => Some(path),
            JobStatus::Failed(_) => None,
        }
    }

    /// Failure cause, if the job failed.
    pub fn error(&self) -> Option<&AsciiError> {
        match &self.status {
            JobStatus::Succeeded(_) => None,
            JobStatus::Failed(e) => Some(e),
        }
    }
}

/// All outcomes of a batch, in completion order.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<JobOutcome>,
}

impl BatchReport {
    pub fn new(outcomes: Vec<JobOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    /// Outcomes sorted by input path, for stable reporting.
    pub fn sorted(&self) -> Vec<&JobOutcome> {
        let mut sorted: Vec<&JobOutcome> = self.outcomes.iter().collect();
        sorted.sort_by(|a, b| a.input.cmp(&b.input));
        sorted
    }

    /// Serializable form of the report.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.len(),
            succeeded: self.succeeded(),
            failed: self.failed(),
            files: self
                .sorted()
                .into_iter()
                .map(|o| ReportEntry {
                    input: o.input.display().to_string(),
                    output: o.output().map(|p| p.display().to_string()),
                    error: o.error().map(|e| e.to_string()),
                })
                .collect(),
        }
    }
}

/// Machine-readable batch summary (`--json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<ReportEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
