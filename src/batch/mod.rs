//! Concurrent batch conversion.
//!
//! A fixed pool of worker threads pulls [`ConversionJob`]s from a bounded job
//! channel and pushes exactly one [`JobOutcome`] per job onto a result
//! channel. The calling thread drains results until it has one outcome per
//! job. A job that returns an error becomes a `Failed` outcome and the batch
//! carries on; a worker that panics takes the whole batch down with it.

mod job;

use std::path::PathBuf;
use std::thread;

use crossbeam_channel::{bounded, unbounded};

use crate::discovery::ensure_allowed_format;
use crate::error::Result;
use crate::render::{AsciiRenderer, GlyphRasterizer};

pub use job::{
    plan_jobs, BatchReport, ConversionJob, JobOutcome, JobStatus, ReportEntry, ReportSummary,
};

/// Default number of worker threads.
pub const DEFAULT_WORKERS: usize = 5;

/// Fan-out/fan-in runner for conversion jobs.
#[derive(Debug, Clone, Copy)]
pub struct BatchPipeline {
    workers: usize,
}

impl Default for BatchPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_WORKERS)
    }
}

impl BatchPipeline {
    /// Pipeline with `workers` threads (at least one).
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Convert every job with `renderer`.
    ///
    /// Inputs without an allowed image extension fail without being read.
    pub fn convert<F: GlyphRasterizer>(
        &self,
        jobs: Vec<ConversionJob>,
        renderer: &AsciiRenderer<F>,
    ) -> BatchReport {
        self.run(jobs, |job| {
            ensure_allowed_format(&job.input, "input")?;
            renderer.convert_file(&job.input, &job.output)?;
            Ok(job.output.clone())
        })
    }

    /// Run `process` over every job and collect one outcome per job.
    ///
    /// Outcomes arrive in completion order, not submission order.
    ///
    /// # Panics
    ///
    /// Re-raises the panic of any worker thread once the others have
    /// drained.
    pub fn run<P>(&self, jobs: Vec<ConversionJob>, process: P) -> BatchReport
    where
        P: Fn(&ConversionJob) -> Result<PathBuf> + Sync,
    {
        let total = jobs.len();
        if total == 0 {
            return BatchReport::default();
        }

        let workers = self.workers.min(total);
        let (job_tx, job_rx) = bounded::<ConversionJob>(workers);
        let (outcome_tx, outcome_rx) = unbounded::<JobOutcome>();
        let mut outcomes = Vec::with_capacity(total);

        thread::scope(|scope| {
            let process = &process;

            for _ in 0..workers {
                let job_rx = job_rx.clone();
                let outcome_tx = outcome_tx.clone();
                scope.spawn(move || {
                    for job in job_rx {
                        let status = match process(&job) {
                            Ok(output) => JobStatus::Succeeded(output),
                            Err(e) => JobStatus::Failed(e),
                        };
                        let outcome = JobOutcome {
                            input: job.input,
                            status,
                        };
                        if outcome_tx.send(outcome).is_err() {
                            break;
                        }
                    }
                });
            }

            // Only workers may hold these, so the channels disconnect once
            // every worker has exited.
            drop(job_rx);
            drop(outcome_tx);

            scope.spawn(move || {
                for job in jobs {
                    if job_tx.send(job).is_err() {
                        break;
                    }
                }
            });

            while outcomes.len() < total {
                match outcome_rx.recv() {
                    Ok(outcome) => outcomes.push(outcome),
                    Err(_) => break,
                }
            }
        });

        BatchReport::new(outcomes)
    }
}
