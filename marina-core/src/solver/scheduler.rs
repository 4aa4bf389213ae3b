#[cfg(test)]
#[path = "../../tests/unit/solver/scheduler_test.rs"]
mod scheduler_test;

use crate::models::RunError;
use crate::solver::{RunRequest, RunResult, Solver};
use crate::utils::{CancellationQuota, spawn_detached};
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A background run identifier.
pub type RunId = String;

/// A status of a background run.
#[derive(Clone, Debug)]
pub enum RunStatus {
    /// The run is not completed yet.
    Pending,
    /// The run is completed.
    Complete(Arc<RunResult>),
    /// The run failed with given reason.
    Failed(String),
}

impl RunStatus {
    /// Returns true when the run is not pending anymore.
    pub fn is_finished(&self) -> bool {
        !matches!(self, RunStatus::Pending)
    }
}

struct RunEntry {
    status: RunStatus,
    cancellation: CancellationQuota,
}

type RunTable = Arc<RwLock<FxHashMap<RunId, RunEntry>>>;

/// Executes runs in background and keeps their statuses for polling until they are forgotten.
pub struct RunScheduler {
    solver: Arc<Solver>,
    runs: RunTable,
}

impl RunScheduler {
    /// Creates a new instance of `RunScheduler`.
    pub fn new(solver: Arc<Solver>) -> Self {
        Self { solver, runs: Default::default() }
    }

    /// Validates the request and starts it in background. Returns run id immediately.
    pub fn submit(&self, request: RunRequest) -> Result<RunId, RunError> {
        self.solver.resolve(&request)?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let cancellation = CancellationQuota::default();

        write_runs(&self.runs, |runs| {
            runs.insert(run_id.clone(), RunEntry { status: RunStatus::Pending, cancellation: cancellation.clone() });
        });

        let solver = self.solver.clone();
        let runs = self.runs.clone();
        let id = run_id.clone();

        spawn_detached(move || {
            let status = match solver.run_with_quota(&request, Some(Arc::new(cancellation))) {
                Ok(result) => RunStatus::Complete(Arc::new(result)),
                Err(err) => RunStatus::Failed(err.to_string()),
            };

            (solver.environment().logger)(&format!("background run '{id}' finished"));

            write_runs(&runs, |runs| {
                if let Some(entry) = runs.get_mut(&id) {
                    entry.status = status;
                }
            });
        });

        Ok(run_id)
    }

    /// Returns a status of the run.
    pub fn status(&self, run_id: &str) -> Result<RunStatus, RunError> {
        let runs = self.runs.read().unwrap_or_else(|poisoned| poisoned.into_inner());

        runs.get(run_id).map(|entry| entry.status.clone()).ok_or_else(|| RunError::UnknownRun(run_id.to_string()))
    }

    /// Requests cooperative cancellation: running strategies stop and return partial results.
    pub fn cancel(&self, run_id: &str) -> Result<(), RunError> {
        let runs = self.runs.read().unwrap_or_else(|poisoned| poisoned.into_inner());

        runs.get(run_id)
            .map(|entry| entry.cancellation.cancel())
            .ok_or_else(|| RunError::UnknownRun(run_id.to_string()))
    }

    /// Removes the run and returns its last status. A pending run is cancelled and its result is dropped
    /// once finished.
    pub fn forget(&self, run_id: &str) -> Result<RunStatus, RunError> {
        let mut runs = self.runs.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        let entry = runs.remove(run_id).ok_or_else(|| RunError::UnknownRun(run_id.to_string()))?;

        if !entry.status.is_finished() {
            entry.cancellation.cancel();
        }

        Ok(entry.status)
    }

    /// Polls the run status until it is finished or timeout is elapsed. Returns last known status.
    pub fn wait(&self, run_id: &str, timeout: Duration) -> Result<RunStatus, RunError> {
        let started = Instant::now();

        loop {
            let status = self.status(run_id)?;
            if status.is_finished() || started.elapsed() >= timeout {
                return Ok(status);
            }

            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

fn write_runs(runs: &RunTable, action: impl FnOnce(&mut FxHashMap<RunId, RunEntry>)) {
    let mut runs = runs.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    action(&mut runs);
}
