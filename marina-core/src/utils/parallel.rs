#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`, returns an error when the pool cannot be built.
    pub fn new(num_threads: usize) -> Result<Self, String> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| format!("cannot build a thread pool: '{err}'"))
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Runs given operation in background on the global pool, detached from the caller.
pub fn spawn_detached<OP>(op: OP)
where
    OP: FnOnce() + Send + 'static,
{
    rayon::spawn(op)
}
