#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::{Float, Timer};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Specifies a computational quota for a placement run.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota: reached once the time limit has elapsed since its creation.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// A quota driven by an external flag, used to cancel a run cooperatively.
#[derive(Clone, Default)]
pub struct CancellationQuota {
    flag: Arc<AtomicBool>,
}

impl CancellationQuota {
    /// Raises the cancellation flag.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

impl Quota for CancellationQuota {
    fn is_reached(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// A quota which is reached as soon as any of inner quotas is reached.
pub struct CompositeQuota {
    inners: Vec<Arc<dyn Quota + Send + Sync>>,
}

impl CompositeQuota {
    /// Creates a new instance of `CompositeQuota`.
    pub fn new(inners: Vec<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { inners }
    }
}

impl Quota for CompositeQuota {
    fn is_reached(&self) -> bool {
        self.inners.iter().any(|quota| quota.is_reached())
    }
}
