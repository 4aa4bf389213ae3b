use crate::utils::{DefaultRandom, Quota, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engine.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Amount of threads used to run strategies.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: usize,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism, logger }
    }

    /// Returns a copy of environment which uses a repeatable random generator with the given seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..self.clone() }
    }

    /// Returns a copy of environment with the given quota.
    pub fn with_quota(&self, quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { quota, ..self.clone() }
    }

    /// Checks whether the quota, if any, is reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, get_cpus(), Arc::new(|msg: &str| println!("{msg}")))
    }
}
