//! Algorithm configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use marina_core::solver::strategies::{AnnealingParams, StrategyParams};
use marina_core::solver::{RunConfig, ScoreWeights, StrategyRegistry, get_default_registry};
use marina_core::utils::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies score weights.
    pub weights: Option<WeightsConfig>,
    /// Specifies run termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
    /// Specifies parameters of randomized strategies.
    pub strategies: Option<StrategiesConfig>,
}

/// Score weights configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct WeightsConfig {
    /// Placement rate weight.
    pub placement: f64,
    /// Utilization weight.
    pub utilization: f64,
}

/// A termination configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// An overall run deadline in seconds.
    pub max_time: Option<f64>,
}

/// An environment specific configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct EnvironmentConfig {
    /// A random seed.
    pub seed: Option<u64>,
    /// Max amount of strategies run in parallel. Default is number of cpus.
    pub parallelism: Option<usize>,
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
    /// Specifies a prefix prepended to every log message.
    pub prefix: Option<String>,
}

/// Parameters of randomized strategies.
#[derive(Clone, Debug, Deserialize)]
pub struct StrategiesConfig {
    /// Amount of random restarts. Default is 10.
    pub restarts: Option<usize>,
    /// Simulated annealing parameters.
    pub annealing: Option<AnnealingConfig>,
}

/// Simulated annealing configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnealingConfig {
    /// Amount of iterations. Default is 200.
    pub iterations: Option<usize>,
    /// Initial temperature. Default is 1.
    pub initial_temperature: Option<f64>,
    /// Cooling rate in (0, 1). Default is 0.95.
    pub cooling_rate: Option<f64>,
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a strategy registry: a default one when strategy parameters are not overridden.
pub fn create_registry_from_config(config: &Config) -> Result<Arc<StrategyRegistry>, GenericError> {
    let Some(strategies) = config.strategies.as_ref() else { return Ok(get_default_registry()) };

    let defaults = StrategyParams::default();
    let annealing = match strategies.annealing.as_ref() {
        Some(annealing) => AnnealingParams::new(
            annealing.iterations.unwrap_or(defaults.annealing.iterations),
            annealing.initial_temperature.unwrap_or(defaults.annealing.initial_temperature),
            annealing.cooling_rate.unwrap_or(defaults.annealing.cooling_rate),
        )?,
        None => defaults.annealing.clone(),
    };

    let params = StrategyParams { restarts: strategies.restarts.unwrap_or(defaults.restarts), annealing };

    Ok(Arc::new(StrategyRegistry::with_default_strategies(&params)))
}

/// Creates an environment: logging, parallelism and quota.
pub fn create_environment_from_config(
    config: &Config,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
    is_logging_forced: bool,
) -> Environment {
    let environment = config.environment.as_ref();
    let logging = environment.and_then(|environment| environment.logging.as_ref());
    let parallelism = environment.and_then(|environment| environment.parallelism).unwrap_or_else(get_cpus);

    let logger: InfoLogger = match (logging, is_logging_forced) {
        (Some(LoggingConfig { enabled: true, prefix }), _) => {
            let prefix = prefix.clone().unwrap_or_default();
            Arc::new(move |msg: &str| println!("{prefix}{msg}"))
        }
        (_, true) => Arc::new(|msg: &str| println!("{msg}")),
        _ => Arc::new(|_: &str| {}),
    };

    Environment::new(Arc::new(DefaultRandom::default()), quota, parallelism, logger)
}

/// Applies config overrides to the run configuration.
pub fn apply_config(config: &Config, run_config: RunConfig) -> Result<RunConfig, GenericError> {
    let mut run_config = run_config;

    if let Some(weights) = config.weights.as_ref() {
        run_config = run_config.with_weights(ScoreWeights::new(weights.placement, weights.utilization)?);
    }

    if let Some(max_time) = config.termination.as_ref().and_then(|termination| termination.max_time) {
        run_config = run_config.with_max_time(Some(max_time));
    }

    if let Some(environment) = config.environment.as_ref() {
        if let Some(seed) = environment.seed {
            run_config = run_config.with_seed(Some(seed));
        }

        if let Some(parallelism) = environment.parallelism {
            run_config = run_config.with_parallelism(Some(parallelism));
        }
    }

    run_config.validate()?;

    Ok(run_config)
}
