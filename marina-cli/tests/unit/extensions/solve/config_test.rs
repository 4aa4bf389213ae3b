use super::*;
use std::fs::File;

const FULL_CONFIG_PATH: &str = "../demos/data/config.full.json";

fn read_config_from_str(json: &str) -> Result<Config, GenericError> {
    read_config(BufReader::new(json.as_bytes()))
}

#[test]
fn can_read_full_config() {
    let config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();

    let weights = config.weights.as_ref().unwrap();
    assert_eq!((weights.placement, weights.utilization), (0.6, 0.4));
    assert_eq!(config.termination.as_ref().and_then(|termination| termination.max_time), Some(30.));

    let environment = config.environment.as_ref().unwrap();
    assert_eq!(environment.seed, Some(7));
    assert_eq!(environment.parallelism, Some(2));
    assert_eq!(environment.logging.as_ref().map(|logging| logging.enabled), Some(true));

    let annealing = config.strategies.as_ref().and_then(|strategies| strategies.annealing.as_ref()).unwrap();
    assert_eq!(annealing.iterations, Some(100));
    assert_eq!(annealing.initial_temperature, Some(2.));
    assert_eq!(annealing.cooling_rate, Some(0.9));
}

#[test]
fn can_read_empty_config() {
    let config = read_config_from_str("{}").unwrap();

    assert!(config.weights.is_none());
    assert!(config.termination.is_none());
    assert!(config.environment.is_none());
    assert!(config.strategies.is_none());
}

#[test]
fn can_return_error_for_malformed_config() {
    let result = read_config_from_str("{ \"weights\": 1 }");

    assert!(result.unwrap_err().to_string().starts_with("cannot deserialize config"));
}

#[test]
fn can_apply_config_to_run_config() {
    let config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();

    let run_config = apply_config(&config, RunConfig::default().with_seed(Some(42))).unwrap();

    assert_eq!(run_config.weights.placement(), 0.6);
    assert_eq!(run_config.weights.utilization(), 0.4);
    assert_eq!(run_config.max_time, Some(30.));
    assert_eq!(run_config.seed, Some(7));
    assert_eq!(run_config.parallelism, Some(2));
}

parameterized_test! {can_validate_weights_when_applied, (placement, utilization, is_ok), {
    can_validate_weights_when_applied_impl(placement, utilization, is_ok);
}}

can_validate_weights_when_applied! {
    case_01_valid: (0.5, 0.5, true),
    case_02_sum_is_not_one: (0.5, 0.6, false),
    case_03_negative: (-0.5, 1.5, false),
}

fn can_validate_weights_when_applied_impl(placement: f64, utilization: f64, is_ok: bool) {
    let config = Config { weights: Some(WeightsConfig { placement, utilization }), ..Config::default() };

    let result = apply_config(&config, RunConfig::default());

    assert_eq!(result.is_ok(), is_ok);
}

#[test]
fn can_create_default_registry_without_strategy_params() {
    let registry = create_registry_from_config(&Config::default()).unwrap();

    assert!(Arc::ptr_eq(&registry, &get_default_registry()));
}

parameterized_test! {can_validate_annealing_params, (initial_temperature, cooling_rate, is_ok), {
    can_validate_annealing_params_impl(initial_temperature, cooling_rate, is_ok);
}}

can_validate_annealing_params! {
    case_01_valid: (1., 0.95, true),
    case_02_zero_temperature: (0., 0.95, false),
    case_03_cooling_rate_is_one: (1., 1., false),
    case_04_cooling_rate_is_zero: (1., 0., false),
}

fn can_validate_annealing_params_impl(initial_temperature: f64, cooling_rate: f64, is_ok: bool) {
    let config = Config {
        strategies: Some(StrategiesConfig {
            restarts: Some(3),
            annealing: Some(AnnealingConfig {
                iterations: None,
                initial_temperature: Some(initial_temperature),
                cooling_rate: Some(cooling_rate),
            }),
        }),
        ..Config::default()
    };

    let result = create_registry_from_config(&config);

    assert_eq!(result.is_ok(), is_ok);
    if let Ok(registry) = result {
        assert_eq!(registry.catalog().len(), 13);
    }
}

#[test]
fn can_create_environment_from_config() {
    let config = read_config(BufReader::new(File::open(FULL_CONFIG_PATH).unwrap())).unwrap();

    let environment = create_environment_from_config(&config, None, false);

    assert_eq!(environment.parallelism, 2);
    assert!(environment.quota.is_none());
}

#[test]
fn can_use_cpus_as_default_parallelism() {
    let environment = create_environment_from_config(&Config::default(), None, true);

    assert_eq!(environment.parallelism, get_cpus());
}
