#[cfg(test)]
#[path = "../../tests/unit/validation/config_test.rs"]
mod config_test;

use super::*;
use marina_core::utils::is_close;

/// Checks that score weights are non-negative and sum to one.
fn check_e1009_weights(config: &Config) -> Result<(), FormatError> {
    let Some(weights) = config.weights.as_ref() else { return Ok(()) };

    let is_valid_weight = |weight: f64| weight.is_finite() && weight >= 0.;
    let is_valid = is_valid_weight(weights.placement)
        && is_valid_weight(weights.utilization)
        && is_close(weights.placement + weights.utilization, 1., 1E-6);

    if is_valid {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1009".to_string(),
            "invalid score weights".to_string(),
            format!(
                "use non-negative weights which sum to 1.0, got placement={} and utilization={}",
                weights.placement, weights.utilization
            ),
        ))
    }
}

/// Checks max time, parallelism and planning horizon.
fn check_e1009_run_limits(config: &Config) -> Result<(), FormatError> {
    let invalid_max_time = config.max_time.is_some_and(|max_time| !is_positive(max_time));
    let invalid_parallelism = config.parallelism == Some(0);
    let invalid_horizon = config
        .horizon
        .as_ref()
        .and_then(|horizon| get_interval(&horizon.start, &horizon.end))
        .is_some_and(|(start, end)| start >= end);

    let fields = [("maxTime", invalid_max_time), ("parallelism", invalid_parallelism), ("horizon", invalid_horizon)]
        .into_iter()
        .filter(|(_, is_invalid)| *is_invalid)
        .map(|(field, _)| field.to_string())
        .collect::<Vec<_>>();

    check_ids(fields, |fields| {
        FormatError::new(
            "E1009".to_string(),
            "invalid run configuration".to_string(),
            format!("use positive max time and parallelism, horizon start before its end, check: {fields}"),
        )
    })
}

/// Validates run configuration.
pub fn validate_config(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    let Some(config) = ctx.request.config.as_ref() else { return Ok(()) };

    let errors =
        check_e1009_weights(config).err().into_iter().chain(check_e1009_run_limits(config).err()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
