use super::ConfigError;
use std::time::Duration;

/// Parses durations in the forms accepted by the `--timeout` flag:
/// `250ms`, `5s`, `1.5s`, `2m`, or a bare number of seconds.
pub fn parse_duration(input: &str) -> Result<Duration, ConfigError> {
    let value = input.trim();
    let invalid = || ConfigError::InvalidDuration(input.to_string());

    let (number, unit_secs) = if let Some(n) = value.strip_suffix("ms") {
        (n, 0.001)
    } else if let Some(n) = value.strip_suffix('s') {
        (n, 1.0)
    } else if let Some(n) = value.strip_suffix('m') {
        (n, 60.0)
    } else {
        (value, 1.0)
    };

    let number: f64 = number.trim().parse().map_err(|_| invalid())?;
    if !number.is_finite() || number < 0.0 {
        return Err(invalid());
    }

    Duration::try_from_secs_f64(number * unit_secs).map_err(|_| invalid())
}
