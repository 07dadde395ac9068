use std::time::Duration;

/// Whole or fractional seconds; rejects negative, NaN and infinite values
pub fn parse_duration_secs(s: &str) -> Result<Duration, String> {
    let secs: f64 = s.parse().map_err(|x| format!("{}", x))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("{} is not a usable number of seconds", s));
    }

    Ok(Duration::from_secs_f64(secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_secs_should_accept_fractions() {
        assert_eq!(parse_duration_secs("5"), Ok(Duration::from_secs(5)));
        assert_eq!(parse_duration_secs("0.25"), Ok(Duration::from_millis(250)));
    }

    #[test]
    fn parse_duration_secs_should_reject_unusable_values() {
        assert!(parse_duration_secs("inf").is_err());
        assert!(parse_duration_secs("NaN").is_err());
        assert!(parse_duration_secs("-1").is_err());
        assert!(parse_duration_secs("soon").is_err());
    }
}
