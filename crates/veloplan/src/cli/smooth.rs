use crate::config::Config;
use anyhow::Result;
use clap::Args;
use veloplan_core::filter::smooth_speeds;

#[derive(Args)]
pub struct SmoothArgs {
    /// Speed samples to smooth. May be empty.
    pub values: Vec<f64>,

    /// Moving-average window size.
    ///
    /// Defaults to the configured value.
    #[arg(long, value_parser = parse_window)]
    pub window: Option<usize>,
}

impl SmoothArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let window = self.window.unwrap_or(config.filter.window);
        tracing::info!("smoothing {} samples, window {}", self.values.len(), window);

        let smoothed = smooth_speeds(&self.values, window)?;
        println!("{}", serde_json::to_string_pretty(&smoothed)?);
        Ok(())
    }
}

/// Accept only strictly positive window sizes, so negative and zero
/// values fail at argument parsing rather than deep in the filter.
fn parse_window(raw: &str) -> Result<usize, String> {
    match raw.parse::<i64>() {
        Ok(n) if n > 0 => Ok(n as usize),
        Ok(_) => Err("window size must be a positive integer".to_string()),
        Err(err) => Err(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_windows() {
        assert_eq!(parse_window("1"), Ok(1));
        assert_eq!(parse_window("42"), Ok(42));
    }

    #[test]
    fn rejects_zero_and_negative_windows() {
        assert!(parse_window("0").is_err());
        assert!(parse_window("-3").is_err());
    }

    #[test]
    fn rejects_non_integers() {
        assert!(parse_window("3.5").is_err());
        assert!(parse_window("wide").is_err());
    }
}
