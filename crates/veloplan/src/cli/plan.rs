use crate::config::Config;
use anyhow::Result;
use clap::Args;
use veloplan_core::profile::{SpeedProfile, optimal_speed};

#[derive(Args)]
pub struct PlanArgs {
    /// Distance to travel in meters.
    pub distance: f64,

    /// Acceleration rate in m/s^2.
    ///
    /// Defaults to the configured value.
    #[arg(long)]
    pub accel: Option<f64>,

    /// Maximum allowable speed in m/s.
    ///
    /// Defaults to the configured value.
    #[arg(long)]
    pub max_speed: Option<f64>,

    /// Print the full trapezoidal profile as JSON instead of just the
    /// cruise speed.
    #[arg(long)]
    pub profile: bool,
}

impl PlanArgs {
    pub fn run(&self, config: &Config) -> Result<()> {
        let accel = self.accel.unwrap_or(config.planner.accel);
        let max_speed = self.max_speed.unwrap_or(config.planner.max_speed);

        tracing::info!(
            "planning {} m move at {} m/s^2, max {} m/s",
            self.distance,
            accel,
            max_speed
        );

        if self.profile {
            let profile = SpeedProfile::plan(self.distance, accel, max_speed)?;
            let rendered = serde_json::json!({
                "distance": profile.distance,
                "accel": profile.accel,
                "cruise_v": profile.cruise_v,
                "accel_t": profile.accel_t,
                "cruise_t": profile.cruise_t,
                "decel_t": profile.decel_t,
                "duration": profile.duration(),
            });
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        } else {
            let speed = optimal_speed(self.distance, accel, max_speed)?;
            println!("{speed}");
        }

        Ok(())
    }
}
