//! Trapezoidal speed-profile math.
//!
//! A move accelerates uniformly toward a cruise speed, holds it, then
//! decelerates symmetrically. The cruise speed is whatever is reachable
//! over half the distance, clamped to the configured maximum; when the
//! maximum cannot be reached the profile degenerates to a triangle.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error(
        "profile inputs must be finite and non-negative \
         (distance {distance}, accel {accel}, max speed {max_speed})"
    )]
    InvalidInput {
        distance: f64,
        accel: f64,
        max_speed: f64,
    },
}

/// Speed reachable after accelerating uniformly over half the distance,
/// clamped to `max_speed`.
///
/// Zero distance or zero acceleration yields zero. Negative or non-finite
/// inputs are rejected before the square root is taken.
pub fn optimal_speed(distance: f64, accel: f64, max_speed: f64) -> Result<f64, ProfileError> {
    validate(distance, accel, max_speed)?;
    let halfway_speed = (2.0 * accel * (distance / 2.0)).sqrt();
    Ok(halfway_speed.min(max_speed))
}

fn validate(distance: f64, accel: f64, max_speed: f64) -> Result<(), ProfileError> {
    let finite = distance.is_finite() && accel.is_finite() && max_speed.is_finite();
    if !finite || distance < 0.0 || accel < 0.0 || max_speed < 0.0 {
        return Err(ProfileError::InvalidInput {
            distance,
            accel,
            max_speed,
        });
    }
    Ok(())
}

/// A planned trapezoidal move: accelerate, cruise, decelerate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedProfile {
    pub distance: f64,
    pub accel: f64,
    /// Cruise speed, equal to `optimal_speed` of the same inputs.
    pub cruise_v: f64,
    pub accel_t: f64,
    pub cruise_t: f64,
    pub decel_t: f64,
}

impl SpeedProfile {
    /// Plan a move over `distance` with uniform `accel` ramps, cruising at
    /// most at `max_speed`.
    pub fn plan(distance: f64, accel: f64, max_speed: f64) -> Result<Self, ProfileError> {
        let cruise_v = optimal_speed(distance, accel, max_speed)?;
        if cruise_v == 0.0 {
            // Nothing to plan: zero distance, acceleration, or speed cap.
            return Ok(SpeedProfile {
                distance,
                accel,
                ..SpeedProfile::default()
            });
        }

        let accel_t = cruise_v / accel;
        // Both ramps together cover cruise_v^2 / accel.
        let ramp_distance = cruise_v * accel_t;
        let cruise_t = ((distance - ramp_distance) / cruise_v).max(0.0);

        Ok(SpeedProfile {
            distance,
            accel,
            cruise_v,
            accel_t,
            cruise_t,
            decel_t: accel_t,
        })
    }

    /// Total move time.
    pub fn duration(&self) -> f64 {
        self.accel_t + self.cruise_t + self.decel_t
    }

    /// Instantaneous speed at `t`, clamped to the move's time range.
    pub fn speed_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, self.duration());
        if t < self.accel_t {
            self.accel * t
        } else if t < self.accel_t + self.cruise_t {
            self.cruise_v
        } else {
            self.accel * (self.duration() - t)
        }
    }
}
