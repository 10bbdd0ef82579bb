use crate::error::WheelError;
use crate::geometry::clamp;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest integration step, in seconds.
const MAX_SUBSTEP: f64 = 0.001;
/// Frames longer than this are treated as a stall, not as elapsed physics time.
const MAX_FRAME: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
    pub overshoot_clamping: bool,
    pub rest_displacement_threshold: f64,
    pub rest_speed_threshold: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 20.0,
            stiffness: 150.0,
            mass: 1.0,
            overshoot_clamping: false,
            rest_displacement_threshold: 0.01,
            rest_speed_threshold: 2.0,
        }
    }
}

impl SpringConfig {
    pub fn validate(&self) -> Result<(), WheelError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(WheelError::InvalidSpring("mass must be positive"));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(WheelError::InvalidSpring("stiffness must be positive"));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(WheelError::InvalidSpring("damping must not be negative"));
        }
        if self.rest_displacement_threshold < 0.0 || self.rest_speed_threshold < 0.0 {
            return Err(WheelError::InvalidSpring("rest thresholds must not be negative"));
        }
        Ok(())
    }
}

/// Damped harmonic motion of a scalar toward a fixed target.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    from: f64,
    target: f64,
    value: f64,
    velocity: f64,
    settled: bool,
}

impl Spring {
    pub fn new(from: f64, target: f64, velocity: f64, config: SpringConfig) -> Self {
        let mut spring = Self {
            config,
            from,
            target,
            value: from,
            velocity,
            settled: false,
        };
        spring.check_rest();
        spring
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advances the simulation by `dt` and returns the new value.
    pub fn step(&mut self, dt: Duration) -> f64 {
        let mut remaining = clamp(dt.as_secs_f64(), 0.0, MAX_FRAME);

        while remaining > 0.0 && !self.settled {
            let h = remaining.min(MAX_SUBSTEP);
            remaining -= h;

            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;

            if self.config.overshoot_clamping && self.overshot() {
                self.finish();
                break;
            }
            self.check_rest();
        }

        self.value
    }

    fn overshot(&self) -> bool {
        if self.from < self.target {
            self.value >= self.target
        } else {
            self.value <= self.target
        }
    }

    fn check_rest(&mut self) {
        let near = (self.value - self.target).abs() < self.config.rest_displacement_threshold;
        let slow = self.velocity.abs() < self.config.rest_speed_threshold;
        if near && slow {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(16);

    fn run(spring: &mut Spring, frames: usize) -> Vec<f64> {
        (0..frames).map(|_| spring.step(FRAME)).collect()
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut spring = Spring::new(0.0, 1.0, 0.0, SpringConfig::default());
        run(&mut spring, 200);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 1.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn test_moves_toward_target() {
        let mut spring = Spring::new(2.0, 0.5, 0.0, SpringConfig::default());
        let values = run(&mut spring, 5);
        assert!(values[0] < 2.0);
        assert!(values[4] < values[0]);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let config = SpringConfig {
            damping: 2.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(0.0, 1.0, 0.0, config);
        let peak = run(&mut spring, 60).into_iter().fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_overshoot_clamping_stops_at_target() {
        let config = SpringConfig {
            damping: 2.0,
            overshoot_clamping: true,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(0.0, 1.0, 0.0, config);
        let values = run(&mut spring, 60);
        assert!(values.iter().all(|v| *v <= 1.0));
        assert!(spring.is_settled());
    }

    #[test]
    fn test_starts_settled_at_target() {
        let spring = Spring::new(3.0, 3.0, 0.0, SpringConfig::default());
        assert!(spring.is_settled());
    }

    #[test]
    fn test_validate() {
        assert!(SpringConfig::default().validate().is_ok());
        let bad = SpringConfig {
            mass: 0.0,
            ..SpringConfig::default()
        };
        assert!(matches!(bad.validate(), Err(WheelError::InvalidSpring(_))));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SpringConfig = serde_json::from_str(r#"{"damping": 18}"#).unwrap();
        assert_eq!(config.damping, 18.0);
        assert_eq!(config.stiffness, 150.0);
    }
}
