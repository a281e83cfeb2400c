//! Discrete PID controller with anti-windup, deadband, and output clamping.
//!
//! Pure computation, no I/O. One instance per controlled variable; the
//! bus-facing wrapper in [`super`] owns the instance and publishes its
//! outputs. Retains only the previous error and the bounded integrator, so
//! memory is O(1) per update.

use crate::config::ControllerConfig;
use crate::error::Result;

/// Discrete PID control loop state.
pub struct Pid {
    kp: f64,
    ki: f64,
    kd: f64,
    lower_limit: f64,
    upper_limit: f64,
    windup_limit: f64,
    deadband_width: f64,
    /// Last received set point; `None` until the first desired value
    /// arrives, during which no output is ever produced.
    set_point: Option<f64>,
    last_error: f64,
    integrator: f64,
}

impl Pid {
    /// Build a controller from validated configuration.
    pub fn new(config: &ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            kp: config.kp,
            ki: config.ki,
            kd: config.kd,
            lower_limit: config.lower_limit,
            upper_limit: config.upper_limit,
            windup_limit: config.windup_limit,
            deadband_width: config.deadband_width,
            set_point: None,
            last_error: 0.0,
            integrator: 0.0,
        })
    }

    /// Record a new set point. Takes effect on the next [`update`];
    /// produces no immediate output.
    ///
    /// [`update`]: Self::update
    pub fn set_desired(&mut self, value: f64) {
        self.set_point = Some(value);
    }

    /// Compute one control step against `measured`.
    ///
    /// Returns `None` until a set point has been received — downstream must
    /// not command actuators without a target, and "no output" is distinct
    /// from the deadband's explicit `Some(0.0)`.
    pub fn update(&mut self, measured: f64) -> Option<f64> {
        let set_point = self.set_point?;

        let error = set_point - measured;

        let p = self.kp * error;

        let d = self.kd * (error - self.last_error);
        self.last_error = error;

        // Accumulate fully, then clamp — runs every call, saturated or not.
        self.integrator = (self.integrator + error).clamp(-self.windup_limit, self.windup_limit);
        let i = self.ki * self.integrator;

        let output = (p + i + d).clamp(self.lower_limit, self.upper_limit);

        if output.abs() < self.deadband_width {
            Some(0.0)
        } else {
            Some(output)
        }
    }

    /// Current set point, if one has been received.
    pub fn set_point(&self) -> Option<f64> {
        self.set_point
    }

    /// Current integrator value (bounded by the windup limit).
    pub fn integrator(&self) -> f64 {
        self.integrator
    }
}
