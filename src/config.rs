//! Startup configuration for controllers and sinks.
//!
//! The external loader hands each module a plain struct deserialized from
//! its parameter block. Every tunable field carries a default so operators
//! only write the keys they care about; unknown keys are ignored, missing
//! required keys (environment, topic, variable bindings) fail
//! deserialization and abort startup. `validate()` is called once at
//! construction — violations are fatal, never recovered at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ───────────────────────────────────────────────────────────────
// Controller configuration
// ───────────────────────────────────────────────────────────────

/// Tunable parameters for one PID control loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControllerConfig {
    /// Proportional gain.
    #[serde(default)]
    pub kp: f64,
    /// Integral gain, applied to the accumulated error.
    #[serde(default)]
    pub ki: f64,
    /// Derivative gain, applied to the error delta between updates.
    #[serde(default)]
    pub kd: f64,
    /// Lower bound of the control effort.
    #[serde(default = "default_lower_limit")]
    pub lower_limit: f64,
    /// Upper bound of the control effort.
    #[serde(default = "default_upper_limit")]
    pub upper_limit: f64,
    /// Saturation bound for the error integrator.
    #[serde(default = "default_windup_limit")]
    pub windup_limit: f64,
    /// Commands with absolute value below this are published as exactly 0.
    #[serde(default)]
    pub deadband_width: f64,
    /// Name of the controlled variable; also keys the command topic.
    pub variable: String,
}

fn default_lower_limit() -> f64 {
    -1.0
}

fn default_upper_limit() -> f64 {
    1.0
}

fn default_windup_limit() -> f64 {
    1000.0
}

impl ControllerConfig {
    /// All-default tuning for `variable` (zero gains, limits ±1).
    pub fn for_variable(variable: impl Into<String>) -> Self {
        Self {
            kp: 0.0,
            ki: 0.0,
            kd: 0.0,
            lower_limit: default_lower_limit(),
            upper_limit: default_upper_limit(),
            windup_limit: default_windup_limit(),
            deadband_width: 0.0,
            variable: variable.into(),
        }
    }

    /// Range checks, run once at construction.
    pub fn validate(&self) -> Result<()> {
        if !(self.lower_limit <= self.upper_limit) {
            return Err(Error::Config("lower_limit must not exceed upper_limit"));
        }
        if !(self.windup_limit >= 0.0) {
            return Err(Error::Config("windup_limit must be non-negative"));
        }
        if !(self.deadband_width >= 0.0) {
            return Err(Error::Config("deadband_width must be non-negative"));
        }
        Ok(())
    }
}

// ───────────────────────────────────────────────────────────────
// Image sink configuration
// ───────────────────────────────────────────────────────────────

/// Parameters for one image-persistence subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSinkConfig {
    /// Id of the environment the camera observes.
    pub environment: String,
    /// Bus topic the raw frames arrive on.
    pub camera_topic: String,
    /// Minimum spacing between persisted frames, in seconds. Frames
    /// arriving faster than this are dropped without error.
    #[serde(default = "default_min_update_interval")]
    pub min_update_interval_secs: f64,
    /// Variable name recorded on the persisted data points.
    #[serde(default = "default_image_variable")]
    pub variable: String,
}

fn default_min_update_interval() -> f64 {
    3600.0
}

fn default_image_variable() -> String {
    "aerial_image".to_string()
}

impl ImageSinkConfig {
    /// Defaulted config for `environment` subscribing to `camera_topic`.
    pub fn new(environment: impl Into<String>, camera_topic: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            camera_topic: camera_topic.into(),
            min_update_interval_secs: default_min_update_interval(),
            variable: default_image_variable(),
        }
    }

    /// Range checks, run once at construction.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_update_interval_secs >= 0.0) {
            return Err(Error::Config(
                "min_update_interval_secs must be non-negative",
            ));
        }
        if self.environment.is_empty() {
            return Err(Error::Config("environment id must not be empty"));
        }
        Ok(())
    }
}
