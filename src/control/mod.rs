//! Control loop modules.
//!
//! [`Pid`] is the pure algorithm; [`ControlChannel`] binds one instance to
//! its bus subscription, turning desired/measured events into published
//! actuator commands. Channels for different variables are fully
//! independent and share no state.

pub mod pid;

pub use pid::Pid;

use log::debug;

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::events::CommandEvent;
use crate::ports::CommandBus;

/// One variable's control loop, as seen from the bus.
///
/// The external binder subscribes it to `desired/<variable>` and
/// `measured/<variable>` and hands it the command-publishing capability on
/// each measured event.
pub struct ControlChannel {
    pid: Pid,
    variable: String,
}

impl ControlChannel {
    /// Build a channel from validated configuration.
    pub fn new(config: &ControllerConfig) -> Result<Self> {
        let pid = Pid::new(config)?;
        Ok(Self {
            pid,
            variable: config.variable.clone(),
        })
    }

    /// Name of the controlled variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Handle a set-point event. No output until the next measured event.
    pub fn on_desired(&mut self, value: f64) {
        debug!("{}: set point {}", self.variable, value);
        self.pid.set_desired(value);
    }

    /// Handle a measured event: run one control step and publish the
    /// command if the controller produced one. The deadband's explicit
    /// zero is published; the no-set-point case publishes nothing.
    pub fn on_measured(&mut self, value: f64, bus: &mut impl CommandBus) {
        if let Some(output) = self.pid.update(value) {
            bus.publish(&CommandEvent {
                variable: self.variable.clone(),
                value: output,
            });
        }
    }
}
