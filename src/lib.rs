//! GrowRig control-and-sink core.
//!
//! Event-driven modules forming the control and telemetry path of a
//! distributed environmental-control rig: a discrete PID controller that
//! turns desired/measured pairs into actuator commands, and two persistence
//! sinks that turn inbound measurements and camera frames into data-point
//! records in a document store.
//!
//! All I/O flows through port traits ([`DataStore`], [`CommandBus`])
//! injected at call sites, so the entire core is testable with mock
//! adapters and carries no transport or database client of its own.

#![deny(unused_must_use)]

pub mod config;
pub mod control;
pub mod events;
pub mod png;
pub mod ports;
pub mod sinks;

mod error;

pub use config::{ControllerConfig, ImageSinkConfig};
pub use control::{ControlChannel, Pid};
pub use error::{Error, Result};
pub use events::{CommandEvent, DataPoint, ImageFrame, Measurement, PixelEncoding, Timestamp};
pub use ports::{CommandBus, DataStore, DocId, Revision, StoreError};
pub use sinks::{FrameOutcome, ImageSink, RateGate, ScalarSink};
