//! Persistence sinks.
//!
//! Each sink instance owns one bus subscription and converts its inbound
//! events into data-point records via the [`DataStore`] port. Instances
//! process events strictly sequentially in arrival order; back-pressure is
//! the bus's responsibility.
//!
//! [`DataStore`]: crate::ports::DataStore

pub mod gate;
pub mod image;
pub mod scalar;

pub use gate::RateGate;
pub use image::{FrameOutcome, ImageSink};
pub use scalar::ScalarSink;
