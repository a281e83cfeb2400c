//! Event and record types crossing the core's boundaries.
//!
//! Inbound events are delivered by the external pub/sub bus; outbound
//! [`CommandEvent`]s go back out through the [`CommandBus`] port and
//! [`DataPoint`] records go to the store through the [`DataStore`] port.
//!
//! [`CommandBus`]: crate::ports::CommandBus
//! [`DataStore`]: crate::ports::DataStore

use serde::{Deserialize, Serialize};

/// Wall-clock seconds since the Unix epoch, as stored in data points.
pub type Timestamp = f64;

// ───────────────────────────────────────────────────────────────
// Inbound events
// ───────────────────────────────────────────────────────────────

/// A desired (set-point) or measured sample for one variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    /// Capture time as reported by the producer.
    pub timestamp: Timestamp,
}

/// One raw camera frame as delivered on an image topic.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageFrame {
    pub width: u32,
    pub height: u32,
    /// Wire name of the pixel encoding, e.g. `"rgb8"`.
    pub encoding: String,
    /// Packed pixel rows, `width * height * bytes_per_pixel` bytes.
    pub data: Vec<u8>,
}

/// Pixel encodings the image sink understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelEncoding {
    Rgb8,
    Rgba8,
}

impl PixelEncoding {
    /// Map a wire encoding name to a supported encoding, `None` otherwise.
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "rgb8" => Some(Self::Rgb8),
            "rgba8" => Some(Self::Rgba8),
            _ => None,
        }
    }

    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Outbound events
// ───────────────────────────────────────────────────────────────

/// One actuator command, published once per controller update that yields
/// an output (including the explicit-zero deadband case).
#[derive(Debug, Clone, PartialEq)]
pub struct CommandEvent {
    pub variable: String,
    pub value: f64,
}

// ───────────────────────────────────────────────────────────────
// Store records
// ───────────────────────────────────────────────────────────────

/// One observation or command at a point in time, persisted as a JSON
/// document.
///
/// `(environment, variable, is_desired, timestamp)` is the logical
/// identity. `value` is `None` only for records that carry a binary
/// attachment instead of a scalar payload. Records are immutable once
/// created, except for the image sink's attachment-add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub environment: String,
    pub variable: String,
    pub is_desired: bool,
    pub value: Option<f64>,
    pub timestamp: Timestamp,
}
