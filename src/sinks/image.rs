//! Image frame persistence.

use log::{debug, error, info, warn};

use crate::config::ImageSinkConfig;
use crate::error::{Error, Result};
use crate::events::{DataPoint, ImageFrame, PixelEncoding, Timestamp};
use crate::png;
use crate::ports::{DataStore, DocId, Revision};

/// What happened to one inbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Record created and PNG attached.
    Persisted { id: DocId, revision: Revision },
    /// Dropped by the rate gate. Expected steady-state behavior, not a
    /// fault.
    RateLimited,
}

/// Persists rate-limited camera frames as data points with PNG attachments.
///
/// The write is two-phase: create the record, then attach the encoded
/// bytes keyed to the record's identity and current revision. The phases
/// are not atomic — an attachment failure after a successful record write
/// leaves an orphan record with no image. The orphan is left in place; see
/// [`Error::PartialPersistence`].
pub struct ImageSink {
    environment: String,
    variable: String,
    gate: super::RateGate,
}

impl ImageSink {
    /// Build a sink from validated configuration.
    pub fn new(config: &ImageSinkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            environment: config.environment.clone(),
            variable: config.variable.clone(),
            gate: super::RateGate::new(config.min_update_interval_secs),
        })
    }

    /// Handle one inbound frame, captured at `now`.
    ///
    /// An unsupported pixel encoding or malformed payload is fatal for the
    /// frame only — the sink keeps running for subsequent frames.
    pub fn on_frame(
        &mut self,
        frame: &ImageFrame,
        now: Timestamp,
        store: &mut impl DataStore,
    ) -> Result<FrameOutcome> {
        if !self.gate.try_fire(now) {
            debug!("{}: frame dropped by rate gate", self.environment);
            return Ok(FrameOutcome::RateLimited);
        }

        let encoding = PixelEncoding::from_wire(&frame.encoding).ok_or_else(|| {
            error!(
                "{}: dropping frame with unsupported encoding {:?}",
                self.environment, frame.encoding
            );
            Error::UnsupportedEncoding(frame.encoding.clone())
        })?;
        let bytes = png::encode(frame.width, frame.height, encoding, &frame.data)?;

        info!(
            "{}: posting {}x{} image",
            self.environment, frame.width, frame.height
        );
        let point = DataPoint {
            environment: self.environment.clone(),
            variable: self.variable.clone(),
            is_desired: false,
            value: None,
            timestamp: now,
        };
        let (id, rev) = store.create_record(&point).map_err(|e| {
            error!("{}: dropping frame, record write failed: {e}", self.environment);
            Error::Store(e)
        })?;

        match store.attach_binary(&id, &rev, "image", "image/png", &bytes) {
            Ok(revision) => Ok(FrameOutcome::Persisted { id, revision }),
            Err(e) => {
                // Distinct from a plain store failure: the record exists
                // but carries no image. Compensating deletes are not
                // attempted; the orphan is left for operators to find.
                warn!(
                    "{}: attachment write failed, record {id} left without image: {e}",
                    self.environment
                );
                Err(Error::PartialPersistence { id })
            }
        }
    }
}
