//! Scalar data-point persistence.

use log::{debug, error};

use crate::error::{Error, Result};
use crate::events::{DataPoint, Measurement};
use crate::ports::DataStore;

/// Persists every desired and measured sample for an environment.
///
/// No rate gate: scalar writes are cheap and every sample is retained.
/// Delivery to the store is at-most-once per inbound event — a failed
/// write is reported and the event dropped, with no retry queue.
pub struct ScalarSink {
    environment: String,
}

impl ScalarSink {
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }

    /// Handle a set-point event for `variable`.
    pub fn on_desired(
        &self,
        variable: &str,
        sample: &Measurement,
        store: &mut impl DataStore,
    ) -> Result<()> {
        self.persist(variable, sample, true, store)
    }

    /// Handle a measured event for `variable`.
    pub fn on_measured(
        &self,
        variable: &str,
        sample: &Measurement,
        store: &mut impl DataStore,
    ) -> Result<()> {
        self.persist(variable, sample, false, store)
    }

    fn persist(
        &self,
        variable: &str,
        sample: &Measurement,
        is_desired: bool,
        store: &mut impl DataStore,
    ) -> Result<()> {
        let point = DataPoint {
            environment: self.environment.clone(),
            variable: variable.to_string(),
            is_desired,
            value: Some(sample.value),
            timestamp: sample.timestamp,
        };
        match store.create_record(&point) {
            Ok((id, _rev)) => {
                debug!("{}/{variable}: stored data point {id}", self.environment);
                Ok(())
            }
            Err(e) => {
                error!(
                    "{}/{variable}: dropping sample, store write failed: {e}",
                    self.environment
                );
                Err(Error::Store(e))
            }
        }
    }
}
