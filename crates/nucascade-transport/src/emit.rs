//! Appending transport products to the event record.

use nucascade_bridge::{
    from_engine_particle, remnant_particle, CascadeOutcome, ProducedParticle, Remnant,
};
use nucascade_core::{EventRecord, Particle, RecordError, Status};
use tracing::warn;

use crate::error::TransportError;
use crate::summary::TransportSummary;

/// Writes into one event record on behalf of one transport pass.
///
/// Every produced particle gets the nucleus entry as its last mother;
/// residual nuclei get it as their first.
pub(crate) struct Sink<'a> {
    pub(crate) record: &'a mut EventRecord,
    pub(crate) nucleus: usize,
    pub(crate) summary: TransportSummary,
}

impl<'a> Sink<'a> {
    pub(crate) fn new(record: &'a mut EventRecord, nucleus: usize) -> Self {
        Self {
            record,
            nucleus,
            summary: TransportSummary::default(),
        }
    }

    pub(crate) fn push(&mut self, particle: Particle) -> Result<usize, TransportError> {
        let index = self.record.add_particle(particle)?;
        self.summary.emitted += 1;
        Ok(index)
    }

    /// Copy entry `index` out as a stable final-state particle mothered by
    /// itself.
    pub(crate) fn emit_unchanged(&mut self, index: usize) -> Result<usize, TransportError> {
        let len = self.record.len();
        let mut copy = self
            .record
            .particle(index)
            .cloned()
            .ok_or(RecordError::IndexOutOfRange { index, len })?;
        copy.status = Status::StableFinalState;
        copy.first_mother = Some(index);
        copy.last_mother = None;
        copy.first_daughter = None;
        copy.last_daughter = None;
        self.push(copy)
    }

    /// Emit every produced particle of `outcome`.
    pub(crate) fn emit_produced(
        &mut self,
        outcome: &CascadeOutcome,
        producer: usize,
    ) -> Result<(), TransportError> {
        for entry in &outcome.particles {
            self.emit_entry(entry, producer)?;
        }
        Ok(())
    }

    /// Emit one produced particle.
    pub(crate) fn emit_entry(
        &mut self,
        entry: &ProducedParticle,
        producer: usize,
    ) -> Result<usize, TransportError> {
        let particle =
            from_engine_particle(entry, Status::StableFinalState, producer, Some(self.nucleus))?;
        self.push(particle)
    }

    /// Emit the residual nucleus.
    ///
    /// A remnant that is not a valid nucleus is logged and dropped.
    pub(crate) fn emit_remnant(&mut self, remnant: &Remnant) -> Result<(), TransportError> {
        match remnant_particle(
            remnant,
            Status::FinalStateNuclearRemnant,
            Some(self.nucleus),
            None,
        ) {
            Ok(particle) => {
                self.push(particle)?;
                self.summary.remnant_emitted = true;
            }
            Err(e) => warn!(error = %e, "dropping residual nucleus"),
        }
        Ok(())
    }
}
