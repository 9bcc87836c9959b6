//! Consolidation of buffered sub-cascade outcomes.
//!
//! Two strategies, chosen once per event from the primary process:
//!
//! - [`MergeMode::QuasiElastic`]: every outcome is de-excited on its own
//!   after the nucleus momentum is added to its remnant.
//! - [`MergeMode::ResonantOrDis`]: the sub-cascades shared one nucleus, so
//!   their remnants are summed into the last outcome, which alone is
//!   de-excited.
//!
//! The exception flush lives here too: when the budget runs out the
//! buffer is emptied without any attempt at conservation.

use nucascade_bridge::{CascadeOutcome, EngineHandles, ParticleSpecies, Remnant};
use nucascade_core::ProcessKind;

use crate::budget::{removed, ConservationBudget};
use crate::emit::Sink;
use crate::error::TransportError;

/// How buffered outcomes are merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MergeMode {
    /// Anything that is neither resonant nor deep-inelastic.
    QuasiElastic,
    /// Resonance production or deep-inelastic scattering.
    ResonantOrDis,
}

impl MergeMode {
    /// Resolve the mode for a primary process.
    pub fn for_process(process: ProcessKind) -> Self {
        if process.is_resonant() || process.is_deep_inelastic() {
            Self::ResonantOrDis
        } else {
            Self::QuasiElastic
        }
    }
}

/// One engine outcome waiting for the merge.
#[derive(Clone, Debug)]
pub(crate) struct BufferedOutcome {
    pub(crate) outcome: CascadeOutcome,
    /// Record index of the submitted particle.
    pub(crate) producer: usize,
    pub(crate) projectile: ParticleSpecies,
    /// (A, Z) the engine was called with.
    pub(crate) nucleus: (i32, i32),
}

fn de_excite(handles: &mut EngineHandles, sink: &mut Sink<'_>, outcome: &mut CascadeOutcome) {
    if handles.de_excite(outcome) {
        sink.summary.de_excitations += 1;
    }
}

/// Merge a non-empty buffer into the record.
pub(crate) fn merge(
    mode: MergeMode,
    buffer: Vec<BufferedOutcome>,
    budget: &ConservationBudget,
    nucleus_momentum: [f64; 3],
    handles: &mut EngineHandles,
    sink: &mut Sink<'_>,
) -> Result<(), TransportError> {
    sink.summary.merge_mode = Some(mode);
    match mode {
        MergeMode::QuasiElastic => merge_independent(buffer, nucleus_momentum, handles, sink),
        MergeMode::ResonantOrDis => merge_shared(buffer, budget, nucleus_momentum, handles, sink),
    }
}

fn merge_independent(
    buffer: Vec<BufferedOutcome>,
    nucleus_momentum: [f64; 3],
    handles: &mut EngineHandles,
    sink: &mut Sink<'_>,
) -> Result<(), TransportError> {
    let last = buffer.len().saturating_sub(1);
    for (k, mut slot) in buffer.into_iter().enumerate() {
        let rem = &mut slot.outcome.remnant;
        for (p, boost) in rem.momentum.iter_mut().zip(nucleus_momentum) {
            *p += boost;
        }
        de_excite(handles, sink, &mut slot.outcome);
        sink.emit_produced(&slot.outcome, slot.producer)?;
        // At most one residual nucleus per event.
        if k == last && !slot.outcome.remnant.is_empty() {
            sink.emit_remnant(&slot.outcome.remnant)?;
        }
    }
    Ok(())
}

fn merge_shared(
    mut buffer: Vec<BufferedOutcome>,
    budget: &ConservationBudget,
    nucleus_momentum: [f64; 3],
    handles: &mut EngineHandles,
    sink: &mut Sink<'_>,
) -> Result<(), TransportError> {
    let Some(mut last) = buffer.pop() else {
        return Ok(());
    };

    let (mut removed_a, mut removed_z) = (0, 0);
    let mut momentum = nucleus_momentum;
    let mut excitation = 0.0;
    for slot in buffer.iter().chain(std::iter::once(&last)) {
        let rem = &slot.outcome.remnant;
        removed_a += removed(slot.nucleus.0, slot.projectile.a, rem.a);
        removed_z += removed(slot.nucleus.1, slot.projectile.z, rem.z);
        for (p, q) in momentum.iter_mut().zip(rem.momentum) {
            *p += q;
        }
        excitation += rem.excitation;
    }

    for slot in &buffer {
        sink.emit_produced(&slot.outcome, slot.producer)?;
    }

    let (initial_a, initial_z) = budget.initial();
    let (transparent_a, transparent_z) = budget.transparent();
    last.outcome.remnant = Remnant {
        a: initial_a - removed_a - transparent_a,
        z: initial_z - removed_z - transparent_z,
        momentum,
        excitation,
    };
    de_excite(handles, sink, &mut last.outcome);
    sink.emit_produced(&last.outcome, last.producer)?;
    if !last.outcome.remnant.is_empty() {
        sink.emit_remnant(&last.outcome.remnant)?;
    }
    Ok(())
}

/// Empty the buffer after a budget violation.
///
/// Each outcome is de-excited, then a single running index walks the
/// slots: a slot emits its particle at that index only if it has one, and
/// the index advances only when something was emitted. No residual nucleus
/// is produced.
pub(crate) fn flush_without_conservation(
    buffer: &mut Vec<BufferedOutcome>,
    handles: &mut EngineHandles,
    sink: &mut Sink<'_>,
) -> Result<(), TransportError> {
    let mut n = 0;
    for mut slot in buffer.drain(..) {
        de_excite(handles, sink, &mut slot.outcome);
        if let Some(entry) = slot.outcome.particles.get(n) {
            sink.emit_entry(entry, slot.producer)?;
            n += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_the_process() {
        assert_eq!(MergeMode::for_process(ProcessKind::Resonant), MergeMode::ResonantOrDis);
        assert_eq!(
            MergeMode::for_process(ProcessKind::DeepInelastic),
            MergeMode::ResonantOrDis
        );
        for p in [
            ProcessKind::QuasiElastic,
            ProcessKind::Coherent,
            ProcessKind::MesonExchange,
            ProcessKind::Other,
        ] {
            assert_eq!(MergeMode::for_process(p), MergeMode::QuasiElastic);
        }
    }
}
