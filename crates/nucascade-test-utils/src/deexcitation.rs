//! Mock de-excitation models.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nucascade_bridge::{
    to_engine_species, CascadeOutcome, DeExcitation, ParticleSpecies, ParticleType,
    ProducedParticle, Remnant,
};
use nucascade_core::pdg;

/// Counts calls and leaves the outcome untouched.
#[derive(Clone, Debug, Default)]
pub struct CountingDeExcitation {
    calls: Arc<AtomicUsize>,
}

impl CountingDeExcitation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared counter; clone it before boxing the model.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DeExcitation for CountingDeExcitation {
    fn name(&self) -> &str {
        "counting"
    }

    fn de_excite(&mut self, _outcome: &mut CascadeOutcome) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Consumes the whole remnant.
///
/// An excited remnant with a spare neutron evaporates one neutron; the
/// residue is then appended as a fragment (or a bare nucleon) and the
/// remnant is left empty.
#[derive(Clone, Debug, Default)]
pub struct EvaporatingDeExcitation {
    calls: Arc<AtomicUsize>,
}

impl EvaporatingDeExcitation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl DeExcitation for EvaporatingDeExcitation {
    fn name(&self) -> &str {
        "evaporating"
    }

    fn de_excite(&mut self, outcome: &mut CascadeOutcome) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut rem = outcome.remnant;
        if rem.is_empty() {
            return;
        }

        if rem.excitation > 0.0 && rem.a >= 2 && rem.a > rem.z {
            if let Some(neutron) = to_engine_species(pdg::NEUTRON) {
                outcome.particles.push(ProducedParticle {
                    species: neutron,
                    kinetic_energy: rem.excitation.min(8.0),
                    momentum: [0.0; 3],
                });
                rem.a -= 1;
            }
        }

        let residue = match (rem.a, rem.z) {
            (1, 1) => to_engine_species(pdg::PROTON),
            (1, 0) => to_engine_species(pdg::NEUTRON),
            (a, z) => Some(ParticleSpecies {
                kind: ParticleType::Composite,
                a,
                z,
            }),
        };
        if let Some(species) = residue {
            outcome.particles.push(ProducedParticle {
                species,
                kinetic_energy: 0.0,
                momentum: rem.momentum,
            });
        }
        outcome.remnant = Remnant::default();
    }
}
