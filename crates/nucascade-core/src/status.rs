//! Particle status vocabulary of the event record.

use serde::{Deserialize, Serialize};

/// Where a particle sits in the life cycle of an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Not yet classified.
    #[default]
    Undefined,
    /// Initial-state particle (probe, target nucleus).
    InitialState,
    /// Terminal: leaves the event as a measurable particle.
    StableFinalState,
    /// Transient marker; the particle was superseded by later entries.
    IntermediateState,
    /// Particle that decayed inside the record.
    DecayedState,
    /// Hit nucleon inside the target.
    NucleonTarget,
    /// Hadron produced inside the nucleus, awaiting transport.
    HadronInTheNucleus,
    /// Terminal: the residual nucleus after transport.
    FinalStateNuclearRemnant,
}

impl Status {
    /// Whether the status marks a particle that leaves the event.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::StableFinalState | Self::FinalStateNuclearRemnant)
    }
}
