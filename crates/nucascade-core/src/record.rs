//! The event record: an ordered list of particles plus event summary.

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::particle::Particle;
use crate::status::Status;

/// How the event was generated; selects the transport strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Lepton (neutrino, electron) scattering off a nuclear target.
    LeptonNucleus,
    /// Hadron beam on a nuclear target.
    HadronNucleus,
    /// Photon beam on a nuclear target.
    PhotonNucleus,
    /// Bound nucleon decay.
    NucleonDecay,
    /// Bound neutron-antineutron oscillation.
    NeutronOscillation,
}

/// Scattering process of the primary interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Quasi-elastic scattering.
    QuasiElastic,
    /// Baryon resonance production.
    Resonant,
    /// Deep-inelastic scattering.
    DeepInelastic,
    /// Coherent scattering off the whole nucleus.
    Coherent,
    /// Multi-nucleon (meson exchange current) scattering.
    MesonExchange,
    /// Anything else.
    #[default]
    Other,
}

impl ProcessKind {
    /// Whether the process is baryon resonance production.
    pub fn is_resonant(self) -> bool {
        self == Self::Resonant
    }

    /// Whether the process is deep-inelastic scattering.
    pub fn is_deep_inelastic(self) -> bool {
        self == Self::DeepInelastic
    }
}

/// A generated event.
///
/// Appending through [`add_particle`](Self::add_particle) keeps the
/// mother's daughter range up to date.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    particles: Vec<Particle>,
    weight: f64,
    mode: GenerationMode,
    process: ProcessKind,
}

impl EventRecord {
    /// Empty record with unit weight.
    pub fn new(mode: GenerationMode, process: ProcessKind) -> Self {
        Self {
            particles: Vec::new(),
            weight: 1.0,
            mode,
            process,
        }
    }

    /// Generation mode of the event.
    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Primary scattering process.
    pub fn process(&self) -> ProcessKind {
        self.process
    }

    /// Event weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the event weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the record has no entries.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// All entries in record order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Entry at `index`.
    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    /// Mutable entry at `index`.
    pub fn particle_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    /// Append a particle and link it into its first mother's daughter range.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::MotherOutOfRange`] if the first mother does not
    /// refer to an existing entry; the record is left unchanged.
    pub fn add_particle(&mut self, particle: Particle) -> Result<usize, RecordError> {
        let index = self.particles.len();
        if let Some(mother) = particle.first_mother {
            let len = self.particles.len();
            let m = self
                .particles
                .get_mut(mother)
                .ok_or(RecordError::MotherOutOfRange { mother, len })?;
            m.first_daughter = Some(m.first_daughter.map_or(index, |d| d.min(index)));
            m.last_daughter = Some(m.last_daughter.map_or(index, |d| d.max(index)));
        }
        self.particles.push(particle);
        Ok(index)
    }

    /// Position of the probe; always the first entry.
    pub fn probe_position(&self) -> Option<usize> {
        (!self.particles.is_empty()).then_some(0)
    }

    /// Position of the target nucleus (the first initial-state nucleus or
    /// free nucleon after the probe).
    pub fn target_nucleus_position(&self) -> Option<usize> {
        self.particles
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, p)| p.status == Status::InitialState && p.a().is_some())
            .map(|(i, _)| i)
    }

    /// Position of the remnant nucleus: the nuclear daughter of the target
    /// that carries on to the final state.
    pub fn remnant_nucleus_position(&self) -> Option<usize> {
        let target = self.target_nucleus_position()?;
        self.particles
            .iter()
            .enumerate()
            .find(|(_, p)| {
                p.first_mother == Some(target)
                    && p.pdg.is_ion()
                    && matches!(
                        p.status,
                        Status::StableFinalState | Status::FinalStateNuclearRemnant
                    )
            })
            .map(|(i, _)| i)
    }

    /// The final-state primary lepton: the first lepton daughter of the probe.
    pub fn final_state_primary_lepton(&self) -> Option<&Particle> {
        self.particles
            .iter()
            .skip(1)
            .find(|p| p.first_mother == Some(0) && (11..=16).contains(&p.pdg.0.abs()))
    }

    /// Iterate over `(index, particle)` pairs whose status is `status`.
    pub fn with_status(&self, status: Status) -> impl Iterator<Item = (usize, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.status == status)
    }
}
