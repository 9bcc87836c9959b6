//! The cascade-engine and de-excitation contracts.
//!
//! Both collaborators are external physics models. The transport stage
//! owns exactly one boxed engine and at most one boxed de-excitation model
//! for its whole lifetime and calls them synchronously, one projectile at
//! a time.

use crate::outcome::CascadeOutcome;
use crate::species::{ParticleSpecies, ParticleType};

/// A particle handed to the engine, in engine units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineParticle {
    /// Engine particle type.
    pub kind: ParticleType,
    /// Total energy in MeV.
    pub energy: f64,
    /// Three-momentum in MeV/c.
    pub momentum: [f64; 3],
    /// Position in fm.
    pub position: [f64; 3],
}

/// An intranuclear cascade model.
///
/// # Contract
///
/// - Calls are blocking and have no side effects other than advancing
///   the engine's own random sequence.
/// - Each call sees only the nucleus passed to it; the engine cannot know
///   how many nucleons earlier calls in the same event removed.
///
/// # Object safety
///
/// This trait is object-safe; the transport stores the engine as
/// `Box<dyn CascadeEngine>`.
pub trait CascadeEngine: Send {
    /// Human-readable model name for logging.
    fn name(&self) -> &str;

    /// Shoot a projectile at a target nucleus from outside.
    ///
    /// Used once per event for hadron-nucleus and photon-nucleus events.
    fn process_projectile(
        &mut self,
        species: ParticleSpecies,
        kinetic_energy: f64,
        target_a: i32,
        target_z: i32,
    ) -> CascadeOutcome;

    /// Propagate a particle that already sits inside the nucleus.
    ///
    /// Used inside the transport loop for each eligible hadron.
    fn process_particle(
        &mut self,
        species: ParticleSpecies,
        particle: &EngineParticle,
        kinetic_energy: f64,
        remnant_a: i32,
        remnant_z: i32,
    ) -> CascadeOutcome;
}

/// A model that turns an excited remnant into emitted particles.
///
/// Implementations mutate the outcome's particle list and remnant in
/// place; a model that fully de-excites the remnant appends the residue
/// and leaves `remnant.a == 0`.
pub trait DeExcitation: Send {
    /// Human-readable model name for logging.
    fn name(&self) -> &str;

    /// De-excite the remnant of `outcome`.
    fn de_excite(&mut self, outcome: &mut CascadeOutcome);
}

/// The cascade collaborators owned by one transport instance.
///
/// The engine is mandatory; the de-excitation model is optional and its
/// absence is tolerated (remnants then pass through unchanged).
pub struct EngineHandles {
    engine: Box<dyn CascadeEngine>,
    de_excitation: Option<Box<dyn DeExcitation>>,
}

impl EngineHandles {
    /// Handles with an engine and no de-excitation model.
    pub fn new(engine: Box<dyn CascadeEngine>) -> Self {
        Self {
            engine,
            de_excitation: None,
        }
    }

    /// Attach a de-excitation model.
    pub fn with_de_excitation(mut self, model: Box<dyn DeExcitation>) -> Self {
        self.de_excitation = Some(model);
        self
    }

    /// The cascade engine.
    pub fn engine_mut(&mut self) -> &mut dyn CascadeEngine {
        &mut *self.engine
    }

    /// Name of the cascade engine.
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Name of the de-excitation model, if one is attached.
    pub fn de_excitation_name(&self) -> Option<&str> {
        self.de_excitation.as_deref().map(DeExcitation::name)
    }

    /// Whether a de-excitation model is attached.
    pub fn has_de_excitation(&self) -> bool {
        self.de_excitation.is_some()
    }

    /// Run the de-excitation model on `outcome`, if one is attached.
    ///
    /// Returns `true` if a model ran.
    pub fn de_excite(&mut self, outcome: &mut CascadeOutcome) -> bool {
        match self.de_excitation.as_mut() {
            Some(model) => {
                model.de_excite(outcome);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for EngineHandles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandles")
            .field("engine", &self.engine.name())
            .field("de_excitation", &self.de_excitation_name())
            .finish()
    }
}
