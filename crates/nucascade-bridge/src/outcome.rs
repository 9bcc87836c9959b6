//! The result of one cascade-engine call.

use smallvec::SmallVec;

use crate::species::ParticleSpecies;

/// A particle emitted by the cascade, in engine units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProducedParticle {
    /// Species type with (A, Z).
    pub species: ParticleSpecies,
    /// Kinetic energy in MeV.
    pub kinetic_energy: f64,
    /// Three-momentum in MeV/c.
    pub momentum: [f64; 3],
}

/// The excited nuclear remnant left behind by a cascade call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Remnant {
    /// Mass number.
    pub a: i32,
    /// Charge number.
    pub z: i32,
    /// Recoil momentum in MeV/c.
    pub momentum: [f64; 3],
    /// Excitation energy in MeV.
    pub excitation: f64,
}

impl Remnant {
    /// Whether there is no nucleus left (A <= 0).
    pub fn is_empty(&self) -> bool {
        self.a <= 0
    }
}

/// Outcome of a single cascade-engine call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CascadeOutcome {
    /// The projectile crossed the nucleus without interacting.
    pub transparent: bool,
    /// Particles emitted from the nucleus.
    pub particles: SmallVec<[ProducedParticle; 8]>,
    /// The residual nucleus.
    pub remnant: Remnant,
}

impl CascadeOutcome {
    /// A transparent outcome: nothing emitted, nucleus untouched.
    pub fn transparent(remnant_a: i32, remnant_z: i32) -> Self {
        Self {
            transparent: true,
            particles: SmallVec::new(),
            remnant: Remnant {
                a: remnant_a,
                z: remnant_z,
                ..Remnant::default()
            },
        }
    }

    /// Number of emitted particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether no particle was emitted.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Total mass number of the emitted particles.
    pub fn produced_a(&self) -> i32 {
        self.particles.iter().map(|p| p.species.a).sum()
    }

    /// Total charge of the emitted particles.
    pub fn produced_z(&self) -> i32 {
        self.particles.iter().map(|p| p.species.z).sum()
    }
}
