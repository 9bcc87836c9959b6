//! Conversions between particle records and engine particles.

use nucascade_core::{pdg, LorentzVector, Particle, Status};

use crate::engine::EngineParticle;
use crate::error::BridgeError;
use crate::mass;
use crate::outcome::{ProducedParticle, Remnant};
use crate::species::{from_engine_species, to_engine_species, ParticleSpecies};
use crate::units::{to_engine_kinematics, to_generator_momentum, MEV_PER_GEV};

/// Everything the engine needs to propagate one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Submission {
    /// Engine species with (A, Z).
    pub species: ParticleSpecies,
    /// The particle in engine units.
    pub particle: EngineParticle,
    /// Kinetic energy in MeV (`E - m_real`).
    pub kinetic_energy: f64,
}

/// Prepare a particle record for submission to the engine.
///
/// Returns `None` if the species is not one the engine can transport.
pub fn to_submission(particle: &Particle) -> Option<Submission> {
    let species = to_engine_species(particle.pdg)?;
    let mass = species.kind.real_mass_mev()?;
    let kin = to_engine_kinematics(&particle.p4, &particle.x4);
    Some(Submission {
        species,
        particle: EngineParticle {
            kind: species.kind,
            energy: kin.energy,
            momentum: kin.momentum,
            position: kin.position,
        },
        kinetic_energy: kin.energy - mass,
    })
}

/// Convert one produced particle into a record entry.
///
/// `mother` becomes the first mother and `nucleus` the last mother.
pub fn from_engine_particle(
    entry: &ProducedParticle,
    status: Status,
    mother: usize,
    nucleus: Option<usize>,
) -> Result<Particle, BridgeError> {
    let code =
        from_engine_species(&entry.species).ok_or(BridgeError::UnknownSpecies(entry.species))?;
    let mass = entry
        .species
        .mass_mev()
        .ok_or(BridgeError::UnknownSpecies(entry.species))?;
    let p = to_generator_momentum(entry.momentum);
    let e = (entry.kinetic_energy + mass) / MEV_PER_GEV;
    Ok(
        Particle::new(code, status, LorentzVector::new(p[0], p[1], p[2], e), LorentzVector::ZERO)
            .with_mothers(Some(mother), nucleus),
    )
}

/// Convert a remnant into a nuclear record entry.
///
/// The entry is put on shell with the table mass plus the excitation energy.
pub fn remnant_particle(
    remnant: &Remnant,
    status: Status,
    mother: Option<usize>,
    nucleus: Option<usize>,
) -> Result<Particle, BridgeError> {
    let invalid = BridgeError::InvalidRemnant {
        a: remnant.a,
        z: remnant.z,
    };
    let a = u32::try_from(remnant.a).map_err(|_| invalid.clone())?;
    let z = u32::try_from(remnant.z).map_err(|_| invalid.clone())?;
    if a == 0 || z > a {
        return Err(invalid);
    }
    let m = (mass::nuclear_mass_mev(a, z) + remnant.excitation.max(0.0)) / MEV_PER_GEV;
    let p4 = LorentzVector::on_shell(to_generator_momentum(remnant.momentum), m);
    Ok(Particle::new(pdg::nucleus(a, z), status, p4, LorentzVector::ZERO).with_mothers(mother, nucleus))
}
