//! Mock cascade engines.
//!
//! - [`ScriptedEngine`]: replays a queue of canned outcomes.
//! - [`ToyCascade`]: seeded random knock-out model that conserves (A, Z)
//!   on every call.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use nucascade_bridge::{
    to_engine_species, CascadeEngine, CascadeOutcome, EngineParticle, ParticleSpecies,
    ParticleType, ProducedParticle, Remnant,
};
use nucascade_core::{pdg, Pdg};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

// ── Builders ───────────────────────────────────────────────────────

/// A produced particle of species `code` with the given kinetic energy
/// (MeV) and momentum (MeV/c).
///
/// Ion codes become composite fragments.
pub fn produced(code: Pdg, kinetic_energy: f64, momentum: [f64; 3]) -> ProducedParticle {
    let species = to_engine_species(code).unwrap_or_else(|| match code {
        pdg::GAMMA => ParticleSpecies {
            kind: ParticleType::Photon,
            a: 0,
            z: 0,
        },
        c if c.is_ion() => ParticleSpecies {
            kind: ParticleType::Composite,
            a: c.ion_a().map_or(0, |a| a as i32),
            z: c.ion_z().map_or(0, |z| z as i32),
        },
        _ => ParticleSpecies {
            kind: ParticleType::Unknown,
            a: 0,
            z: 0,
        },
    });
    ProducedParticle {
        species,
        kinetic_energy,
        momentum,
    }
}

/// A non-transparent outcome with the given particles and remnant (A, Z).
pub fn outcome(particles: Vec<ProducedParticle>, remnant_a: i32, remnant_z: i32) -> CascadeOutcome {
    CascadeOutcome {
        transparent: false,
        particles: SmallVec::from_vec(particles),
        remnant: Remnant {
            a: remnant_a,
            z: remnant_z,
            ..Remnant::default()
        },
    }
}

// ── Call log ───────────────────────────────────────────────────────

/// One recorded engine call.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineCall {
    Projectile {
        species: ParticleSpecies,
        kinetic_energy: f64,
        target_a: i32,
        target_z: i32,
    },
    Particle {
        species: ParticleSpecies,
        kinetic_energy: f64,
        remnant_a: i32,
        remnant_z: i32,
    },
}

/// Shared handle to an engine's call log.
///
/// Clone it before boxing the engine; the clone keeps observing calls.
#[derive(Clone, Debug, Default)]
pub struct CallLog(Arc<Mutex<Vec<EngineCall>>>);

impl CallLog {
    fn push(&self, call: EngineCall) {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);
    }

    /// Snapshot of every call so far.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── ScriptedEngine ─────────────────────────────────────────────────

/// Replays a queue of outcomes, one per call.
///
/// Once the queue is exhausted every call returns a transparent outcome
/// that leaves the submitted nucleus untouched.
pub struct ScriptedEngine {
    outcomes: VecDeque<CascadeOutcome>,
    log: CallLog,
}

impl ScriptedEngine {
    pub fn new(outcomes: impl IntoIterator<Item = CascadeOutcome>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            log: CallLog::default(),
        }
    }

    /// An engine that always answers transparent.
    pub fn transparent() -> Self {
        Self::new(std::iter::empty())
    }

    /// Handle to the call log.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn next(&mut self, a: i32, z: i32) -> CascadeOutcome {
        self.outcomes
            .pop_front()
            .unwrap_or_else(|| CascadeOutcome::transparent(a, z))
    }
}

impl CascadeEngine for ScriptedEngine {
    fn name(&self) -> &str {
        "scripted"
    }

    fn process_projectile(
        &mut self,
        species: ParticleSpecies,
        kinetic_energy: f64,
        target_a: i32,
        target_z: i32,
    ) -> CascadeOutcome {
        self.log.push(EngineCall::Projectile {
            species,
            kinetic_energy,
            target_a,
            target_z,
        });
        self.next(target_a, target_z)
    }

    fn process_particle(
        &mut self,
        species: ParticleSpecies,
        _particle: &EngineParticle,
        kinetic_energy: f64,
        remnant_a: i32,
        remnant_z: i32,
    ) -> CascadeOutcome {
        self.log.push(EngineCall::Particle {
            species,
            kinetic_energy,
            remnant_a,
            remnant_z,
        });
        self.next(remnant_a, remnant_z)
    }
}

// ── ToyCascade ─────────────────────────────────────────────────────

/// A seeded knock-out model.
///
/// Each call either passes the projectile through (probability
/// `transparency`) or re-emits it together with up to `max_knockout`
/// nucleons drawn from the nucleus. Produced (A, Z) plus remnant (A, Z)
/// always equals nucleus (A, Z) plus projectile (A, Z).
pub struct ToyCascade {
    rng: ChaCha8Rng,
    transparency: f64,
    max_knockout: i32,
    log: CallLog,
}

impl ToyCascade {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            transparency: 0.2,
            max_knockout: 2,
            log: CallLog::default(),
        }
    }

    pub fn with_transparency(mut self, transparency: f64) -> Self {
        self.transparency = transparency.clamp(0.0, 1.0);
        self
    }

    pub fn with_max_knockout(mut self, max_knockout: i32) -> Self {
        self.max_knockout = max_knockout.max(0);
        self
    }

    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    fn knock_out(
        &mut self,
        species: ParticleSpecies,
        kinetic_energy: f64,
        direction: [f64; 3],
        a: i32,
        z: i32,
    ) -> CascadeOutcome {
        if a <= 0 || self.rng.random::<f64>() < self.transparency {
            return CascadeOutcome::transparent(a, z);
        }

        let share = self.rng.random_range(0.3..0.9);
        let t = kinetic_energy.max(0.0) * share;
        let mut particles = SmallVec::new();
        particles.push(ProducedParticle {
            species,
            kinetic_energy: t,
            momentum: scale_to(direction, momentum_for(species, t)),
        });

        let limit = self.max_knockout.min(a - 1).max(0);
        let count = self.rng.random_range(0..=limit);
        let (mut rem_a, mut rem_z) = (a, z);
        for _ in 0..count {
            let take_proton = rem_z > 0
                && (rem_a == rem_z || self.rng.random::<f64>() < f64::from(rem_z) / f64::from(rem_a));
            let code = if take_proton { pdg::PROTON } else { pdg::NEUTRON };
            let t_n = self.rng.random_range(1.0..40.0);
            let spec = to_engine_species(code).unwrap_or(species);
            let dir = [
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
                self.rng.random_range(-1.0..1.0),
            ];
            particles.push(ProducedParticle {
                species: spec,
                kinetic_energy: t_n,
                momentum: scale_to(dir, momentum_for(spec, t_n)),
            });
            rem_a -= 1;
            if take_proton {
                rem_z -= 1;
            }
        }

        CascadeOutcome {
            transparent: false,
            particles,
            remnant: Remnant {
                a: rem_a,
                z: rem_z,
                momentum: [0.0; 3],
                excitation: self.rng.random_range(0.0..20.0),
            },
        }
    }
}

impl CascadeEngine for ToyCascade {
    fn name(&self) -> &str {
        "toy-cascade"
    }

    fn process_projectile(
        &mut self,
        species: ParticleSpecies,
        kinetic_energy: f64,
        target_a: i32,
        target_z: i32,
    ) -> CascadeOutcome {
        self.log.push(EngineCall::Projectile {
            species,
            kinetic_energy,
            target_a,
            target_z,
        });
        self.knock_out(species, kinetic_energy, [0.0, 0.0, 1.0], target_a, target_z)
    }

    fn process_particle(
        &mut self,
        species: ParticleSpecies,
        particle: &EngineParticle,
        kinetic_energy: f64,
        remnant_a: i32,
        remnant_z: i32,
    ) -> CascadeOutcome {
        self.log.push(EngineCall::Particle {
            species,
            kinetic_energy,
            remnant_a,
            remnant_z,
        });
        self.knock_out(species, kinetic_energy, particle.momentum, remnant_a, remnant_z)
    }
}

fn momentum_for(species: ParticleSpecies, kinetic_energy: f64) -> f64 {
    let m = species.mass_mev().unwrap_or(0.0);
    (kinetic_energy * (kinetic_energy + 2.0 * m)).sqrt()
}

fn scale_to(direction: [f64; 3], magnitude: f64) -> [f64; 3] {
    let norm = direction.iter().map(|c| c * c).sum::<f64>().sqrt();
    if norm == 0.0 {
        return [0.0, 0.0, magnitude];
    }
    direction.map(|c| c / norm * magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proton() -> ParticleSpecies {
        to_engine_species(pdg::PROTON).unwrap()
    }

    #[test]
    fn scripted_engine_replays_then_goes_transparent() {
        let canned = outcome(vec![produced(pdg::PROTON, 50.0, [0.0, 0.0, 300.0])], 11, 5);
        let mut engine = ScriptedEngine::new([canned.clone()]);
        let log = engine.log();
        let particle = EngineParticle {
            kind: ParticleType::Proton,
            energy: 1000.0,
            momentum: [0.0; 3],
            position: [0.0; 3],
        };
        assert_eq!(engine.process_particle(proton(), &particle, 60.0, 11, 6), canned);
        let next = engine.process_particle(proton(), &particle, 60.0, 11, 6);
        assert!(next.transparent);
        assert_eq!((next.remnant.a, next.remnant.z), (11, 6));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn toy_cascade_conserves_baryon_number_and_charge() {
        let mut engine = ToyCascade::new(7).with_transparency(0.0);
        let particle = EngineParticle {
            kind: ParticleType::Proton,
            energy: 1200.0,
            momentum: [0.0, 100.0, 500.0],
            position: [0.0; 3],
        };
        for _ in 0..200 {
            let out = engine.process_particle(proton(), &particle, 260.0, 11, 5);
            assert_eq!(out.produced_a() + out.remnant.a, 11 + 1);
            assert_eq!(out.produced_z() + out.remnant.z, 5 + 1);
            assert!(out.remnant.z <= out.remnant.a);
        }
    }

    #[test]
    fn toy_cascade_is_deterministic_per_seed() {
        let run = |seed| {
            let mut engine = ToyCascade::new(seed);
            (0..20)
                .map(|_| engine.process_projectile(proton(), 500.0, 56, 26))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn composite_codes_become_fragments() {
        let alpha = produced(pdg::nucleus(4, 2), 10.0, [0.0; 3]);
        assert_eq!(alpha.species.kind, ParticleType::Composite);
        assert_eq!((alpha.species.a, alpha.species.z), (4, 2));
    }
}
