//! Particle bridge and cascade-engine contract.
//!
//! Translates between the generator's particle record (PDG codes, GeV) and
//! the intranuclear cascade engine's representation (species type, A, Z,
//! MeV), and defines the [`CascadeEngine`] and [`DeExcitation`] traits the
//! transport stage drives.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod engine;
pub mod error;
pub mod mass;
pub mod outcome;
pub mod species;
pub mod units;

pub use convert::{from_engine_particle, remnant_particle, to_submission, Submission};
pub use engine::{CascadeEngine, DeExcitation, EngineHandles, EngineParticle};
pub use error::{BridgeError, EngineError};
pub use outcome::{CascadeOutcome, ProducedParticle, Remnant};
pub use species::{from_engine_species, to_engine_species, ParticleSpecies, ParticleType, Species};
pub use units::{to_engine_kinematics, EngineKinematics, MEV_PER_GEV};
