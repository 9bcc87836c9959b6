//! nucascade: intranuclear cascade hadron transport for neutrino event
//! generation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all nucascade sub-crates. For most users, adding `nucascade` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use nucascade::prelude::*;
//! use nucascade::bridge::EngineParticle;
//!
//! // An engine under which every nucleus is transparent.
//! struct Transparent;
//! impl CascadeEngine for Transparent {
//!     fn name(&self) -> &str { "transparent" }
//!     fn process_projectile(
//!         &mut self, _: ParticleSpecies, _: f64, a: i32, z: i32,
//!     ) -> CascadeOutcome {
//!         CascadeOutcome::transparent(a, z)
//!     }
//!     fn process_particle(
//!         &mut self, _: ParticleSpecies, _: &EngineParticle, _: f64, a: i32, z: i32,
//!     ) -> CascadeOutcome {
//!         CascadeOutcome::transparent(a, z)
//!     }
//! }
//!
//! // A 300 MeV proton on carbon-12.
//! let mut record = EventRecord::new(GenerationMode::HadronNucleus, ProcessKind::Other);
//! record.add_particle(Particle::new(
//!     pdg::PROTON,
//!     Status::InitialState,
//!     LorentzVector::new(0.0, 0.0, 0.808, 1.238),
//!     LorentzVector::ZERO,
//! )).unwrap();
//! record.add_particle(Particle::new(
//!     pdg::nucleus(12, 6),
//!     Status::InitialState,
//!     LorentzVector::at_rest(11.175),
//!     LorentzVector::ZERO,
//! )).unwrap();
//!
//! let mut transport = HadronTransport::new(EngineHandles::new(Box::new(Transparent)));
//! let summary = transport.process_event(Some(&mut record)).unwrap();
//! assert_eq!(summary.transparent, 1);
//! assert!(summary.remnant_emitted);
//!
//! let registry = Registry::new().with("CascadeReweight-Default-Weight", 0.9);
//! let reweight = CascadeReweight::configure(&registry).unwrap();
//! reweight.process_event(Some(&mut record));
//! assert!((record.weight() - 0.9).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `nucascade-core` | Event record, particles, PDG codes, fates, registry |
//! | [`bridge`] | `nucascade-bridge` | Particle conversion and the cascade engine traits |
//! | [`transport`] | `nucascade-transport` | Hadron transport orchestration |
//! | [`reweight`] | `nucascade-reweight` | Cascade fate reweighting |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Event record and shared vocabulary (`nucascade-core`).
///
/// Contains [`types::EventRecord`], [`types::Particle`], PDG codes,
/// status and fate codes, and the configuration [`types::Registry`].
pub use nucascade_core as types;

/// Particle bridge and cascade engine contract (`nucascade-bridge`).
///
/// The [`bridge::CascadeEngine`] and [`bridge::DeExcitation`] traits are
/// the extension points for plugging in a cascade model.
pub use nucascade_bridge as bridge;

/// Hadron transport orchestration (`nucascade-transport`).
///
/// [`transport::HadronTransport`] dispatches events to
/// [`transport::transport_hadrons`] or [`transport::cascade_projectile`].
pub use nucascade_transport as transport;

/// Cascade fate reweighting (`nucascade-reweight`).
///
/// [`reweight::CascadeReweight`] for single events,
/// [`reweight::reweight_batch`] for parallel batches.
pub use nucascade_reweight as reweight;

/// Common imports for typical nucascade usage.
///
/// ```rust
/// use nucascade::prelude::*;
/// ```
pub mod prelude {
    // Event record
    pub use nucascade_core::{
        pdg, EventRecord, Fate, GenerationMode, LorentzVector, Particle, Pdg, ProcessKind,
        Registry, Status,
    };

    // Engine contract
    pub use nucascade_bridge::{
        CascadeEngine, CascadeOutcome, DeExcitation, EngineHandles, ParticleSpecies, Remnant,
    };

    // Transport
    pub use nucascade_transport::{EngineFlags, HadronTransport, TransportSummary};

    // Reweighting
    pub use nucascade_reweight::{CascadeReweight, FateWeightTable};

    // Errors
    pub use nucascade_bridge::{BridgeError, EngineError};
    pub use nucascade_core::{RecordError, RegistryError};
    pub use nucascade_reweight::WeightConfigError;
    pub use nucascade_transport::{ConfigError, TransportError};
}
