//! Core types for the nucascade hadron-transport workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! event record the transport and reweighting stages operate on: PDG
//! species codes, the status vocabulary, rescattering fates, four-vectors,
//! particles, and the flat configuration registry.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fate;
pub mod particle;
pub mod pdg;
pub mod record;
pub mod registry;
pub mod status;
pub mod vector;

pub use error::{RecordError, RegistryError};
pub use fate::Fate;
pub use particle::Particle;
pub use pdg::Pdg;
pub use record::{EventRecord, GenerationMode, ProcessKind};
pub use registry::{Registry, RegistryValue};
pub use status::Status;
pub use vector::LorentzVector;
