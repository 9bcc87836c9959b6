//! Intranuclear-cascade hadron transport.
//!
//! Takes an event record whose primary interaction left hadrons inside a
//! nucleus and propagates them through a [`CascadeEngine`] one at a time,
//! keeping a running (A, Z) budget across the sub-cascades and merging the
//! results into the final-state particle list and a single residual
//! nucleus.
//!
//! The entry point is [`HadronTransport`], configured once from a
//! [`Registry`](nucascade_core::Registry) through an [`EngineFactory`] and
//! then applied to each event with
//! [`process_event`](HadronTransport::process_event).
//!
//! [`CascadeEngine`]: nucascade_bridge::CascadeEngine

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod budget;
pub mod config;
pub mod direct;
pub mod eligibility;
mod emit;
pub mod error;
pub mod merge;
pub mod orchestrator;
pub mod summary;
pub mod transport;

pub use budget::ConservationBudget;
pub use config::{EngineFactory, EngineFlags};
pub use direct::cascade_projectile;
pub use eligibility::{classify, Eligibility};
pub use error::{ConfigError, TransportError};
pub use merge::MergeMode;
pub use orchestrator::transport_hadrons;
pub use summary::TransportSummary;
pub use transport::HadronTransport;
