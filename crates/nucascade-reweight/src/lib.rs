//! Cascade event reweighting.
//!
//! Every stable final-state particle contributes one factor to the event
//! weight, looked up by the rescattering fate of its mother and its own
//! species:
//!
//! 1. a per-fate, per-species override,
//! 2. else the per-fate default,
//! 3. else the global default.
//!
//! The [`FateWeightTable`] is built once from a
//! [`Registry`](nucascade_core::Registry), is immutable afterwards and can
//! be shared across threads; [`reweight_batch`] does exactly that.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod reweight;
pub mod table;

pub use batch::reweight_batch;
pub use config::{from_registry_or_exit, DEFAULT_WEIGHT_KEY};
pub use error::{WeightConfigError, WeightProblem};
pub use reweight::CascadeReweight;
pub use table::{FateWeightTable, FateWeights};
