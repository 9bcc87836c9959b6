//! Test utilities and mock types for nucascade development.
//!
//! Provides mock implementations of the engine traits
//! ([`CascadeEngine`](nucascade_bridge::CascadeEngine),
//! [`DeExcitation`](nucascade_bridge::DeExcitation)) and an
//! [`EventBuilder`] for constructing event records in the shape the
//! primary-interaction stage leaves them.
//!
//! - [`ScriptedEngine`] replays canned outcomes and logs every call.
//! - [`ToyCascade`] is a seeded, (A, Z)-conserving stand-in for a real
//!   cascade model.
//! - [`CountingDeExcitation`] and [`EvaporatingDeExcitation`] cover the
//!   "model leaves the remnant alone" and "model consumes the remnant"
//!   cases.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod deexcitation;
pub mod engines;
pub mod events;

pub use deexcitation::{CountingDeExcitation, EvaporatingDeExcitation};
pub use engines::{outcome, produced, CallLog, EngineCall, ScriptedEngine, ToyCascade};
pub use events::{nucleus_at_rest, EventBuilder};
