//! Bridge and engine error types.

use thiserror::Error;

use crate::species::ParticleSpecies;

/// Errors converting engine output back into particle records.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The engine reported a species with no PDG counterpart.
    #[error("engine species {0:?} has no PDG code")]
    UnknownSpecies(ParticleSpecies),
    /// The remnant carries an impossible (A, Z).
    #[error("remnant (A={a}, Z={z}) is not a nucleus")]
    InvalidRemnant {
        /// Mass number.
        a: i32,
        /// Charge number.
        z: i32,
    },
}

/// Errors building a cascade engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine's argument parser rejected the flags.
    #[error("invalid engine flags: {reason}")]
    InvalidFlags {
        /// Parser diagnostic.
        reason: String,
    },
    /// The engine failed to initialize (missing data files, ...).
    #[error("engine initialization failed: {reason}")]
    Initialization {
        /// Description of the failure.
        reason: String,
    },
}
