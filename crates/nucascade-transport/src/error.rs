//! Error types for transport configuration and per-event processing.

use nucascade_bridge::{BridgeError, EngineError};
use nucascade_core::{GenerationMode, RecordError, RegistryError};
use thiserror::Error;

/// Errors raised while transporting one event.
///
/// None of these are fatal to the run; the caller logs and moves on to
/// the next event.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Appending to the event record failed.
    #[error("event record: {0}")]
    Record(#[from] RecordError),
    /// An engine particle could not be converted back.
    #[error("particle bridge: {0}")]
    Bridge(#[from] BridgeError),
    /// The event has no nucleus of the required role.
    #[error("no {role} nucleus in {mode:?} event")]
    MissingNucleus {
        /// `"target"` or `"remnant"`.
        role: &'static str,
        /// Generation mode of the event.
        mode: GenerationMode,
    },
    /// The entry chosen as the nucleus has no (A, Z).
    #[error("entry {index} is not a nucleus")]
    NotANucleus {
        /// Record index of the offending entry.
        index: usize,
    },
}

/// Errors detected while configuring the transport.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration key has the wrong type.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),
    /// An engine flag is malformed.
    #[error("engine flag {key} = {value:?} must start with '-'")]
    InvalidFlag {
        /// Registry key of the flag.
        key: &'static str,
        /// The offending value.
        value: String,
    },
    /// The engine factory refused the flags.
    #[error("engine: {0}")]
    Engine(#[from] EngineError),
}
