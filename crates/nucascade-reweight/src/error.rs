//! Weight configuration errors.

use std::fmt;

use nucascade_core::RegistryError;
use thiserror::Error;

/// One problem found while loading a weight table.
#[derive(Debug, Error)]
pub enum WeightProblem {
    /// The global default weight is absent.
    #[error("default weight `{key}` is not specified")]
    MissingDefault {
        /// The required key.
        key: &'static str,
    },
    /// A weight key does not hold a number.
    #[error("`{key}`: {source}")]
    NotANumber {
        /// The offending key.
        key: String,
        /// Registry lookup failure.
        source: RegistryError,
    },
    /// A weight is below zero.
    #[error("weight assigned to `{key}` is negative: {weight}")]
    Negative {
        /// The offending key.
        key: String,
        /// The configured weight.
        weight: f64,
    },
    /// A weight is NaN or infinite.
    #[error("weight assigned to `{key}` is not finite: {weight}")]
    NonFinite {
        /// The offending key.
        key: String,
        /// The configured weight.
        weight: f64,
    },
    /// The species part of an override key is not an integer.
    #[error("species code in `{key}` is not an integer")]
    UnparsablePdg {
        /// The offending key.
        key: String,
    },
    /// The species code is not in the particle table.
    #[error("species code {pdg} in `{key}` is not valid")]
    UnknownPdg {
        /// The offending key.
        key: String,
        /// The parsed code.
        pdg: i32,
    },
}

/// Loading a weight table failed; every problem found is listed.
#[derive(Debug)]
pub struct WeightConfigError {
    /// The problems, in key order.
    pub problems: Vec<WeightProblem>,
}

impl WeightConfigError {
    /// Process exit status for configuration errors (`EX_CONFIG`).
    pub const EXIT_CODE: i32 = 78;
}

impl fmt::Display for WeightConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cascade reweight configuration has failed")?;
        for p in &self.problems {
            write!(f, "\n  - {p}")?;
        }
        Ok(())
    }
}

impl std::error::Error for WeightConfigError {}
