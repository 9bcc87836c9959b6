//! Hadron rescattering fate codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of the intranuclear process a hadron underwent.
///
/// Attached to particles by the physics step that produced them and read
/// back by the cascade reweighter through each final-state particle's
/// mother.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Fate {
    /// No fate was recorded.
    #[default]
    Undefined,
    /// The hadron left the nucleus without interacting.
    NoInteraction,
    /// Charge exchange.
    ChargeExchange,
    /// Elastic scattering.
    Elastic,
    /// Inelastic scattering.
    Inelastic,
    /// Absorption.
    Absorption,
    /// Multi-nucleon (compound) process.
    MultiNucleon,
}

impl Fate {
    /// Every fate, in code order.
    pub const ALL: [Fate; 7] = [
        Fate::Undefined,
        Fate::NoInteraction,
        Fate::ChargeExchange,
        Fate::Elastic,
        Fate::Inelastic,
        Fate::Absorption,
        Fate::MultiNucleon,
    ];

    /// Numeric fate code.
    pub fn code(self) -> i32 {
        match self {
            Self::Undefined => 0,
            Self::NoInteraction => 1,
            Self::ChargeExchange => 2,
            Self::Elastic => 3,
            Self::Inelastic => 4,
            Self::Absorption => 5,
            Self::MultiNucleon => 6,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }

    /// Name used in configuration keys (`CascadeReweight-...-<name>`).
    pub fn config_name(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::NoInteraction => "NoInteraction",
            Self::ChargeExchange => "CEx",
            Self::Elastic => "Elastic",
            Self::Inelastic => "Inelastic",
            Self::Absorption => "Abs",
            Self::MultiNucleon => "Cmp",
        }
    }
}

impl fmt::Display for Fate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_name())
    }
}
