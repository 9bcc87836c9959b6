//! Engine flag configuration and the engine factory seam.
//!
//! [`EngineFlags`] is read once from the registry and handed by reference
//! to an [`EngineFactory`], which parses it into an engine that owns its
//! configuration outright. Nothing mutates the configuration afterwards.

use nucascade_bridge::{EngineError, EngineHandles};
use nucascade_core::Registry;

use crate::error::ConfigError;

// ── Keys ───────────────────────────────────────────────────────────

/// Input file flag key.
pub const INFILE_KEY: &str = "INCL-infile";
/// Projectile flag key.
pub const PARTICLE_KEY: &str = "INCL-pflag";
/// Target flag key.
pub const TARGET_KEY: &str = "INCL-tflag";
/// Shot-count flag key.
pub const SHOTS_KEY: &str = "INCL-Nflag";
/// Energy flag key.
pub const ENERGY_KEY: &str = "INCL-Eflag";
/// De-excitation flag key.
pub const DE_EXCITATION_KEY: &str = "INCL-dflag";
/// Whitespace-separated extra flags key.
pub const EXTRA_KEY: &str = "INCL-extra-flags";

// ── EngineFlags ────────────────────────────────────────────────────

/// The engine's argument vector, one field per configuration key.
///
/// The projectile, target, shot-count and energy flags are placeholders
/// the engine's parser insists on; the real values arrive with each call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineFlags {
    /// Input file. Default: `NULL`.
    pub infile: String,
    /// Projectile flag. Default: `-pp`.
    pub particle: String,
    /// Target flag. Default: `-tFe56`.
    pub target: String,
    /// Shot-count flag. Default: `-N1`.
    pub shots: String,
    /// Energy flag. Default: `-E1`.
    pub energy: String,
    /// De-excitation model flag. Default: `-dABLA07`.
    pub de_excitation: String,
    /// Extra tokens appended verbatim.
    pub extra: Vec<String>,
}

impl Default for EngineFlags {
    fn default() -> Self {
        Self {
            infile: "NULL".into(),
            particle: "-pp".into(),
            target: "-tFe56".into(),
            shots: "-N1".into(),
            energy: "-E1".into(),
            de_excitation: "-dABLA07".into(),
            extra: Vec::new(),
        }
    }
}

impl EngineFlags {
    /// Read the flags from `registry`, falling back to the defaults for
    /// absent keys, and validate them.
    pub fn from_registry(registry: &Registry) -> Result<Self, ConfigError> {
        let d = Self::default();
        let flags = Self {
            infile: registry.get_text_or(INFILE_KEY, &d.infile)?,
            particle: registry.get_text_or(PARTICLE_KEY, &d.particle)?,
            target: registry.get_text_or(TARGET_KEY, &d.target)?,
            shots: registry.get_text_or(SHOTS_KEY, &d.shots)?,
            energy: registry.get_text_or(ENERGY_KEY, &d.energy)?,
            de_excitation: registry.get_text_or(DE_EXCITATION_KEY, &d.de_excitation)?,
            extra: registry
                .get_text_or(EXTRA_KEY, "")?
                .split_whitespace()
                .map(str::to_owned)
                .collect(),
        };
        flags.validate()?;
        Ok(flags)
    }

    /// Check that every option flag looks like an option.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = [
            (PARTICLE_KEY, &self.particle),
            (TARGET_KEY, &self.target),
            (SHOTS_KEY, &self.shots),
            (ENERGY_KEY, &self.energy),
            (DE_EXCITATION_KEY, &self.de_excitation),
        ];
        for (key, value) in options {
            if !value.starts_with('-') {
                return Err(ConfigError::InvalidFlag {
                    key,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// The argument vector in parser order.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(6 + self.extra.len());
        args.extend([
            self.infile.clone(),
            self.particle.clone(),
            self.target.clone(),
            self.shots.clone(),
            self.energy.clone(),
            self.de_excitation.clone(),
        ]);
        args.extend(self.extra.iter().cloned());
        args
    }

    /// Name of the requested de-excitation model (`ABLA07` for `-dABLA07`).
    pub fn de_excitation_model(&self) -> &str {
        self.de_excitation
            .strip_prefix("-d")
            .unwrap_or(&self.de_excitation)
    }
}

// ── EngineFactory ──────────────────────────────────────────────────

/// Builds the cascade collaborators from parsed flags.
///
/// Implementations wrap a concrete cascade model. A factory that cannot
/// provide the requested de-excitation model returns handles without one;
/// the transport then warns and carries on.
pub trait EngineFactory {
    /// Build an engine (and optionally a de-excitation model) for `flags`.
    fn build(&self, flags: &EngineFlags) -> Result<EngineHandles, EngineError>;
}

impl<F> EngineFactory for F
where
    F: Fn(&EngineFlags) -> Result<EngineHandles, EngineError>,
{
    fn build(&self, flags: &EngineFlags) -> Result<EngineHandles, EngineError> {
        self(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_the_reference_argument_vector() {
        let flags = EngineFlags::from_registry(&Registry::new()).unwrap();
        assert_eq!(
            flags.args(),
            ["NULL", "-pp", "-tFe56", "-N1", "-E1", "-dABLA07"]
        );
        assert_eq!(flags.de_excitation_model(), "ABLA07");
    }

    #[test]
    fn extra_flags_are_split_on_whitespace() {
        let reg = Registry::new()
            .with(DE_EXCITATION_KEY, "-dSMM")
            .with(EXTRA_KEY, "  --pauli=strict\t-v2\n");
        let flags = EngineFlags::from_registry(&reg).unwrap();
        let args = flags.args();
        assert_eq!(&args[5..], ["-dSMM", "--pauli=strict", "-v2"]);
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let reg = Registry::new().with(TARGET_KEY, "Fe56");
        assert!(matches!(
            EngineFlags::from_registry(&reg),
            Err(ConfigError::InvalidFlag { key: TARGET_KEY, .. })
        ));
    }

    #[test]
    fn non_text_flag_is_a_registry_error() {
        let reg = Registry::new().with(ENERGY_KEY, 1.0);
        assert!(matches!(
            EngineFlags::from_registry(&reg),
            Err(ConfigError::Registry(_))
        ));
    }
}
