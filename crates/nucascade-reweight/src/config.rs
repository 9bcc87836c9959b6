//! Loading a [`FateWeightTable`] from a [`Registry`].
//!
//! Keys:
//!
//! | key | meaning |
//! |---|---|
//! | `CascadeReweight-Default-Weight` | global default, required |
//! | `CascadeReweight-Default-Weight-<Fate>` | per-fate default |
//! | `CascadeReweight-Weight-<Fate>@Pdg=<code>` | per-fate, per-species |
//!
//! `<Fate>` is one of the [`Fate::config_name`] values. Every problem is
//! collected before failing, so one run reports the whole configuration.

use nucascade_core::{Fate, Pdg, Registry, RegistryError};
use tracing::{debug, error};

use crate::error::{WeightConfigError, WeightProblem};
use crate::table::FateWeightTable;

/// The required global default key.
pub const DEFAULT_WEIGHT_KEY: &str = "CascadeReweight-Default-Weight";

const OVERRIDE_PREFIX: &str = "CascadeReweight-Weight-";

fn fate_default_key(fate: Fate) -> String {
    format!("{DEFAULT_WEIGHT_KEY}-{}", fate.config_name())
}

fn override_prefix(fate: Fate) -> String {
    format!("{OVERRIDE_PREFIX}{}@Pdg=", fate.config_name())
}

/// Read a weight, recording any problem. Returns `None` on failure.
fn read_weight(registry: &Registry, key: &str, problems: &mut Vec<WeightProblem>) -> Option<f64> {
    let weight = match registry.get_real(key) {
        Ok(w) => w,
        Err(source) => {
            problems.push(WeightProblem::NotANumber {
                key: key.to_string(),
                source,
            });
            return None;
        }
    };
    if !weight.is_finite() {
        problems.push(WeightProblem::NonFinite {
            key: key.to_string(),
            weight,
        });
        return None;
    }
    if weight < 0.0 {
        problems.push(WeightProblem::Negative {
            key: key.to_string(),
            weight,
        });
        return None;
    }
    Some(weight)
}

impl FateWeightTable {
    /// Build the table from registry keys.
    pub fn from_registry(registry: &Registry) -> Result<Self, WeightConfigError> {
        let mut problems = Vec::new();

        let default_weight = match registry.get_real(DEFAULT_WEIGHT_KEY) {
            Err(RegistryError::Missing(_)) => {
                problems.push(WeightProblem::MissingDefault {
                    key: DEFAULT_WEIGHT_KEY,
                });
                None
            }
            _ => read_weight(registry, DEFAULT_WEIGHT_KEY, &mut problems),
        };
        let mut table = FateWeightTable::new(default_weight.unwrap_or(1.0));

        for fate in Fate::ALL {
            let key = fate_default_key(fate);
            if registry.exists(&key) {
                if let Some(w) = read_weight(registry, &key, &mut problems) {
                    debug!(%fate, weight = w, "fate default weight");
                    table = table.with_fate_default(fate, w);
                }
            }

            let prefix = override_prefix(fate);
            for key in registry.keys_with_prefix(&prefix) {
                let code = match key[prefix.len()..].trim().parse::<i32>() {
                    Ok(c) => Pdg(c),
                    Err(_) => {
                        problems.push(WeightProblem::UnparsablePdg {
                            key: key.to_string(),
                        });
                        continue;
                    }
                };
                if !code.is_known() {
                    problems.push(WeightProblem::UnknownPdg {
                        key: key.to_string(),
                        pdg: code.0,
                    });
                    continue;
                }
                if let Some(w) = read_weight(registry, key, &mut problems) {
                    debug!(%fate, pdg = %code, weight = w, "species weight");
                    table = table.with_override(fate, code, w);
                }
            }
        }

        if problems.is_empty() {
            Ok(table)
        } else {
            Err(WeightConfigError { problems })
        }
    }
}

/// Like [`FateWeightTable::from_registry`], but a bad configuration is
/// fatal: every problem is logged and the process exits with
/// [`WeightConfigError::EXIT_CODE`].
pub fn from_registry_or_exit(registry: &Registry) -> FateWeightTable {
    match FateWeightTable::from_registry(registry) {
        Ok(table) => table,
        Err(e) => {
            for p in &e.problems {
                error!(problem = %p, "invalid cascade reweight configuration");
            }
            error!("configuration has failed");
            std::process::exit(WeightConfigError::EXIT_CODE)
        }
    }
}
