//! The immutable fate/species weight table.

use indexmap::IndexMap;
use nucascade_core::{EventRecord, Fate, Pdg, Status};

/// Weights configured for one fate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FateWeights {
    /// Weight for any species without an override.
    pub default: Option<f64>,
    /// Per-species overrides.
    pub species: IndexMap<Pdg, f64>,
}

/// Three-tier weight lookup: fate+species, then fate, then global.
#[derive(Clone, Debug, PartialEq)]
pub struct FateWeightTable {
    default_weight: f64,
    fates: IndexMap<Fate, FateWeights>,
}

impl FateWeightTable {
    /// A table that returns `default_weight` for everything.
    pub fn new(default_weight: f64) -> Self {
        Self {
            default_weight,
            fates: IndexMap::new(),
        }
    }

    /// Set the default weight of `fate`.
    pub fn with_fate_default(mut self, fate: Fate, weight: f64) -> Self {
        self.fates.entry(fate).or_default().default = Some(weight);
        self
    }

    /// Set the weight of `pdg` particles whose mother underwent `fate`.
    pub fn with_override(mut self, fate: Fate, pdg: Pdg, weight: f64) -> Self {
        self.fates.entry(fate).or_default().species.insert(pdg, weight);
        self
    }

    /// The global default weight.
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Weights configured for `fate`, if any.
    pub fn fate(&self, fate: Fate) -> Option<&FateWeights> {
        self.fates.get(&fate)
    }

    /// Weight of a `pdg` particle produced by a `fate` interaction.
    pub fn weight_for(&self, fate: Fate, pdg: Pdg) -> f64 {
        let Some(w) = self.fates.get(&fate) else {
            return self.default_weight;
        };
        w.species
            .get(&pdg)
            .copied()
            .or(w.default)
            .unwrap_or(self.default_weight)
    }

    /// Product of the weights of every stable final-state particle.
    ///
    /// A particle's fate is the rescattering code of its first mother;
    /// particles without a mother count as [`Fate::Undefined`]. An event
    /// with no stable particle has weight 1.
    pub fn event_weight(&self, record: &EventRecord) -> f64 {
        record
            .with_status(Status::StableFinalState)
            .map(|(_, p)| {
                let fate = p
                    .first_mother
                    .and_then(|m| record.particle(m))
                    .map_or(Fate::Undefined, |m| m.rescatter);
                self.weight_for(fate, p.pdg)
            })
            .product()
    }
}

impl Default for FateWeightTable {
    fn default() -> Self {
        Self::new(1.0)
    }
}
