//! Running (A, Z) bookkeeping across the sub-cascades of one event.
//!
//! The engine only ever sees the nucleus passed to each call, so nothing
//! stops successive calls from removing more nucleons than the nucleus
//! holds. The budget tracks what has been removed so far and flags the
//! first call that exhausts it.

use nucascade_bridge::{ParticleSpecies, Remnant};

/// Removed and transparent (A, Z) for one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConservationBudget {
    initial_a: i32,
    initial_z: i32,
    removed_a: i32,
    removed_z: i32,
    transparent_a: i32,
    transparent_z: i32,
}

impl ConservationBudget {
    /// Fresh budget against an (A, Z) nucleus.
    ///
    /// `lepton_charge` seeds the transparent charge accumulator so that the
    /// merged remnant accounts for charge carried off by the lepton.
    pub fn new(initial_a: i32, initial_z: i32, lepton_charge: i32) -> Self {
        Self {
            initial_a,
            initial_z,
            removed_a: 0,
            removed_z: 0,
            transparent_a: 0,
            transparent_z: lepton_charge,
        }
    }

    /// Record one engine call on a `(nucleus_a, nucleus_z)` nucleus.
    pub fn record(
        &mut self,
        nucleus_a: i32,
        nucleus_z: i32,
        projectile: &ParticleSpecies,
        remnant: &Remnant,
    ) {
        self.removed_a += removed(nucleus_a, projectile.a, remnant.a);
        self.removed_z += removed(nucleus_z, projectile.z, remnant.z);
    }

    /// Fold a transparent projectile into the transparent accumulators.
    pub fn add_transparent(&mut self, projectile: &ParticleSpecies) {
        self.transparent_a += projectile.a;
        self.transparent_z += projectile.z;
    }

    /// `(initial_A - removed_A, initial_Z - removed_Z)`.
    pub fn remaining(&self) -> (i32, i32) {
        (
            self.initial_a - self.removed_a,
            self.initial_z - self.removed_z,
        )
    }

    /// Whether either remaining count has dropped to zero or below.
    pub fn is_exhausted(&self) -> bool {
        let (a, z) = self.remaining();
        a <= 0 || z <= 0
    }

    /// Initial (A, Z).
    pub fn initial(&self) -> (i32, i32) {
        (self.initial_a, self.initial_z)
    }

    /// Transparent (A, Z), charge including the lepton seed.
    pub fn transparent(&self) -> (i32, i32) {
        (self.transparent_a, self.transparent_z)
    }
}

/// Nucleons (or charge) one call took out of the nucleus.
pub(crate) fn removed(nucleus: i32, projectile: i32, remnant: i32) -> i32 {
    nucleus + projectile - remnant
}
