//! The particle entry of an event record.

use serde::{Deserialize, Serialize};

use crate::fate::Fate;
use crate::pdg::Pdg;
use crate::status::Status;
use crate::vector::LorentzVector;

/// One entry of an [`EventRecord`](crate::EventRecord).
///
/// Mother and daughter links are indices into the owning record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Species code.
    pub pdg: Pdg,
    /// Life-cycle status.
    pub status: Status,
    /// Rescattering fate assigned by the physics step that produced it.
    pub rescatter: Fate,
    /// First mother index.
    pub first_mother: Option<usize>,
    /// Last mother index.
    pub last_mother: Option<usize>,
    /// First daughter index.
    pub first_daughter: Option<usize>,
    /// Last daughter index.
    pub last_daughter: Option<usize>,
    /// Four-momentum in GeV.
    pub p4: LorentzVector,
    /// Four-position in fm.
    pub x4: LorentzVector,
}

impl Particle {
    /// New particle with no links and an undefined fate.
    pub fn new(pdg: Pdg, status: Status, p4: LorentzVector, x4: LorentzVector) -> Self {
        Self {
            pdg,
            status,
            rescatter: Fate::Undefined,
            first_mother: None,
            last_mother: None,
            first_daughter: None,
            last_daughter: None,
            p4,
            x4,
        }
    }

    /// Set the first mother.
    pub fn with_mother(mut self, mother: usize) -> Self {
        self.first_mother = Some(mother);
        self
    }

    /// Set both mother links.
    pub fn with_mothers(mut self, first: Option<usize>, last: Option<usize>) -> Self {
        self.first_mother = first;
        self.last_mother = last;
        self
    }

    /// Set the rescattering fate.
    pub fn with_fate(mut self, fate: Fate) -> Self {
        self.rescatter = fate;
        self
    }

    /// Mass number for nuclei and free nucleons.
    pub fn a(&self) -> Option<u32> {
        self.pdg.ion_a()
    }

    /// Charge number for nuclei and free nucleons.
    pub fn z(&self) -> Option<u32> {
        self.pdg.ion_z()
    }

    /// Energy in GeV.
    pub fn energy(&self) -> f64 {
        self.p4.e()
    }
}
