//! PDG species codes and the 10-digit nuclear code convention.
//!
//! Nuclei are encoded as `100ZZZAAAI`: `1000000000 + Z*10000 + A*10 + I`,
//! where `I` is the isomer level (always 0 here).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A PDG Monte Carlo particle numbering code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pdg(pub i32);

impl fmt::Display for Pdg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Pdg {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Electron.
pub const ELECTRON: Pdg = Pdg(11);
/// Positron.
pub const POSITRON: Pdg = Pdg(-11);
/// Electron neutrino.
pub const NU_E: Pdg = Pdg(12);
/// Muon.
pub const MUON: Pdg = Pdg(13);
/// Anti-muon.
pub const ANTI_MUON: Pdg = Pdg(-13);
/// Muon neutrino.
pub const NU_MU: Pdg = Pdg(14);
/// Photon.
pub const GAMMA: Pdg = Pdg(22);
/// Neutral pion.
pub const PI_ZERO: Pdg = Pdg(111);
/// Positive pion.
pub const PI_PLUS: Pdg = Pdg(211);
/// Negative pion.
pub const PI_MINUS: Pdg = Pdg(-211);
/// Eta meson.
pub const ETA: Pdg = Pdg(221);
/// Positive kaon.
pub const K_PLUS: Pdg = Pdg(321);
/// Negative kaon.
pub const K_MINUS: Pdg = Pdg(-321);
/// Neutron.
pub const NEUTRON: Pdg = Pdg(2112);
/// Proton.
pub const PROTON: Pdg = Pdg(2212);
/// Lambda baryon.
pub const LAMBDA: Pdg = Pdg(3122);

const ION_BASE: i32 = 1_000_000_000;

/// Non-nuclear codes the generator can place in an event record.
const KNOWN_CODES: &[i32] = &[
    // leptons
    11, 12, 13, 14, 15, 16, //
    // gauge bosons
    22, 23, 24, //
    // light mesons
    111, 113, 130, 211, 213, 221, 223, 310, 311, 321, 331, 333, //
    // charmed mesons
    411, 421, 431, //
    // baryons
    1114, 2112, 2114, 2212, 2214, 2224, 3112, 3122, 3212, 3222, 3312, 3322, 3334, 4122,
    4212, 4222,
];

/// Rest of the charge-conjugate table: these are their own antiparticle.
const SELF_CONJUGATE: &[i32] = &[22, 23, 111, 113, 130, 221, 223, 310, 331, 333];

impl Pdg {
    /// Whether this is a 10-digit nuclear code.
    pub fn is_ion(self) -> bool {
        self.0 > ION_BASE
    }

    /// Mass number of a nuclear code, or of a free nucleon.
    pub fn ion_a(self) -> Option<u32> {
        if self.is_ion() {
            u32::try_from((self.0 / 10) % 1000).ok()
        } else if self == PROTON || self == NEUTRON {
            Some(1)
        } else {
            None
        }
    }

    /// Charge number of a nuclear code, or of a free nucleon.
    pub fn ion_z(self) -> Option<u32> {
        if self.is_ion() {
            u32::try_from((self.0 / 10_000) % 1000).ok()
        } else if self == PROTON {
            Some(1)
        } else if self == NEUTRON {
            Some(0)
        } else {
            None
        }
    }

    /// Whether the generator's particle table recognises this code.
    ///
    /// Nuclear codes are accepted when `0 <= Z <= A` and `A >= 1`.
    pub fn is_known(self) -> bool {
        if self.is_ion() {
            return match (self.ion_a(), self.ion_z()) {
                (Some(a), Some(z)) => a >= 1 && z <= a,
                _ => false,
            };
        }
        let abs = self.0.abs();
        if !KNOWN_CODES.contains(&abs) {
            return false;
        }
        self.0 > 0 || !SELF_CONJUGATE.contains(&abs)
    }

    /// Electric charge in units of `e` for the codes the transport emits.
    ///
    /// Returns `None` for codes whose charge is not tabulated here.
    pub fn charge(self) -> Option<i32> {
        if self.is_ion() {
            return self.ion_z().and_then(|z| i32::try_from(z).ok());
        }
        let sign = self.0.signum();
        let q = match self.0.abs() {
            11 | 13 | 15 => -1,
            12 | 14 | 16 | 22 | 23 | 111 | 113 | 130 | 221 | 223 | 310 | 311 | 331 | 333
            | 2112 | 2114 | 3122 | 3212 | 3322 => 0,
            24 | 211 | 213 | 321 | 411 | 431 | 2212 | 2214 | 3222 | 4122 => 1,
            1114 | 3112 | 3312 | 3334 => -1,
            2224 | 4222 => 2,
            421 => 0,
            4212 => 1,
            _ => return None,
        };
        Some(q * sign)
    }
}

/// Nuclear code for a nucleus with mass number `a` and charge `z`.
///
/// Single nucleons are returned as their particle codes.
pub fn nucleus(a: u32, z: u32) -> Pdg {
    match (a, z) {
        (1, 1) => PROTON,
        (1, 0) => NEUTRON,
        _ => {
            // Field widths keep the result inside i32 for every A, Z < 1000.
            let code = i64::from(ION_BASE) + i64::from(z % 1000) * 10_000 + i64::from(a % 1000) * 10;
            Pdg(i32::try_from(code).unwrap_or(i32::MAX))
        }
    }
}
