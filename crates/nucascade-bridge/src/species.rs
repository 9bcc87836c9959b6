//! Species mapping between PDG codes and the cascade engine.
//!
//! Only nucleons and the three pion charge states can be transported;
//! everything else maps to [`Species::Unsupported`]. The mapping is total:
//! an unsupported code is an expected answer, not an error.

use nucascade_core::{pdg, Pdg};

use crate::mass;

/// The closed set of species the cascade stage distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Species {
    /// Proton.
    Proton,
    /// Neutron.
    Neutron,
    /// Positive pion.
    PiPlus,
    /// Negative pion.
    PiMinus,
    /// Neutral pion.
    PiZero,
    /// Anything the engine cannot transport.
    Unsupported,
}

impl Species {
    /// Classify a PDG code.
    pub fn from_pdg(code: Pdg) -> Self {
        match code {
            pdg::PROTON => Self::Proton,
            pdg::NEUTRON => Self::Neutron,
            pdg::PI_PLUS => Self::PiPlus,
            pdg::PI_MINUS => Self::PiMinus,
            pdg::PI_ZERO => Self::PiZero,
            _ => Self::Unsupported,
        }
    }

    /// PDG code of a supported species.
    pub fn to_pdg(self) -> Option<Pdg> {
        match self {
            Self::Proton => Some(pdg::PROTON),
            Self::Neutron => Some(pdg::NEUTRON),
            Self::PiPlus => Some(pdg::PI_PLUS),
            Self::PiMinus => Some(pdg::PI_MINUS),
            Self::PiZero => Some(pdg::PI_ZERO),
            Self::Unsupported => None,
        }
    }

    /// Whether the engine can transport this species.
    pub fn is_supported(self) -> bool {
        self != Self::Unsupported
    }

    /// Baryon number carried into the nucleus; zero for unsupported species.
    pub fn mass_number(self) -> i32 {
        match self {
            Self::Proton | Self::Neutron => 1,
            _ => 0,
        }
    }

    /// Charge carried into the nucleus; zero for unsupported species.
    pub fn charge_number(self) -> i32 {
        match self {
            Self::Proton | Self::PiPlus => 1,
            Self::PiMinus => -1,
            _ => 0,
        }
    }

    /// Engine particle type of a supported species.
    pub fn particle_type(self) -> Option<ParticleType> {
        match self {
            Self::Proton => Some(ParticleType::Proton),
            Self::Neutron => Some(ParticleType::Neutron),
            Self::PiPlus => Some(ParticleType::PiPlus),
            Self::PiMinus => Some(ParticleType::PiMinus),
            Self::PiZero => Some(ParticleType::PiZero),
            Self::Unsupported => None,
        }
    }
}

/// Particle types the cascade engine reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleType {
    /// Proton.
    Proton,
    /// Neutron.
    Neutron,
    /// Positive pion.
    PiPlus,
    /// Negative pion.
    PiMinus,
    /// Neutral pion.
    PiZero,
    /// Photon.
    Photon,
    /// Composite nuclear fragment (deuteron, alpha, ...).
    Composite,
    /// A type the bridge does not know.
    Unknown,
}

impl ParticleType {
    /// Real rest mass in MeV; for composites use [`mass::nuclear_mass_mev`].
    pub fn real_mass_mev(self) -> Option<f64> {
        match self {
            Self::Proton => Some(mass::PROTON_MEV),
            Self::Neutron => Some(mass::NEUTRON_MEV),
            Self::PiPlus | Self::PiMinus => Some(mass::PI_CHARGED_MEV),
            Self::PiZero => Some(mass::PI_ZERO_MEV),
            Self::Photon => Some(0.0),
            Self::Composite | Self::Unknown => None,
        }
    }
}

/// Engine-side species description: type plus (A, Z).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParticleSpecies {
    /// Particle type.
    pub kind: ParticleType,
    /// Mass number.
    pub a: i32,
    /// Charge number.
    pub z: i32,
}

impl ParticleSpecies {
    /// Rest mass in MeV of this species.
    pub fn mass_mev(&self) -> Option<f64> {
        match self.kind {
            ParticleType::Composite => {
                let a = u32::try_from(self.a).ok()?;
                let z = u32::try_from(self.z).ok()?;
                Some(mass::nuclear_mass_mev(a, z))
            }
            kind => kind.real_mass_mev(),
        }
    }
}

/// Map a PDG code to the engine representation.
///
/// Returns `None` for every code outside the five supported species.
pub fn to_engine_species(code: Pdg) -> Option<ParticleSpecies> {
    let species = Species::from_pdg(code);
    species.particle_type().map(|kind| ParticleSpecies {
        kind,
        a: species.mass_number(),
        z: species.charge_number(),
    })
}

/// Map an engine species back to a PDG code.
///
/// Composite fragments become nuclear codes; single-nucleon composites
/// collapse to the nucleon codes.
pub fn from_engine_species(species: &ParticleSpecies) -> Option<Pdg> {
    match species.kind {
        ParticleType::Proton => Some(pdg::PROTON),
        ParticleType::Neutron => Some(pdg::NEUTRON),
        ParticleType::PiPlus => Some(pdg::PI_PLUS),
        ParticleType::PiMinus => Some(pdg::PI_MINUS),
        ParticleType::PiZero => Some(pdg::PI_ZERO),
        ParticleType::Photon => Some(pdg::GAMMA),
        ParticleType::Composite => {
            let a = u32::try_from(species.a).ok()?;
            let z = u32::try_from(species.z).ok()?;
            (a >= 1 && z <= a).then(|| pdg::nucleus(a, z))
        }
        ParticleType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SUPPORTED: [Pdg; 5] = [
        pdg::PROTON,
        pdg::NEUTRON,
        pdg::PI_PLUS,
        pdg::PI_MINUS,
        pdg::PI_ZERO,
    ];

    #[test]
    fn supported_species_round_trip() {
        for code in SUPPORTED {
            let species = to_engine_species(code).expect("supported");
            assert_eq!(from_engine_species(&species), Some(code));
            assert_eq!(Species::from_pdg(code).to_pdg(), Some(code));
        }
    }

    #[test]
    fn mass_and_charge_numbers() {
        let pim = to_engine_species(pdg::PI_MINUS).unwrap();
        assert_eq!((pim.a, pim.z), (0, -1));
        let n = to_engine_species(pdg::NEUTRON).unwrap();
        assert_eq!((n.a, n.z), (1, 0));
    }

    #[test]
    fn kaons_and_nuclei_are_unsupported() {
        assert_eq!(to_engine_species(pdg::K_PLUS), None);
        assert_eq!(to_engine_species(pdg::nucleus(4, 2)), None);
        assert_eq!(Species::from_pdg(pdg::LAMBDA), Species::Unsupported);
        assert_eq!(Species::Unsupported.mass_number(), 0);
    }

    #[test]
    fn composite_fragments_become_nuclei() {
        let alpha = ParticleSpecies {
            kind: ParticleType::Composite,
            a: 4,
            z: 2,
        };
        assert_eq!(from_engine_species(&alpha), Some(pdg::nucleus(4, 2)));
        let bogus = ParticleSpecies {
            kind: ParticleType::Composite,
            a: 2,
            z: 3,
        };
        assert_eq!(from_engine_species(&bogus), None);
    }

    proptest! {
        #[test]
        fn unsupported_codes_never_reach_the_engine(code in any::<i32>()) {
            let pdg = Pdg(code);
            prop_assume!(!SUPPORTED.contains(&pdg));
            prop_assert!(to_engine_species(pdg).is_none());
            prop_assert_eq!(Species::from_pdg(pdg), Species::Unsupported);
        }
    }
}
