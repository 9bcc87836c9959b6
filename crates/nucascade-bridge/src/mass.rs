//! Rest masses used by the bridge, in MeV.

/// Proton mass.
pub const PROTON_MEV: f64 = 938.272;
/// Neutron mass.
pub const NEUTRON_MEV: f64 = 939.565;
/// Charged pion mass.
pub const PI_CHARGED_MEV: f64 = 139.570;
/// Neutral pion mass.
pub const PI_ZERO_MEV: f64 = 134.977;

// Semi-empirical mass formula coefficients (MeV).
const A_VOLUME: f64 = 15.75;
const A_SURFACE: f64 = 17.8;
const A_COULOMB: f64 = 0.711;
const A_ASYMMETRY: f64 = 23.7;
const A_PAIRING: f64 = 11.18;

/// Tabulated nuclear mass of an (A, Z) nucleus in MeV.
///
/// Free nucleons return their real masses; heavier nuclei use the
/// Bethe-Weizsäcker binding energy. A = 0 returns 0.
pub fn nuclear_mass_mev(a: u32, z: u32) -> f64 {
    match (a, z) {
        (0, _) => 0.0,
        (1, 1) => PROTON_MEV,
        (1, 0) => NEUTRON_MEV,
        _ => {
            let af = f64::from(a);
            let zf = f64::from(z.min(a));
            let nf = af - zf;
            let pairing = match (a % 2, z % 2) {
                (0, 0) => A_PAIRING / af.sqrt(),
                (0, _) => -A_PAIRING / af.sqrt(),
                _ => 0.0,
            };
            let binding = A_VOLUME * af
                - A_SURFACE * af.powf(2.0 / 3.0)
                - A_COULOMB * zf * (zf - 1.0) / af.cbrt()
                - A_ASYMMETRY * (af - 2.0 * zf).powi(2) / af
                + pairing;
            zf * PROTON_MEV + nf * NEUTRON_MEV - binding.max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carbon_binding_is_plausible() {
        // 12C: ~92 MeV binding.
        let m = nuclear_mass_mev(12, 6);
        let free = 6.0 * PROTON_MEV + 6.0 * NEUTRON_MEV;
        let binding = free - m;
        assert!((80.0..100.0).contains(&binding), "binding {binding}");
    }

    #[test]
    fn nucleons_use_real_masses() {
        assert_eq!(nuclear_mass_mev(1, 1), PROTON_MEV);
        assert_eq!(nuclear_mass_mev(1, 0), NEUTRON_MEV);
        assert_eq!(nuclear_mass_mev(0, 0), 0.0);
    }
}
