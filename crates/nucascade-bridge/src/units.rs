//! Unit conversion between the generator (GeV) and the engine (MeV).
//!
//! Positions are in fm on both sides and pass through unscaled.

use nucascade_core::LorentzVector;

/// Energy/momentum scale factor from generator units to engine units.
pub const MEV_PER_GEV: f64 = 1000.0;

/// Kinematics of a particle in engine units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineKinematics {
    /// Total energy in MeV.
    pub energy: f64,
    /// Three-momentum in MeV/c.
    pub momentum: [f64; 3],
    /// Position in fm.
    pub position: [f64; 3],
}

/// Convert a generator four-momentum and four-position to engine units.
pub fn to_engine_kinematics(p4: &LorentzVector, x4: &LorentzVector) -> EngineKinematics {
    EngineKinematics {
        energy: p4.e() * MEV_PER_GEV,
        momentum: [
            p4.px() * MEV_PER_GEV,
            p4.py() * MEV_PER_GEV,
            p4.pz() * MEV_PER_GEV,
        ],
        position: x4.vect(),
    }
}

/// Convert an engine three-momentum (MeV/c) back to GeV/c.
pub fn to_generator_momentum(p: [f64; 3]) -> [f64; 3] {
    [p[0] / MEV_PER_GEV, p[1] / MEV_PER_GEV, p[2] / MEV_PER_GEV]
}

/// Convert a generator three-momentum (GeV/c) to MeV/c.
pub fn to_engine_momentum(p: [f64; 3]) -> [f64; 3] {
    [p[0] * MEV_PER_GEV, p[1] * MEV_PER_GEV, p[2] * MEV_PER_GEV]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn momentum_scales_position_does_not() {
        let p4 = LorentzVector::new(0.1, 0.2, 0.3, 1.5);
        let x4 = LorentzVector::new(1.0, -2.0, 0.5, 0.0);
        let k = to_engine_kinematics(&p4, &x4);
        assert_eq!(k.energy, 1500.0);
        assert_eq!(k.momentum, [100.0, 200.0, 300.0]);
        assert_eq!(k.position, [1.0, -2.0, 0.5]);
    }

    #[test]
    fn reverse_conversion_uses_same_factor() {
        let p = to_generator_momentum(to_engine_momentum([0.25, -0.5, 2.0]));
        assert_eq!(p, [0.25, -0.5, 2.0]);
    }
}
