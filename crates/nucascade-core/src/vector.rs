//! Minimal Lorentz four-vector used for momenta (GeV) and positions (fm).

use std::ops::{Add, AddAssign, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A four-vector `(x, y, z, t)`.
///
/// For momenta the components read `(px, py, pz, E)`; for positions
/// `(x, y, z, t)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LorentzVector {
    /// First spatial component.
    pub x: f64,
    /// Second spatial component.
    pub y: f64,
    /// Third spatial component.
    pub z: f64,
    /// Time-like component.
    pub t: f64,
}

impl LorentzVector {
    /// The null vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Construct from components.
    pub const fn new(x: f64, y: f64, z: f64, t: f64) -> Self {
        Self { x, y, z, t }
    }

    /// A particle of mass `m` at rest.
    pub const fn at_rest(m: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, m)
    }

    /// On-shell momentum vector with three-momentum `p` and mass `m`.
    pub fn on_shell(p: [f64; 3], m: f64) -> Self {
        let e = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2] + m * m).sqrt();
        Self::new(p[0], p[1], p[2], e)
    }

    /// x momentum component.
    pub fn px(&self) -> f64 {
        self.x
    }

    /// y momentum component.
    pub fn py(&self) -> f64 {
        self.y
    }

    /// z momentum component.
    pub fn pz(&self) -> f64 {
        self.z
    }

    /// Energy component.
    pub fn e(&self) -> f64 {
        self.t
    }

    /// Spatial part as an array.
    pub fn vect(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Minkowski square `t^2 - |v|^2`.
    pub fn mag2(&self) -> f64 {
        self.t * self.t - (self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Invariant mass; negative for space-like vectors, as `-sqrt(-m2)`.
    pub fn mag(&self) -> f64 {
        let m2 = self.mag2();
        if m2 < 0.0 {
            -(-m2).sqrt()
        } else {
            m2.sqrt()
        }
    }
}

impl Add for LorentzVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.t + rhs.t)
    }
}

impl AddAssign for LorentzVector {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for LorentzVector {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.t - rhs.t)
    }
}

impl Mul<f64> for LorentzVector {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k, self.z * k, self.t * k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_shell_has_requested_mass() {
        let p = LorentzVector::on_shell([0.3, -0.4, 1.2], 0.938);
        assert!((p.mag() - 0.938).abs() < 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a = LorentzVector::new(1.0, 2.0, 3.0, 4.0);
        let b = LorentzVector::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a + b - b, a);
        assert_eq!((a * 2.0).t, 8.0);
    }
}
