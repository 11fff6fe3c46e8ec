//! Arithmetic in the prime field F_p

use num_bigint::BigUint;
use num_traits::Zero;

/// Modular arithmetic over a borrowed prime modulus.
///
/// Every result is fully reduced into [0, p). Inputs may be unreduced.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fp<'a> {
    p: &'a BigUint,
}

impl<'a> Fp<'a> {
    pub(crate) fn new(p: &'a BigUint) -> Self {
        Fp { p }
    }

    pub(crate) fn reduce(&self, a: &BigUint) -> BigUint {
        a % self.p
    }

    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.p
    }

    /// a - b, wrapped into [0, p) when negative
    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        if a >= b {
            a - b
        } else {
            self.p - b + a
        }
    }

    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.p
    }

    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    pub(crate) fn double(&self, a: &BigUint) -> BigUint {
        self.add(a, a)
    }

    /// a·k for a small constant k
    pub(crate) fn mul_small(&self, a: &BigUint, k: u32) -> BigUint {
        (a * k) % self.p
    }

    /// Multiplicative inverse, `None` for a ≡ 0
    pub(crate) fn invert(&self, a: &BigUint) -> Option<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return None;
        }
        a.modinv(self.p)
    }

    pub(crate) fn is_zero(&self, a: &BigUint) -> bool {
        self.reduce(a).is_zero()
    }
}
