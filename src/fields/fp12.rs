//! we likewise define the specifics of the dodecic extension here, defined by the tower
//! F_{p^{12}} = F_{p^6}(w) / (w^2 - tau). An element is a pair of F_{p^6} elements
//! (c_0, c_1) standing for c_0 + c_1 w. This is the target field of the optimal ate pairing,
//! and so the operations below are exactly the ones the Miller loop and the final
//! exponentiation consume.
//!
//! There is a second way of viewing the same element that the cyclotomic squaring relies on.
//! Writing c_0 = g_0 + g_1 tau + g_2 tau^2 and c_1 = h_0 + h_1 tau + h_2 tau^2, the six F_{p^2}
//! coefficients pair up into three elements of the implicit quartic extension
//! F_{p^4} = F_{p^2}(s) / (s^2 - xi), and squaring in the cyclotomic subgroup reduces to three
//! squarings there.
//!
//! # Preconditions
//!
//! Two families of operations here are only meaningful on part of the field, and neither
//! checks its input on the hot path:
//!
//! - inversion is undefined on zero. `invert` reports it as an error, while the `Inv` trait
//!   (and therefore `Div`) maps zero to zero.
//! - `cyclotomic_square`, `pow_to_v` and `pow_to_u` require their input to lie in the
//!   cyclotomic subgroup of order p^4 - p^2 + 1. Outside of it they silently return a wrong
//!   value. Elements land in the subgroup after `easy_part`, which is how pairing outputs
//!   reach these routines. `pow_to_u` asserts membership in debug builds, or in any build with
//!   the `cyclotomic-checks` feature.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::Fp;
use crate::fields::fp2::Fp2;
use crate::fields::fp6::{Fp6, XI_TO_P_SQUARED_MINUS_1_OVER_3};
use crypto_bigint::{Uint, U256};
use num_traits::{Inv, One, Zero};
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use subtle::{Choice, ConstantTimeEq};

// xi^((p - 1) / 6), so that w^p = w * xi^((p - 1) / 6)
const XI_TO_P_MINUS_1_OVER_6: Fp2 = Fp2::new(&[
    Fp::new(U256::from_words([
        0x4b691f508d4c26a8,
        0x049bf5d107a03af0,
        0x9f280982fcfb8572,
        0x2c367d29da983b5c,
    ])),
    Fp::new(U256::from_words([
        0x55aa3f973812f5ec,
        0xd78a8c6771ca7f49,
        0x3a669513f62d3830,
        0x132ab1f7691f80c2,
    ])),
]);
// xi^((p^2 - 1) / 6), a primitive sixth root of unity lying in the base field
const XI_TO_P_SQUARED_MINUS_1_OVER_6: Fp = Fp::new(U256::from_words([
    0x5e5d7456b745ed39,
    0x66ddd5416786143c,
    0xdf19eaf8dd8fdf29,
    0x8fb501e34aa387f8,
]));

/// the integer v = 1868033, whose cube is the BN parameter u of the curve
pub const V: u64 = 1868033;
/// the BN parameter u = v^3 = 6518589491078791937
pub const U: u64 = V * V * V;

/// the published generator of the cyclotomic subgroup of order r reached through the
/// sextic twist, stored as canonical integers
pub const GENERATOR: Fp12 = Fp12::new(&[
    Fp6::new(&[
        Fp2::new(&[
            Fp::new(U256::from_words([
                0xd2c2e18c851e14eb,
                0xd319e768b1289c40,
                0x019ab3cd8ba013da,
                0x84ba160fd5c0efcf,
            ])),
            Fp::new(U256::from_words([
                0x930c8f3c3b1dbf43,
                0x1a90f0cc471d5667,
                0xa9b7e82b6de75da7,
                0x7e325c0155a319d8,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                0x0216a93acf62cf3d,
                0xcf98905a64422df1,
                0x5601b0a798916dfc,
                0x1dfb25e7ea4214af,
            ])),
            Fp::new(U256::from_words([
                0xe3991214e47ba5bb,
                0x7ba59d3a9e3f9afb,
                0x354d2ffd27a914e7,
                0x43f24c0ebcf7687d,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                0x0c01881ca01942eb,
                0x1074da38ab89c729,
                0x5001a4eec559448a,
                0x756226babaecfd72,
            ])),
            Fp::new(U256::from_words([
                0x574cb0e73e40fc86,
                0xdba60ef6dd585a60,
                0xcfda97284bcd819c,
                0x56f53aa384aa5ef1,
            ])),
        ]),
    ]),
    Fp6::new(&[
        Fp2::new(&[
            Fp::new(U256::from_words([
                0xa88e0b4b21808a65,
                0x995f49b1195a2579,
                0xc20519d73c7d6d6c,
                0x7876e4f08d9b7fba,
            ])),
            Fp::new(U256::from_words([
                0x3acbe570ffb87487,
                0x0f6f7582a76eca8a,
                0x810c3bf7855f8cc4,
                0x2e1ddcdec0bfb361,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                0x218478732fde8f9e,
                0x4c932c915b1e2073,
                0xa0323ad134776c3e,
                0x6cb3c74d5eda42b1,
            ])),
            Fp::new(U256::from_words([
                0xad87cfaccff91272,
                0xd93425ea9a6fbf5e,
                0xefae2d3511fd7e40,
                0x0e69fcb818240231,
            ])),
        ]),
        Fp2::new(&[
            Fp::new(U256::from_words([
                0xe5320f4216373a88,
                0x298c495d7be6e8a5,
                0xc402626009995c83,
                0x5fe6ac8d1655c639,
            ])),
            Fp::new(U256::from_words([
                0x73a84d5739f8ba92,
                0x39fd2853102f1bd4,
                0x38c4eda72e517547,
                0x2edcebe5b4a8d256,
            ])),
        ]),
    ]),
]);

/// Errors reported by the checked operations on the target field.
#[derive(Debug)]
pub enum FieldError {
    /// Zero has no multiplicative inverse.
    NonInvertible,
}

pub type Fp12 = FieldExtension<12, 2, Fp6>;

/// Squaring in the implicit quartic extension F_{p^4} = F_{p^2}(s) / (s^2 - xi).
/// For the element a s + b, returns (2ab, xi a^2 + b^2), the coefficients of s and 1 of the
/// square. This is algorithm 9 of <https://eprint.iacr.org/2010/354.pdf>, taking the two F_{p^2}
/// components directly rather than building an F_{p^4} type.
#[must_use]
fn fp4_square(a: Fp2, b: Fp2) -> (Fp2, Fp2) {
    let t0 = a.square();
    let t1 = b.square();
    let c1 = (a + b).square() - t0 - t1;
    let c0 = t0.mul_by_xi() + t1;
    (c1, c0)
}

impl Fp12 {
    pub fn generator() -> Self {
        GENERATOR
    }
    /// negates the coefficient of w, which is the p^6-power map. It fixes Fp6, and on the
    /// cyclotomic subgroup it coincides with inversion.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(&[self.0[0], -self.0[1]])
    }
    /// For F_{p^{12}} = F_{p^6}(w)/(w^2 - tau), and A = c_0 + c_1 w, we determine A^2 with
    /// the complex squaring method, two Fp6 multiplications
    /// (see <https://eprint.iacr.org/2006/471.pdf>, Sec 3.3):
    ///
    /// v_0 = c_0 c_1,
    /// A^2 = ((c_1 + c_0)(tau c_1 + c_0) - v_0 - tau v_0) + 2 v_0 w
    #[must_use]
    pub fn square(&self) -> Self {
        let v0 = self.0[1] * self.0[0];
        let t = self.0[1].mul_by_tau() + self.0[0];
        let ty = (self.0[1] + self.0[0]) * t - v0;
        let ty = ty - v0.mul_by_tau();
        Self::new(&[ty, v0 + v0])
    }
    /// This implements efficient squaring of an element of Fp12 in the cyclotomic subgroup
    /// of order p^4 - p^2 + 1. It is what's called "Granger-Scott" squaring, see
    /// <https://eprint.iacr.org/2009/565.pdf>. The six F_{p^2} coefficients are squared as three
    /// elements of F_{p^4}, and each output coefficient is 3 t -/+ 2 a for the matching
    /// F_{p^4} component t and input coefficient a.
    ///
    /// The input MUST be in the cyclotomic subgroup; anywhere else the result is wrong.
    #[must_use]
    pub fn cyclotomic_square(&self) -> Self {
        let (y0, y1, y2) = (self.0[0].0[0], self.0[0].0[1], self.0[0].0[2]);
        let (x0, x1, x2) = (self.0[1].0[0], self.0[1].0[1], self.0[1].0[2]);

        let (t11, t00) = fp4_square(x1, y0);
        let (t12, t01) = fp4_square(y2, x0);
        // the third pair comes out with its roles exchanged, and the s coefficient is
        // carried across w^6 = xi
        let (s, t02) = fp4_square(x2, y1);
        let t10 = s.mul_by_xi();

        let triple = |t: Fp2| t + t + t;
        let double = |a: Fp2| a + a;

        Self::new(&[
            Fp6::new(&[
                triple(t00) - double(y0),
                triple(t01) - double(y1),
                triple(t02) - double(y2),
            ]),
            Fp6::new(&[
                triple(t10) + double(x0),
                triple(t11) + double(x1),
                triple(t12) + double(x2),
            ]),
        ])
    }
    /// (c_0 + c_1 w)^p = c_0^p + c_1^p w xi^((p - 1) / 6)
    #[must_use]
    pub fn frobenius(&self) -> Self {
        Self::new(&[
            self.0[0].frobenius(),
            self.0[1].frobenius().scale(XI_TO_P_MINUS_1_OVER_6),
        ])
    }
    /// (c_0 + c_1 w)^(p^2) = c_0^(p^2) + c_1^(p^2) w xi^((p^2 - 1) / 6)
    #[must_use]
    pub fn frobenius_p2(&self) -> Self {
        Self::new(&[
            self.0[0].frobenius_p2(),
            self.0[1]
                .frobenius_p2()
                .mul_by_base_scalar(XI_TO_P_SQUARED_MINUS_1_OVER_6),
        ])
    }
    /// (c_0 + c_1 w)^(p^4) = c_0^(p^4) + c_1^(p^4) w xi^((p^2 - 1) / 3)
    #[must_use]
    pub fn frobenius_p4(&self) -> Self {
        Self::new(&[
            self.0[0].frobenius_p4(),
            self.0[1]
                .frobenius_p4()
                .mul_by_base_scalar(XI_TO_P_SQUARED_MINUS_1_OVER_3),
        ])
    }
    /// Checked inversion. The norm c_0^2 - tau c_1^2 lives in Fp6, and
    /// 1 / (c_0 + c_1 w) = (c_0 - c_1 w) / (c_0^2 - tau c_1^2),
    /// see "Implementing cryptographic pairings", M. Scott, section 3.2.
    pub fn invert(&self) -> Result<Self, FieldError> {
        if self.is_zero() {
            tracing::debug!("Fp12::invert called on zero");
            return Err(FieldError::NonInvertible);
        }
        Ok(self.inv())
    }
    /// Returns whether the norm c_0^2 - tau c_1^2 is one, i.e. whether the conjugate is the
    /// inverse.
    pub fn is_unitary(&self) -> Choice {
        (self.conjugate() * *self).ct_eq(&Self::one())
    }
    /// Returns whether the element lies in the subgroup of order p^4 - p^2 + 1, the one the
    /// cyclotomic squaring is valid on. Membership is a^(p^4) a = a^(p^2), which also implies
    /// the element is unitary.
    pub fn is_cyclotomic(&self) -> Choice {
        (self.frobenius_p4() * *self).ct_eq(&self.frobenius_p2()) & !self.ct_eq(&Self::zero())
    }
    /// The below is the easy part of the final exponentiation step, raising to
    /// (p^6 - 1)(p^2 + 1), which sends any non-zero element into the cyclotomic subgroup.
    /// Corresponds to lines 1-4 of Alg 31 from <https://eprint.iacr.org/2010/354.pdf>.
    ///
    /// The input must be non-zero.
    #[must_use]
    pub fn easy_part(&self) -> Self {
        let f = self.conjugate() * self.inv();
        f.frobenius_p2() * f
    }
    /// left-to-right square and multiply, from the most significant set bit of `power`
    /// down. This is not constant time in the exponent.
    #[must_use]
    pub fn exp<const LIMBS: usize>(&self, power: &Uint<LIMBS>) -> Self {
        let mut sum = Self::one();
        for i in (0..power.bits()).rev() {
            sum = sum.square();
            if bool::from(power.bit(i)) {
                sum *= *self;
            }
        }
        sum
    }
    /// computes a^v for v = 1868033 with a fixed addition chain of 21 cyclotomic squarings
    /// and 4 multiplications. Cyclotomic input only.
    #[must_use]
    pub fn pow_to_v(&self) -> Self {
        let a = *self;
        let t0 = a.cyclotomic_square().cyclotomic_square().cyclotomic_square(); // a^8
        let t1 = t0.cyclotomic_square().cyclotomic_square().cyclotomic_square(); // a^64
        let mut t2 = t0.conjugate(); // a^-8
        t2 *= a; // a^-7
        t2 *= t1; // a^57
        for _ in 0..7 {
            t2 = t2.cyclotomic_square();
        } // a^7296
        t2 *= a; // a^7297
        for _ in 0..8 {
            t2 = t2.cyclotomic_square();
        } // a^1868032
        t2 * a
    }
    /// computes a^u for the BN parameter u = v^3, as three applications of `pow_to_v`.
    /// This is the exponentiation the hard part of the final exponentiation is built from.
    ///
    /// Cyclotomic input only. Under `debug_assertions` or the `cyclotomic-checks` feature
    /// the membership is asserted first.
    #[must_use]
    pub fn pow_to_u(&self) -> Self {
        #[cfg(any(debug_assertions, feature = "cyclotomic-checks"))]
        {
            let is_cyclotomic = bool::from(self.is_cyclotomic());
            tracing::debug!(?is_cyclotomic, "Fp12::pow_to_u");
            assert!(
                is_cyclotomic,
                "pow_to_u requires an element of the cyclotomic subgroup"
            );
        }
        tracing::trace!("Fp12::pow_to_u");
        self.pow_to_v().pow_to_v().pow_to_v()
    }
}
impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    fn mul(self, other: &'b Fp12) -> Self::Output {
        // schoolbook with four Fp6 multiplications:
        // (a_0 + a_1 w)(b_0 + b_1 w) = (a_0 b_0 + tau a_1 b_1) + (a_1 b_0 + b_1 a_0) w
        let tx = self.0[1] * other.0[0] + other.0[1] * self.0[0];
        let ty = self.0[0] * other.0[0] + (self.0[1] * other.0[1]).mul_by_tau();
        Self::Output::new(&[ty, tx])
    }
}
impl Mul for Fp12 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        (&self).mul(&other)
    }
}
impl MulAssign for Fp12 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
/// Unchecked inversion, see `invert`. Zero maps to zero, since every level of the tower
/// maps zero to zero.
impl Inv for Fp12 {
    type Output = Self;
    fn inv(self) -> Self::Output {
        let norm = self.0[0].square() - self.0[1].square().mul_by_tau();
        self.conjugate().scale(norm.inv())
    }
}
impl One for Fp12 {
    fn one() -> Self {
        Self::new(&[Fp6::one(), Fp6::zero()])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero()
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp12 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp12 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}
/// rendered as `(c_1,c_0)`, the coefficient of w first
impl fmt::Display for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.0[1], self.0[0])
    }
}
