//! This describes the quadratic field extension of the base field, defined by the tower
//! Fp^2 = Fp[X] / (X^2 + 1). Since p = 3 mod 4, -1 is a non-residue and we write the root of
//! the polynomial as `i`, so that elements of this field are represented as c_0 + c_1 i.
//!
//! The sextic extension is built on top of this one with the non-residue xi = 3 + i.
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crypto_bigint::rand_core::CryptoRngCore;
use num_traits::{Inv, One, Zero};
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

pub type Fp2 = FieldExtension<2, 2, Fp>;

/// the cubic non-residue xi = 3 + i that defines Fp^6 = Fp^2[tau] / (tau^3 - xi)
pub(crate) const XI: Fp2 = Fp2::new(&[Fp::THREE, Fp::ONE]);

impl Fp2 {
    /// multiplies by the non-residue xi = 3 + i, using only additions:
    /// (c_0 + c_1 i)(3 + i) = (3c_0 - c_1) + (c_0 + 3c_1) i
    pub fn mul_by_xi(&self) -> Self {
        let c0 = self.0[0] + self.0[0] + self.0[0] - self.0[1];
        let c1 = self.0[1] + self.0[1] + self.0[1] + self.0[0];
        Self::new(&[c0, c1])
    }
    pub fn conjugate(&self) -> Self {
        Self::new(&[self.0[0], -self.0[1]])
    }
    /// the p-power map, which for a quadratic extension with i^p = -i is conjugation
    pub fn frobenius(&self) -> Self {
        self.conjugate()
    }
    /// complex squaring, (a + bi)^2 = (a + b)(a - b) + 2ab i
    pub fn square(&self) -> Self {
        let ab = self.0[0] * self.0[1];
        let c0 = (self.0[0] + self.0[1]) * (self.0[0] - self.0[1]);
        Self::new(&[c0, ab + ab])
    }
}
impl FieldExtensionTrait<2, 2> for Fp2 {
    fn square(&self) -> Self {
        Fp2::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Fp2::rand(rng)
    }
}
// make quadratic extension visible to the sextic extension
impl FieldExtensionTrait<6, 3> for Fp2 {
    fn square(&self) -> Self {
        Fp2::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Fp2::rand(rng)
    }
}
impl Mul for Fp2 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        // This requires a bit more consideration. In Fp2,
        // in order to multiply, we implement complex Karatsuba
        // multiplication.
        // See https://eprint.iacr.org/2006/471.pdf, Sec 3
        let t0 = self.0[0] * rhs.0[0];
        let t1 = self.0[1] * rhs.0[1];

        let c1 = (self.0[0] + self.0[1]) * (rhs.0[0] + rhs.0[1]) - t0 - t1;
        // i^2 = -1
        let c0 = t0 - t1;

        Self::new(&[c0, c1])
    }
}
impl MulAssign for Fp2 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Inv for Fp2 {
    type Output = Self;
    fn inv(self) -> Self {
        // 1 / (a + bi) = (a - bi) / (a^2 + b^2)
        let norm = (self.0[0].square() + self.0[1].square()).inv();
        Self::new(&[self.0[0] * norm, -(self.0[1] * norm)])
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp2 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp2 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}
impl One for Fp2 {
    fn one() -> Self {
        Self::new(&[Fp::ONE, Fp::ZERO])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero()
    }
}
/// rendered as `(c_1, c_0)`, the coefficient of `i` first
impl fmt::Display for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[1], self.0[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::{rand_core::OsRng, U256};

    fn create_field(value: [u64; 4]) -> Fp {
        Fp::new(U256::from_words(value))
    }
    fn create_field_extension(v1: [u64; 4], v2: [u64; 4]) -> Fp2 {
        Fp2::new(&[create_field(v1), create_field(v2)])
    }

    mod multiplication_tests {
        use super::*;

        #[test]
        fn test_i_squared_is_minus_one() {
            let i = Fp2::new(&[Fp::ZERO, Fp::ONE]);
            assert_eq!(i * i, -Fp2::one(), "i^2 = -1 failed");
        }

        #[test]
        fn test_multiplication_properties() {
            for _ in 0..20 {
                let a = Fp2::rand(&mut OsRng);
                let b = Fp2::rand(&mut OsRng);
                let c = Fp2::rand(&mut OsRng);
                assert_eq!(a * b, b * a, "Multiplication is not commutative");
                assert_eq!((a * b) * c, a * (b * c), "Multiplication is not associative");
                assert_eq!(a * (b + c), a * b + a * c, "Multiplication is not distributive");
            }
        }

        #[test]
        fn test_square() {
            let a = create_field_extension([1, 2, 3, 4], [5, 6, 7, 8]);
            assert_eq!(a.square(), a * a, "Squaring and mul failed");
            for _ in 0..20 {
                let b = Fp2::rand(&mut OsRng);
                assert_eq!(b.square(), b * b, "Squaring and mul failed");
            }
        }

        #[test]
        fn test_mul_by_xi() {
            for _ in 0..20 {
                let a = Fp2::rand(&mut OsRng);
                assert_eq!(a.mul_by_xi(), a * XI, "Multiplication by xi failed");
            }
        }

        #[test]
        fn test_scale() {
            let a = Fp2::rand(&mut OsRng);
            assert_eq!(
                a.scale(Fp::THREE),
                a * Fp2::from(3u64),
                "Scaling by base field element failed"
            );
        }
    }
    mod division_tests {
        use super::*;

        #[test]
        fn test_division_cases() {
            let a = Fp2::rand(&mut OsRng);
            let b = Fp2::rand(&mut OsRng);
            assert_eq!(a / a, Fp2::one(), "Division by self failed");
            assert_eq!(a / Fp2::one(), a, "Division by one failed");
            assert_eq!((a / b) * b, a, "Division-Mult composition failed");
        }

        #[test]
        fn test_inverse_of_zero_is_zero() {
            assert_eq!(Fp2::zero().inv(), Fp2::zero(), "Inverse of zero should map to zero");
        }
    }
    mod frobenius_tests {
        use super::*;

        #[test]
        fn test_frobenius_is_pth_power() {
            // raising to p with square and multiply over the limbs of p
            let a = Fp2::rand(&mut OsRng);
            let p = Fp::characteristic();
            let mut res = Fp2::one();
            for i in (0..256).rev() {
                res = res.square();
                if bool::from(p.bit(i)) {
                    res *= a;
                }
            }
            assert_eq!(a.frobenius(), res, "Frobenius is not the p-power map");
            assert_eq!(a.frobenius().frobenius(), a, "Frobenius failed at cycle order 2");
        }
    }
    mod display_tests {
        use super::*;

        #[test]
        fn test_display() {
            let a = Fp2::new(&[Fp::ONE, Fp::TWO]);
            assert_eq!(
                a.to_string(),
                "(0000000000000000000000000000000000000000000000000000000000000002, \
                 0000000000000000000000000000000000000000000000000000000000000001)"
            );
        }
    }
}
