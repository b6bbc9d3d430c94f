// we likewise define the specifics of the sextic extension here. there are some additional
// helper functions we create just as with the quadratic extension. The sextic extension is
// defined by the tower F_{p^6} = F_{p^2}(tau) / (tau^3 - (3+i)), and its elements are written
// c_0 + c_1 tau + c_2 tau^2.
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{FieldExtensionTrait, Fp};
use crate::fields::fp2::Fp2;
use crypto_bigint::{rand_core::CryptoRngCore, U256};
use num_traits::{Inv, One, Zero};
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};

// The twisting constants below involve exponents up to (2p^2 - 2)/3, which do not fit in the
// precision of the base field. They can be derived with the machinery here by widening p,
// but doing so on the fly is pure overhead, so we hardcode the values for clarity and speed.
// All are canonical (non-montgomery) integers.

// xi^((p - 1) / 3), so that tau^p = tau * xi^((p - 1) / 3)
const XI_TO_P_MINUS_1_OVER_3: Fp2 = Fp2::new(&[
    Fp::new(U256::from_words([
        0x887f568e3cb7f583,
        0x8580d5c665af30b5,
        0x2324553813044cae,
        0x2338e7dbf670f360,
    ])),
    Fp::new(U256::from_words([
        0x8ce345691eca8113,
        0x5207b77fdf0538e7,
        0xc7d02cfe70ced287,
        0x39b2f6d974b6caad,
    ])),
]);
// xi^((2p - 2) / 3), so that tau^(2p) = tau^2 * xi^((2p - 2) / 3)
const XI_TO_2P_MINUS_2_OVER_3: Fp2 = Fp2::new(&[
    Fp::new(U256::from_words([
        0x308270ab07b3d0db,
        0x17ca1b663b9d811a,
        0x3552af4af082d0c9,
        0x2fdafc97ff7a78a0,
    ])),
    Fp::new(U256::from_words([
        0x4a0e9aa690456cbe,
        0x60546a1f7686cf20,
        0x802d69ceaa1d9438,
        0x2bf695e2b89fd9c2,
    ])),
]);
// xi^((p^2 - 1) / 3), a primitive cube root of unity lying in the base field
pub(crate) const XI_TO_P_SQUARED_MINUS_1_OVER_3: Fp = Fp::new(U256::from_words([
    0x5e5d7456b745ed38,
    0x66ddd5416786143c,
    0xdf19eaf8dd8fdf29,
    0x8fb501e34aa387f8,
]));
// xi^((2p^2 - 2) / 3), the square of the above
const XI_TO_2P_SQUARED_MINUS_2_OVER_3: Fp = Fp::new(U256::from_words([
    0xb9ff3815a6c2a92e,
    0x877db38fb92fa161,
    0xcb5601bf83f4fcf8,
    0x0,
]));

pub type Fp6 = FieldExtension<6, 3, Fp2>;

impl Fp6 {
    /// multiplies by tau, the quadratic non-residue defining Fp^12:
    /// tau (c_0 + c_1 tau + c_2 tau^2) = xi c_2 + c_0 tau + c_1 tau^2
    pub fn mul_by_tau(&self) -> Self {
        Self::new(&[self.0[2].mul_by_xi(), self.0[0], self.0[1]])
    }
    /// multiplies every coefficient by a bare base field element
    pub fn mul_by_base_scalar(&self, factor: Fp) -> Self {
        Self::new(&[
            self.0[0].scale(factor),
            self.0[1].scale(factor),
            self.0[2].scale(factor),
        ])
    }
    /// (c_0 + c_1 tau + c_2 tau^2)^p = c_0^p + c_1^p tau^p + c_2^p tau^(2p)
    pub fn frobenius(&self) -> Self {
        Self::new(&[
            self.0[0].frobenius(),
            self.0[1].frobenius() * XI_TO_P_MINUS_1_OVER_3,
            self.0[2].frobenius() * XI_TO_2P_MINUS_2_OVER_3,
        ])
    }
    /// the coefficients are fixed by the p^2-power map, only the powers of tau twist
    pub fn frobenius_p2(&self) -> Self {
        Self::new(&[
            self.0[0],
            self.0[1].scale(XI_TO_P_SQUARED_MINUS_1_OVER_3),
            self.0[2].scale(XI_TO_2P_SQUARED_MINUS_2_OVER_3),
        ])
    }
    /// the p^2-power twists applied twice, which swaps the two cube roots of unity
    pub fn frobenius_p4(&self) -> Self {
        Self::new(&[
            self.0[0],
            self.0[1].scale(XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            self.0[2].scale(XI_TO_P_SQUARED_MINUS_1_OVER_3),
        ])
    }
    // this is simply the same as the multiplication below
    // however, there are some simple algebraic reductions
    // you can do with squaring. this just implements that,
    // but functionally it is the same as the `Mul` trait below
    // see CH-SQR2 of https://eprint.iacr.org/2006/471.pdf
    pub fn square(&self) -> Self {
        let t0 = self.0[0].square();
        let cross = self.0[0] * self.0[1];
        let t1 = cross + cross;
        let t2 = (self.0[0] - self.0[1] + self.0[2]).square();
        let bc = self.0[1] * self.0[2];
        let s3 = bc + bc;
        let s4 = self.0[2].square();

        Self::new(&[
            t0 + s3.mul_by_xi(),
            t1 + s4.mul_by_xi(),
            t1 + t2 + s3 - t0 - s4,
        ])
    }
}
impl FieldExtensionTrait<6, 3> for Fp6 {
    fn square(&self) -> Self {
        Fp6::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Fp6::rand(rng)
    }
}
// make sextic extension visible to the dodecic extension
impl FieldExtensionTrait<12, 2> for Fp6 {
    fn square(&self) -> Self {
        Fp6::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        Fp6::rand(rng)
    }
}
impl Mul for Fp6 {
    type Output = Self;
    fn mul(self, other: Self) -> Self::Output {
        // This is the exact same strategy as multiplication in Fp2
        // see the doc string there for more details
        let t0 = self.0[0] * other.0[0];
        let t1 = self.0[1] * other.0[1];
        let t2 = self.0[2] * other.0[2];

        Self::new(&[
            ((self.0[1] + self.0[2]) * (other.0[1] + other.0[2]) - t1 - t2).mul_by_xi() + t0,
            (self.0[0] + self.0[1]) * (other.0[0] + other.0[1]) - t0 - t1 + t2.mul_by_xi(),
            (self.0[0] + self.0[2]) * (other.0[0] + other.0[2]) - t0 + t1 - t2,
        ])
    }
}
impl MulAssign for Fp6 {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}
impl Inv for Fp6 {
    type Output = Self;
    fn inv(self) -> Self::Output {
        let t0 = self.0[0].square() - (self.0[1] * self.0[2]).mul_by_xi();
        let t1 = self.0[2].square().mul_by_xi() - self.0[0] * self.0[1];
        let t2 = self.0[1].square() - self.0[0] * self.0[2];

        let inverse = ((self.0[2] * t1 + self.0[1] * t2).mul_by_xi() + self.0[0] * t0).inv();
        Self::new(&[inverse * t0, inverse * t1, inverse * t2])
    }
}
impl One for Fp6 {
    fn one() -> Self {
        Self::new(&[Fp2::one(), Fp2::zero(), Fp2::zero()])
    }
    fn is_one(&self) -> bool {
        self.0[0].is_one() && self.0[1].is_zero() && self.0[2].is_zero()
    }
}
#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for Fp6 {
    type Output = Self;
    fn div(self, other: Self) -> Self::Output {
        self * other.inv()
    }
}
impl DivAssign for Fp6 {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}
/// rendered as `(c_2, c_1, c_0)`, highest power of tau first
impl fmt::Display for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0[2], self.0[1], self.0[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::rand_core::OsRng;

    fn tau() -> Fp6 {
        Fp6::new(&[Fp2::zero(), Fp2::one(), Fp2::zero()])
    }

    mod residue_tests {
        use super::*;

        #[test]
        fn test_tau_cubed_is_xi() {
            let xi = Fp6::new(&[crate::fields::fp2::XI, Fp2::zero(), Fp2::zero()]);
            assert_eq!(tau() * tau() * tau(), xi, "tau^3 = xi failed");
        }

        #[test]
        fn test_mul_by_tau() {
            for _ in 0..20 {
                let a = Fp6::rand(&mut OsRng);
                assert_eq!(a.mul_by_tau(), a * tau(), "Multiplication by tau failed");
            }
        }

        #[test]
        fn test_cube_root_of_unity() {
            let w = XI_TO_P_SQUARED_MINUS_1_OVER_3;
            assert_ne!(w, Fp::ONE, "Twist constant should be non-trivial");
            assert_eq!(w * w * w, Fp::ONE, "Twist constant is not a cube root of unity");
            assert_eq!(w * w, XI_TO_2P_SQUARED_MINUS_2_OVER_3, "Twist constants disagree");
        }
    }
    mod multiplication_tests {
        use super::*;

        #[test]
        fn test_multiplication_associativity_commutativity_distributivity() {
            for _ in 0..10 {
                let a = Fp6::rand(&mut OsRng);
                let b = Fp6::rand(&mut OsRng);
                let c = Fp6::rand(&mut OsRng);
                assert_eq!(a * b, b * a, "Multiplication is not commutative");
                assert_eq!((a * b) * c, a * (b * c), "Multiplication is not associative");
                assert_eq!(a * (b + c), a * b + a * c, "Multiplication is not distributive");
            }
        }

        #[test]
        fn test_square() {
            for _ in 0..20 {
                let a = Fp6::rand(&mut OsRng);
                assert_eq!(a.square(), a * a, "Squaring and mul failed");
            }
        }

        #[test]
        fn test_scalars() {
            let a = Fp6::rand(&mut OsRng);
            let s = <Fp as FieldExtensionTrait<1, 1>>::rand(&mut OsRng);
            let embedded = Fp2::new(&[s, Fp::ZERO]);
            assert_eq!(
                a.mul_by_base_scalar(s),
                a.scale(embedded),
                "Base field scaling disagrees with Fp2 scaling"
            );
            assert_eq!(
                a.scale(embedded),
                a * Fp6::new(&[embedded, Fp2::zero(), Fp2::zero()]),
                "Fp2 scaling disagrees with multiplication"
            );
        }
    }
    mod division_tests {
        use super::*;

        #[test]
        fn test_division_cases() {
            let a = Fp6::rand(&mut OsRng);
            let b = Fp6::rand(&mut OsRng);
            assert_eq!(a / a, Fp6::one(), "Division by self failed");
            assert_eq!(a / Fp6::one(), a, "Division by one failed");
            assert_eq!((a / b) * b, a, "Division-Mult composition failed");
        }

        #[test]
        fn test_inverse_of_zero_is_zero() {
            assert_eq!(Fp6::zero().inv(), Fp6::zero(), "Inverse of zero should map to zero");
        }
    }
    mod frobenius_tests {
        use super::*;

        #[test]
        fn test_frobenius_is_pth_power() {
            let a = Fp6::rand(&mut OsRng);
            let p = Fp::characteristic();
            let mut res = Fp6::one();
            for i in (0..256).rev() {
                res = res.square();
                if bool::from(p.bit(i)) {
                    res *= a;
                }
            }
            assert_eq!(a.frobenius(), res, "Frobenius is not the p-power map");
        }

        #[test]
        fn test_frobenius_family() {
            let a = Fp6::rand(&mut OsRng);
            assert_eq!(
                a.frobenius().frobenius(),
                a.frobenius_p2(),
                "Frobenius twice disagrees with p^2 map"
            );
            assert_eq!(
                a.frobenius_p2().frobenius_p2(),
                a.frobenius_p4(),
                "p^2 map twice disagrees with p^4 map"
            );
            assert_eq!(
                a.frobenius_p2().frobenius_p4(),
                a,
                "Frobenius failed at cycle order 6"
            );
            let b = Fp6::rand(&mut OsRng);
            assert_eq!(
                (a * b).frobenius(),
                a.frobenius() * b.frobenius(),
                "Frobenius is not multiplicative"
            );
        }
    }
    mod display_tests {
        use super::*;

        #[test]
        fn test_display_order() {
            let a = Fp6::new(&[Fp2::zero(), Fp2::zero(), Fp2::one()]);
            let zero = "0".repeat(64);
            let one = format!("{}1", "0".repeat(63));
            assert_eq!(
                a.to_string(),
                format!("(({zero}, {one}), ({zero}, {zero}), ({zero}, {zero}))")
            );
        }
    }
}
