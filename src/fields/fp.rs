//! This module implements the base prime field of the 256-bit BN curve with parameter
//! $u = 1868033^3$. The modulus is
//!
//! $p = 36u^4 + 36u^3 + 24u^2 + 6u + 1$
//! $= \mathtt{0x8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667}$,
//!
//! which is congruent to 3 mod 4, so that -1 is a quadratic non-residue and the quadratic
//! extension can be built with $i^2 = -1$.
//!
//! Arithmetic is never done on plain integers. There are two levels of care taken here:
//!
//! 1. Montgomery arithmetic:
//!     every element is held in Montgomery form, which turns the reduction after a
//!     multiplication into shifts and additions. For more information, see Ref 1.
//! 2. Constant-time operations:
//!     all binary operations are executed through the `ConstMontyForm` struct of
//!     `crypto_bigint`, so that the sequence of machine operations does not depend on the
//!     values being operated on.
//!
//! References
//! ----------
//! 1. <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>
//!
//! N.B.: the #[allow(unused_imports)] below is due to the base field being rolled out by a
//! macro. Crates used only inside the macro body look unused to the linter.

use crypto_bigint::subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
#[allow(unused_imports)]
use crypto_bigint::{
    impl_modulus, modular::ConstMontyParams, rand_core::CryptoRngCore, RandomMod, Uint, U256,
};
use num_traits::{Inv, One, Pow, Zero};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use subtle::CtOption;

/// This defines the key properties of a field in the tower. Mathematically a finite field
/// satisfies many more properties; the (non-exhaustive) list below is only what the generic
/// extension container needs from the level beneath it.
///
/// `D` is the degree of the extension this field is viewed from, and `N` the number of
/// coefficients of that extension. The base field, for instance, is seen by the quadratic
/// extension as `FieldExtensionTrait<2, 2>`.
pub trait FieldExtensionTrait<const D: usize, const N: usize>:
    Sized
    + Copy
    + Clone
    + fmt::Debug
    + Default
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
    + Div<Output = Self>
    + DivAssign
    + Neg<Output = Self>
    + PartialEq
    + ConstantTimeEq
    + ConditionallySelectable
    + Zero
    + One
    + Inv<Output = Self>
    + From<u64>
{
    // specialized algorithms exist at each level of the tower
    fn square(&self) -> Self;

    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self;
}

/// Due to the fact that we use `crypto_bigint` to handle the multiprecision arithmetic
/// we must accept (for now) the fact that it requires the usage of a macro,
/// `impl_modulus!`, which generates and contains all the needed information.
/// This means that we roll our implementation into a macro that
/// provides all the needed functionality.
macro_rules! define_finite_prime_field {
    ($wrapper_name:ident, $uint_type:ty, $modulus:expr, $degree:expr, $nreps:expr) => {
        impl_modulus!(ModulusStruct, $uint_type, $modulus);

        //special struct for const-time arithmetic on montgomery form integers mod p
        type Output =
            crypto_bigint::modular::ConstMontyForm<ModulusStruct, { ModulusStruct::LIMBS }>;
        #[derive(Clone, Debug, Copy)] //to be used in const contexts
        pub struct $wrapper_name(ModulusStruct, Output);

        impl $wrapper_name {
            // builder structure to create elements in the base field of a given value
            pub const fn new(value: $uint_type) -> Self {
                Self(ModulusStruct, Output::new(&value))
            }
            /// Parses a decimal string into a field element, reducing it modulo p.
            /// Returns `None` on any non-digit character.
            pub fn new_from_str(value: &str) -> Option<Self> {
                let ten = Self::from(10u64);
                let mut res = Self::ZERO;
                for c in value.chars() {
                    let d = c.to_digit(10)?;
                    res = res * ten + Self::from(d as u64);
                }
                Some(res)
            }
            // take the element and convert it to "normal" form from montgomery form
            pub const fn value(&self) -> $uint_type {
                self.1.retrieve()
            }
            pub fn characteristic() -> $uint_type {
                <$uint_type>::from(ModulusStruct::MODULUS.as_nz_ref().get())
            }
            pub const ZERO: Self = Self::new(<$uint_type>::from_words([0x0; 4]));
            pub const ONE: Self = Self::new(<$uint_type>::from_words([0x1, 0x0, 0x0, 0x0]));
            pub const TWO: Self = Self::new(<$uint_type>::from_words([0x2, 0x0, 0x0, 0x0]));
            pub const THREE: Self = Self::new(<$uint_type>::from_words([0x3, 0x0, 0x0, 0x0]));
        }
        impl FieldExtensionTrait<$degree, $nreps> for $wrapper_name {
            fn square(&self) -> Self {
                (*self) * (*self)
            }
            fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
                Self::new(<$uint_type>::random_mod(
                    rng,
                    ModulusStruct::MODULUS.as_nz_ref(),
                ))
            }
        }
        impl From<u64> for $wrapper_name {
            fn from(value: u64) -> Self {
                Self(ModulusStruct, Output::new(&<$uint_type>::from_u64(value)))
            }
        }
        /// We now implement binary operations on the base field. This more or less
        /// just wraps the same operations on the underlying montgomery representations
        /// of the field element, without ever leaving montgomery form.
        impl Add for $wrapper_name {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 + other.1)
            }
        }
        impl AddAssign for $wrapper_name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }
        impl Zero for $wrapper_name {
            fn zero() -> Self {
                Self::ZERO
            }
            fn is_zero(&self) -> bool {
                bool::from(self.ct_eq(&Self::ZERO))
            }
        }
        impl One for $wrapper_name {
            fn one() -> Self {
                Self::ONE
            }
        }
        impl Default for $wrapper_name {
            fn default() -> Self {
                Self::ZERO
            }
        }
        impl Sub for $wrapper_name {
            type Output = Self;
            fn sub(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 - other.1)
            }
        }
        impl SubAssign for $wrapper_name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }
        /// Checking equality is not generally speaking constant time. Therefore, we use
        /// the functionality from subtle::ConstantTimeEq to do the comparison, which
        /// returns a Choice that `PartialEq` then unwraps.
        impl ConstantTimeEq for $wrapper_name {
            fn ct_eq(&self, other: &Self) -> Choice {
                self.1.ct_eq(&other.1)
            }
        }
        impl PartialEq for $wrapper_name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bool::from(self.ct_eq(other))
            }
        }
        impl ConditionallySelectable for $wrapper_name {
            fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
                Self::new(<$uint_type>::conditional_select(
                    &a.value(),
                    &b.value(),
                    choice,
                ))
            }
        }
        impl Mul for $wrapper_name {
            type Output = Self;
            fn mul(self, other: Self) -> Self {
                Self(ModulusStruct, self.1 * other.1)
            }
        }
        impl MulAssign for $wrapper_name {
            fn mul_assign(&mut self, other: Self) {
                *self = *self * other;
            }
        }
        /// Inversion is done in constant time by `crypto_bigint` with the Bernstein-Yang
        /// algorithm, <https://eprint.iacr.org/2019/266.pdf>.
        ///
        /// The underlying routine returns an option, which is empty exactly when the input
        /// is zero. The trait has to return a value, so zero is mapped to zero. Callers that
        /// need to know about a zero input should check `is_zero` first.
        impl Inv for $wrapper_name {
            type Output = Self;
            fn inv(self) -> Self {
                Self(
                    ModulusStruct,
                    CtOption::from(self.1.inv()).unwrap_or(Self::ZERO.1),
                )
            }
        }
        #[allow(clippy::suspicious_arithmetic_impl)]
        impl Div for $wrapper_name {
            type Output = Self;
            fn div(self, other: Self) -> Self {
                self * other.inv()
            }
        }
        impl DivAssign for $wrapper_name {
            fn div_assign(&mut self, other: Self) {
                *self = *self / other;
            }
        }
        impl Neg for $wrapper_name {
            type Output = Self;
            fn neg(self) -> Self {
                Self(ModulusStruct, -self.1)
            }
        }
        impl Pow<$uint_type> for $wrapper_name {
            type Output = Self;
            fn pow(self, rhs: $uint_type) -> Self::Output {
                Self(ModulusStruct, self.1.pow(&rhs))
            }
        }
        /// Renders the canonical (non-montgomery) value as 64 lowercase hex digits.
        impl fmt::Display for $wrapper_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:x}", self.value())
            }
        }
    };
}

const BN256_MOD_STRING: &str = "8fb501e34aa387f9aa6fecb86184dc21ee5b88d120b5b59e185cac6c5e089667";
define_finite_prime_field!(Fp, U256, BN256_MOD_STRING, 1, 1);

/// the code below makes the base field "visible" to the quadratic extension. Generic traits
/// cannot express the statement "the child field of an extension has a degree strictly less
/// than the current degree", so we specify the const parameters by hand instead.
impl FieldExtensionTrait<2, 2> for Fp {
    fn square(&self) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::square(self)
    }
    fn rand<R: CryptoRngCore>(rng: &mut R) -> Self {
        <Fp as FieldExtensionTrait<1, 1>>::rand(rng)
    }
}

impl Fp {
    /// inherent squaring, so that callers do not need to disambiguate between the two trait
    /// views of the base field
    #[inline]
    pub fn square(&self) -> Self {
        (*self) * (*self)
    }
}
