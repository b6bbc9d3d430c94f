//! # bn256-fp12: the target field of a BN256 pairing
//!
//! This crate implements arithmetic in the degree-12 extension 𝔽ₚ¹² of the base field of a
//! 256-bit Barreto-Naehrig curve with parameter u = 1868033³. It is the field in which the
//! optimal ate pairing takes its values, and it carries the operations that the Miller loop and
//! the final exponentiation are assembled from.
//!
//! ## Tower
//!
//! The field is built as a tower, each level a quotient of a polynomial ring over the one below:
//!
//! - 𝔽ₚ² = 𝔽ₚ\[i\] / (i² + 1)
//! - 𝔽ₚ⁶ = 𝔽ₚ²\[τ\] / (τ³ - ξ) with ξ = 3 + i
//! - 𝔽ₚ¹² = 𝔽ₚ⁶\[ω\] / (ω² - τ)
//!
//! ## Basic Usage
//!
//! ```rust
//! use bn256_fp12::{Fp12, U};
//! use crypto_bigint::U64;
//!
//! let g = Fp12::generator();
//! // the generator lies in the cyclotomic subgroup, so the fast routines apply
//! assert_eq!(g.cyclotomic_square(), g.square());
//! assert_eq!(g.pow_to_u(), g.exp(&U64::from_u64(U)));
//! assert_eq!(g.invert().expect("non-zero"), g.conjugate());
//! ```
//!
//! ## Core Components
//!
//! - [`Fp`], [`Fp2`], [`Fp6`], [`Fp12`]: the levels of the tower
//! - [`GENERATOR`]: a fixed element of order r in the cyclotomic subgroup
//! - [`FieldError`]: reported by checked inversion
//!
//! ## Performance and Security
//!
//! Field operations run on Montgomery representations and compare in constant time. The
//! exponentiation routines are not constant time in the exponent, which is public in every use
//! made of them here. The cyclotomic routines do not check their input unless the
//! `cyclotomic-checks` feature or debug assertions are enabled.

mod fields;

pub use crate::fields::fp::{FieldExtensionTrait, Fp};
pub use crate::fields::fp12::{FieldError, Fp12, GENERATOR, U, V};
pub use crate::fields::fp2::Fp2;
pub use crate::fields::fp6::Fp6;
