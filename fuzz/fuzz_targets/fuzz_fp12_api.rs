#![no_main]
use bn256_fp12::{Fp, Fp12, Fp2, Fp6, U};
use crypto_bigint::{Encoding, U256, U64};
use libfuzzer_sys::fuzz_target;
use num_traits::{Inv, One, Zero};

// twelve coefficients of 32 bytes each, reduced into the base field by `Fp::new`
fn fp12_from_bytes(data: &[u8]) -> Fp12 {
    let c: Vec<Fp> = data
        .chunks_exact(32)
        .take(12)
        .map(|chunk| {
            let mut bytes = [0u8; 32];
            bytes.copy_from_slice(chunk);
            Fp::new(U256::from_le_bytes(bytes))
        })
        .collect();
    Fp12::new(&[
        Fp6::new(&[
            Fp2::new(&[c[0], c[1]]),
            Fp2::new(&[c[2], c[3]]),
            Fp2::new(&[c[4], c[5]]),
        ]),
        Fp6::new(&[
            Fp2::new(&[c[6], c[7]]),
            Fp2::new(&[c[8], c[9]]),
            Fp2::new(&[c[10], c[11]]),
        ]),
    ])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 * 12 * 32 {
        return;
    }
    let a = fp12_from_bytes(&data[..12 * 32]);
    let b = fp12_from_bytes(&data[12 * 32..]);

    assert_eq!(a * b, b * a, "Multiplication is not commutative");
    assert_eq!(a.square(), a * a, "Squaring and mul failed");
    assert_eq!(
        (a * b).frobenius(),
        a.frobenius() * b.frobenius(),
        "Frobenius is not multiplicative"
    );

    if a.is_zero() {
        assert!(a.invert().is_err(), "Zero should not be invertible");
        return;
    }
    let a_inv = a.invert().expect("non-zero element is invertible");
    assert!((a * a_inv).is_one(), "Inversion failed");
    assert_eq!(a_inv, a.inv(), "Checked and unchecked inversion disagree");

    let c = a.easy_part();
    assert!(bool::from(c.is_cyclotomic()), "easy_part left the subgroup");
    assert_eq!(c.cyclotomic_square(), c.square(), "Cyclotomic squaring failed");
    assert_eq!(c.pow_to_u(), c.exp(&U64::from_u64(U)), "pow_to_u failed");
});
