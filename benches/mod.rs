use criterion::{criterion_group, criterion_main};

use field::fp::*;
use field::fp12::*;
use field::fp2::*;
use field::fp6::*;

criterion_group!(
    fp_benches,
    test_fp_multiplication,
    test_fp_addition,
    test_fp_subtraction,
    test_fp_division,
    test_fp_random,
    test_fp_new
);
criterion_group!(
    fp2_benches,
    test_fp2_multiplication,
    test_fp2_square,
    test_fp2_addition,
    test_fp2_division,
    test_fp2_random
);
criterion_group!(
    fp6_benches,
    test_fp6_multiplication,
    test_fp6_square,
    test_fp6_division,
    test_fp6_frobenius,
    test_fp6_random
);
criterion_group!(
    fp12_benches,
    test_fp12_multiplication,
    test_fp12_addition,
    test_fp12_subtraction,
    test_fp12_square,
    test_fp12_cyclotomic_square,
    test_fp12_inverse,
    test_fp12_frobenius,
    test_fp12_frobenius_p2,
    test_fp12_easy_part,
    test_fp12_pow_to_u,
    test_fp12_exp_u,
    test_fp12_random
);

criterion_main!(fp_benches, fp2_benches, fp6_benches, fp12_benches);
