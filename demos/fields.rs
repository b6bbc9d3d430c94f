use bn256_fp12::{Fp, Fp12, Fp2, Fp6, U, V};
use crypto_bigint::{U256, U64};
use num_traits::{Inv, One, Zero};
use tracing::{info, warn};

fn fp_example() {
    info!("Examples with Fp...");
    let mut f = Fp::ONE;
    info!("Fp::ONE = {}", f);
    f = f + f;
    info!("Fp::ONE + Fp::ONE = {}", f);
    f *= Fp::THREE;
    info!("2 * 3 = {}", f);
    f /= Fp::TWO;
    info!("6 / 2 = {}", f);
    f = f.inv();
    info!("1 / 3 = {}", f);
    f *= Fp::THREE;
    info!("3 * (1/3) = {}", f);

    f = Fp::new(U256::from_u32(10));
    info!("10.square() = {}", f.square());
    match Fp::new_from_str("42") {
        Some(f) => info!("Fp::new_from_str(\"42\") = {}", f),
        None => warn!("could not parse 42"),
    }
    info!("Fp::characteristic() = {}", Fp::characteristic());
    info!("");
}

fn tower_example() {
    info!("Examples with the tower...");
    let i = Fp2::new(&[Fp::ZERO, Fp::ONE]);
    info!("i * i = {}", i * i);
    let xi = Fp2::new(&[Fp::THREE, Fp::ONE]);
    info!("(1 + i) * xi = {}", Fp2::new(&[Fp::ONE, Fp::ONE]).mul_by_xi());
    info!("xi.inv() = {}", xi.inv());

    let tau = Fp6::new(&[Fp2::zero(), Fp2::one(), Fp2::zero()]);
    info!("tau^3 = {}", tau * tau * tau);
    info!("");
}

fn fp12_example() {
    info!("Examples with Fp12...");
    let g = Fp12::generator();
    info!("g = {}", g);
    info!("g is cyclotomic: {}", bool::from(g.is_cyclotomic()));
    info!(
        "g.cyclotomic_square() == g.square(): {}",
        g.cyclotomic_square() == g.square()
    );
    match g.invert() {
        Ok(g_inv) => info!("g.invert() == g.conjugate(): {}", g_inv == g.conjugate()),
        Err(e) => warn!(?e, "generator should be invertible"),
    }
    info!(
        "g^v via the addition chain matches square-and-multiply: {}",
        g.pow_to_v() == g.exp(&U64::from_u64(V))
    );
    info!("g^u = {}", g.pow_to_u());

    let r =
        U256::from_be_hex("8fb501e34aa387f9aa6fecb86184dc212e8d8e12f82b39241a2ef45b57ac7261");
    info!("g^r == 1: {}", g.exp(&r).is_one());

    // anything non-zero can be moved into the subgroup before using the fast routines
    let h = (g + Fp12::one()).easy_part();
    info!("easy_part is cyclotomic: {}", bool::from(h.is_cyclotomic()));
    info!("h^u == h.pow_to_u(): {}", h.exp(&U64::from_u64(U)) == h.pow_to_u());

    if let Err(e) = Fp12::zero().invert() {
        warn!(?e, "inverting zero");
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    fp_example();
    tower_example();
    fp12_example();
}
