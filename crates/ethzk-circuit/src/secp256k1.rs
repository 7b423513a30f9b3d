//! Native secp256k1 as arkworks types, for the emulated-field gadgets.
//!
//! `k256` stays the signing and verification backend; these definitions only
//! give the circuit constants and witnesses in the same representation its
//! variables use.

use std::sync::OnceLock;

use ark_ec::{
    models::CurveConfig,
    short_weierstrass::{self, Projective, SWCurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{
    fields::{Fp256, MontBackend, MontConfig},
    AdditiveGroup, MontFp, PrimeField,
};
use ethzk_types::keccak256;

#[derive(MontConfig)]
#[modulus = "115792089237316195423570985008687907853269984665640564039457584007908834671663"]
#[generator = "3"]
pub struct FqConfig;
/// Base field of secp256k1.
pub type Fq = Fp256<MontBackend<FqConfig, 4>>;

#[derive(MontConfig)]
#[modulus = "115792089237316195423570985008687907852837564279074904382605163141518161494337"]
#[generator = "7"]
pub struct FrConfig;
/// Scalar field of secp256k1 (the group order `n`).
pub type Fr = Fp256<MontBackend<FrConfig, 4>>;

pub type Affine = short_weierstrass::Affine<Config>;

#[derive(Copy, Clone, Default, PartialEq, Eq)]
pub struct Config;

impl CurveConfig for Config {
    type BaseField = Fq;
    type ScalarField = Fr;

    const COFACTOR: &'static [u64] = &[0x1];
    const COFACTOR_INV: Fr = MontFp!("1");
}

impl SWCurveConfig for Config {
    const COEFF_A: Fq = MontFp!("0");
    const COEFF_B: Fq = MontFp!("7");
    const GENERATOR: Affine = Affine::new_unchecked(GENERATOR_X, GENERATOR_Y);
}

const GENERATOR_X: Fq =
    MontFp!("55066263022277343669578718895168534326250603453777594175500187360389116729240");
const GENERATOR_Y: Fq =
    MontFp!("32670510020758816978083085130507043184471273380659243275938904335757337482424");

/// Fixed points that keep the in-circuit double-and-add away from the
/// identity and from exceptional additions.
///
/// Every step adds `step` on top of the selected `G`/`Q` terms, and the
/// accumulator starts at `start`. After 256 steps the accumulator holds
/// `u1*G + u2*Q + end`.
#[derive(Clone, Debug)]
pub struct Offsets {
    pub start: Affine,
    pub step: Affine,
    pub step_plus_g: Affine,
    pub end: Affine,
}

pub fn offsets() -> &'static Offsets {
    static OFFSETS: OnceLock<Offsets> = OnceLock::new();
    OFFSETS.get_or_init(|| {
        let start = hash_to_curve(b"ethzk/secp256k1/start");
        let step = hash_to_curve(b"ethzk/secp256k1/step");
        let step_plus_g = (step + Config::GENERATOR).into_affine();

        let mut shifted = Projective::<Config>::from(start);
        for _ in 0..256 {
            shifted.double_in_place();
        }
        // step * (2^256 - 1)
        let end = (shifted + step.mul_bigint([u64::MAX; 4])).into_affine();

        Offsets {
            start,
            step,
            step_plus_g,
            end,
        }
    })
}

/// Try-and-increment: the first `keccak256(tag || counter)` that is the x
/// coordinate of a curve point, with the even y.
fn hash_to_curve(tag: &[u8]) -> Affine {
    let mut counter = 0u32;
    loop {
        let mut seed = tag.to_vec();
        seed.extend_from_slice(&counter.to_be_bytes());
        let x = Fq::from_be_bytes_mod_order(&keccak256(&seed));
        if let Some(point) = Affine::get_point_from_x_unchecked(x, false) {
            return point;
        }
        counter += 1;
    }
}
