//! Signature verification in-circuit: ECDSA over secp256k1, evaluated with
//! emulated base and scalar field arithmetic.

use ark_bls12_381::Fr;
use ark_ec::short_weierstrass::SWCurveConfig;
use ark_ff::{BigInteger, PrimeField};
use ark_r1cs_std::{
    alloc::AllocVar,
    boolean::Boolean,
    convert::ToBitsGadget,
    eq::EqGadget,
    fields::{emulated_fp::EmulatedFpVar, fp::FpVar, FieldVar},
    uint8::UInt8,
    R1CSVar,
};
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use ethzk_types::{COMPRESSED_KEY_LEN, SIGNATURE_LEN};

use crate::secp256k1::{self, offsets, Config};
use crate::secp256k1_gadget::{alloc_from_bits, be_bytes_to_le_bits, PointVar};

pub type ScalarVar = EmulatedFpVar<secp256k1::Fr, Fr>;

/// ECDSA verification of a 32-byte prehash over secp256k1, as a circuit.
///
/// `signature` is `r || s || v` (65 bytes), `public_key` is compressed SEC1
/// (33 bytes). The returned boolean is the verdict: `R = (z/s)*G + (r/s)*Q`
/// is not the identity and `R.x mod n == r`. `s` is not normalised, since
/// `-R` has the same x.
///
/// Inputs no honest witness can carry make the system unsatisfiable instead
/// of producing `false`:
///
/// - `public_key` is not `0x02`/`0x03` followed by a curve x coordinate
/// - `v` is not one of `0, 1, 27, 28`
/// - `r` or `s` is zero or not below `n`
pub fn ecdsa_verdict(
    digest: &[UInt8<Fr>],
    signature: &[UInt8<Fr>],
    public_key: &[UInt8<Fr>],
) -> Result<Boolean<Fr>, SynthesisError> {
    if digest.len() != 32 || signature.len() != SIGNATURE_LEN {
        return Err(SynthesisError::Unsatisfiable);
    }
    if public_key.len() != COMPRESSED_KEY_LEN {
        return Err(SynthesisError::Unsatisfiable);
    }
    let cs = signature.cs().or(public_key.cs()).or(digest.cs());

    // v * (v - 1) * (v - 27) * (v - 28) == 0
    let v = signature[64].to_fp()?;
    let roots = &v * &(&v - Fr::from(1u64));
    let roots = roots * &(&v - Fr::from(27u64));
    let roots = roots * &(&v - Fr::from(28u64));
    roots.enforce_equal(&FpVar::zero())?;

    let r_bits = be_bytes_to_le_bits(&signature[..32])?;
    Boolean::kary_or(&r_bits)?.enforce_equal(&Boolean::TRUE)?;
    let r = alloc_from_bits::<secp256k1::Fr>(cs.clone(), &r_bits)?;

    let s_bits = be_bytes_to_le_bits(&signature[32..64])?;
    Boolean::kary_or(&s_bits)?.enforce_equal(&Boolean::TRUE)?;
    let s = alloc_from_bits::<secp256k1::Fr>(cs.clone(), &s_bits)?;

    let q = PointVar::decompress(public_key)?;

    // z = digest mod n
    let digest_bits = be_bytes_to_le_bits(digest)?;
    let z = ScalarVar::new_witness(cs.clone(), || {
        let digest = digest.value()?;
        Ok(secp256k1::Fr::from_be_bytes_mod_order(&digest))
    })?;
    enforce_reduction::<secp256k1::Fr>(cs.clone(), &digest_bits, &z.to_bits_le()?)?;

    let w = s.inverse()?;
    let u1 = (&z * &w).to_bits_le()?;
    let u2 = (&r * &w).to_bits_le()?;

    let offsets = offsets();
    let step = PointVar::constant(offsets.step);
    let step_plus_g = PointVar::constant(offsets.step_plus_g);
    let q_plus_step = q.add(&step)?;
    let q_plus_step_plus_g = q.add(&step_plus_g)?;

    let mut acc = PointVar::constant(offsets.start);
    for (b1, b2) in u1.iter().zip(&u2).rev() {
        let with_q = PointVar::select(b1, &q_plus_step_plus_g, &q_plus_step)?;
        let without_q = PointVar::select(b1, &step_plus_g, &step)?;
        let addend = PointVar::select(b2, &with_q, &without_q)?;
        acc = acc.double_and_add(&addend)?;
    }

    // acc = R + end. R = O lands on end itself, so subtract through G there
    // and let the flag carry the verdict.
    let end = PointVar::constant(offsets.end);
    let degenerate = acc.x.is_eq(&end.x)?;
    let correction = PointVar::select(
        &degenerate,
        &PointVar::constant(Config::GENERATOR),
        &end.negate()?,
    )?;
    let point = acc.add(&correction)?;

    let x_mod_n = ScalarVar::new_witness(cs.clone(), || {
        let x = point.x.value()?.into_bigint();
        Ok(secp256k1::Fr::from_le_bytes_mod_order(&x.to_bytes_le()))
    })?;
    enforce_reduction::<secp256k1::Fr>(cs, &point.x.to_bits_le()?, &x_mod_n.to_bits_le()?)?;

    let matches = x_mod_n.is_eq(&r)?;
    Ok(&!&degenerate & &matches)
}

/// Enforce `value == reduced + k * T::MODULUS` for a bit `k`, where `value`
/// is any 256-bit number and `reduced` the canonical bits of an element of
/// `T`. Requires `T::MODULUS > 2^255`, so one subtraction is enough.
fn enforce_reduction<T: PrimeField>(
    cs: ConstraintSystemRef<Fr>,
    value: &[Boolean<Fr>],
    reduced: &[Boolean<Fr>],
) -> Result<(), SynthesisError> {
    if value.len() != 256 || reduced.len() != 256 {
        return Err(SynthesisError::Unsatisfiable);
    }
    let modulus = T::MODULUS.to_bits_le();
    let n_lo = bits_to_u128(&modulus[..128]);
    let n_hi = bits_to_u128(&modulus[128..256]);

    let k = Boolean::new_witness(cs.clone(), || Ok(value.value()? != reduced.value()?))?;
    let carry = Boolean::new_witness(cs, || {
        let r_lo = bits_to_u128(&reduced[..128].value()?);
        let k = if k.value()? { n_lo } else { 0 };
        Ok(r_lo.overflowing_add(k).1)
    })?;

    let two_128 = Fr::from(u128::MAX) + Fr::from(1u64);
    let v_lo = Boolean::le_bits_to_fp(&value[..128])?;
    let v_hi = Boolean::le_bits_to_fp(&value[128..])?;
    let r_lo = Boolean::le_bits_to_fp(&reduced[..128])?;
    let r_hi = Boolean::le_bits_to_fp(&reduced[128..])?;
    let k = FpVar::from(k);
    let carry = FpVar::from(carry);

    // r_lo + k * n_lo == v_lo + carry * 2^128
    (r_lo + &k * Fr::from(n_lo)).enforce_equal(&(v_lo + &carry * two_128))?;
    // r_hi + k * n_hi + carry == v_hi
    (r_hi + k * Fr::from(n_hi) + carry).enforce_equal(&v_hi)?;
    Ok(())
}

fn bits_to_u128(bits: &[bool]) -> u128 {
    bits.iter()
        .rev()
        .fold(0u128, |acc, &bit| (acc << 1) | u128::from(bit))
}
