//! secp256k1 points over emulated field variables.
//!
//! Only the affine pieces the signature check needs: incomplete addition,
//! a fused double-and-add, selection and SEC1 decompression. Additions whose
//! inputs share an x coordinate leave the system unsatisfiable; callers keep
//! away from them with [`crate::secp256k1::offsets`].

use ark_bls12_381::Fr;
use ark_ff::{BigInteger, PrimeField};
use ark_r1cs_std::{
    alloc::AllocVar,
    boolean::Boolean,
    convert::ToBitsGadget,
    eq::EqGadget,
    fields::{emulated_fp::EmulatedFpVar, FieldVar},
    select::CondSelectGadget,
    uint8::UInt8,
    R1CSVar,
};
use ark_relations::r1cs::{ConstraintSystemRef, SynthesisError};
use ethzk_types::COMPRESSED_KEY_LEN;

use crate::secp256k1::{Affine, Fq};

pub type BaseVar = EmulatedFpVar<Fq, Fr>;

#[derive(Clone, Debug)]
pub struct PointVar {
    pub x: BaseVar,
    pub y: BaseVar,
}

impl PointVar {
    pub fn constant(point: Affine) -> Self {
        Self {
            x: BaseVar::constant(point.x),
            y: BaseVar::constant(point.y),
        }
    }

    pub fn value(&self) -> Result<Affine, SynthesisError> {
        Ok(Affine::new_unchecked(self.x.value()?, self.y.value()?))
    }

    pub fn negate(&self) -> Result<Self, SynthesisError> {
        Ok(Self {
            x: self.x.clone(),
            y: self.y.negate()?,
        })
    }

    /// `self + other`, for `self.x != other.x`.
    pub fn add(&self, other: &Self) -> Result<Self, SynthesisError> {
        let lambda = (&other.y - &self.y).mul_by_inverse(&(&other.x - &self.x))?;
        let x = lambda.square()? - &self.x - &other.x;
        let y = lambda * &(&self.x - &x) - &self.y;
        Ok(Self { x, y })
    }

    /// `2 * self + other` with one intermediate x coordinate.
    /// Needs `self.x != other.x` and `self + other` not sharing x with `self`.
    pub fn double_and_add(&self, other: &Self) -> Result<Self, SynthesisError> {
        let l1 = (&other.y - &self.y).mul_by_inverse(&(&other.x - &self.x))?;
        let x3 = l1.square()? - &self.x - &other.x;
        let l2 = (self.y.double()?.mul_by_inverse(&(&x3 - &self.x))? + &l1).negate()?;
        let x4 = l2.square()? - &self.x - &x3;
        let y4 = l2 * &(&self.x - &x4) - &self.y;
        Ok(Self { x: x4, y: y4 })
    }

    pub fn select(cond: &Boolean<Fr>, t: &Self, f: &Self) -> Result<Self, SynthesisError> {
        Ok(Self {
            x: BaseVar::conditionally_select(cond, &t.x, &f.x)?,
            y: BaseVar::conditionally_select(cond, &t.y, &f.y)?,
        })
    }

    /// Decompress a 33-byte SEC1 key. Anything other than `0x02`/`0x03`
    /// followed by the x coordinate of a curve point is unsatisfiable.
    pub fn decompress(bytes: &[UInt8<Fr>]) -> Result<Self, SynthesisError> {
        if bytes.len() != COMPRESSED_KEY_LEN {
            return Err(SynthesisError::Unsatisfiable);
        }
        let cs = bytes.cs();

        let prefix = bytes[0].to_bits_le()?;
        prefix[1].enforce_equal(&Boolean::TRUE)?;
        Boolean::kary_or(&prefix[2..])?.enforce_equal(&Boolean::FALSE)?;
        let odd = &prefix[0];

        let x_bits = be_bytes_to_le_bits(&bytes[1..])?;
        let x = alloc_from_bits::<Fq>(cs.clone(), &x_bits)?;

        let y = BaseVar::new_witness(cs, || {
            let (smaller, larger) =
                Affine::get_ys_from_x_unchecked(x.value()?).unwrap_or_default();
            let odd = odd.value()?;
            // p is odd, so exactly one of y and -y is odd
            Ok(if smaller.into_bigint().is_odd() == odd {
                smaller
            } else {
                larger
            })
        })?;

        let rhs = x.square()? * &x + Fq::from(7u64);
        y.square()?.enforce_equal(&rhs)?;
        y.to_bits_le()?[0].enforce_equal(odd)?;

        Ok(Self { x, y })
    }
}

/// Big-endian bytes to little-endian bits.
pub fn be_bytes_to_le_bits(bytes: &[UInt8<Fr>]) -> Result<Vec<Boolean<Fr>>, SynthesisError> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes.iter().rev() {
        bits.extend(byte.to_bits_le()?);
    }
    Ok(bits)
}

/// Allocate the emulated element whose canonical bits are `bits`.
/// Unsatisfiable if `bits` encode a value outside the field.
pub fn alloc_from_bits<T: PrimeField>(
    cs: ConstraintSystemRef<Fr>,
    bits: &[Boolean<Fr>],
) -> Result<EmulatedFpVar<T, Fr>, SynthesisError> {
    let var = EmulatedFpVar::<T, Fr>::new_witness(cs, || {
        let value = T::BigInt::from_bits_le(&bits.value()?);
        Ok(T::from_bigint(value).unwrap_or_default())
    })?;
    var.to_bits_le()?.enforce_equal(&bits.to_vec())?;
    Ok(var)
}
