//! JSON transport for proofs and hex export of the verifying key.
//!
//! # Encoding
//!
//! - **Proof**: compressed arkworks canonical form, `0x`-prefixed hex.
//! - **Message**: the 32 public-input bytes, `0x`-prefixed hex.
//! - **VK points**: uncompressed arkworks canonical form (LE), bare hex.

use ark_bls12_381::{Bls12_381, G1Affine, G2Affine};
use ark_groth16::{Proof, VerifyingKey};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, SerializationError};
use ethzk_types::encoding::{decode_hex, encode_hex};
use ethzk_types::Message;
use serde::{Deserialize, Serialize};

use crate::{EthSignatureProgram, ProgramError, ProgramProof, ProgramResult};

/// Wire form of a [`ProgramProof`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofJson {
    pub program: String,
    pub public_input: String,
    pub public_output: bool,
    pub proof: String,
}

impl ProofJson {
    pub fn from_proof(proof: &ProgramProof) -> ProgramResult<Self> {
        let mut bytes = Vec::new();
        proof.proof.serialize_compressed(&mut bytes)?;
        Ok(Self {
            program: EthSignatureProgram::NAME.to_string(),
            public_input: proof.message.to_hex(),
            public_output: proof.output,
            proof: encode_hex(&bytes),
        })
    }

    pub fn to_proof(&self) -> ProgramResult<ProgramProof> {
        if self.program != EthSignatureProgram::NAME {
            return Err(ProgramError::UnknownProgram(self.program.clone()));
        }
        let message = Message::from_hex(&self.public_input)?;
        let bytes = decode_hex(&self.proof, "proof")?;
        let proof = Proof::<Bls12_381>::deserialize_compressed(bytes.as_slice())?;
        Ok(ProgramProof {
            message,
            output: self.public_output,
            proof,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}

/// Serialized verification key (hex strings)
#[derive(Clone, Debug, Serialize)]
pub struct SerializedVK {
    pub alpha_g1: String,
    pub beta_g2: String,
    pub gamma_g2: String,
    pub delta_g2: String,
    /// ic\[0\] = constant term, ic\[1..\] = public input coefficients
    pub ic: Vec<String>,
}

/// Serialize G1 point to uncompressed hex (96 bytes = 192 hex chars)
pub fn serialize_g1(point: &G1Affine) -> Result<String, SerializationError> {
    let mut bytes = Vec::new();
    point.serialize_uncompressed(&mut bytes)?;
    Ok(hex::encode(&bytes))
}

/// Serialize G2 point to uncompressed hex (192 bytes = 384 hex chars)
pub fn serialize_g2(point: &G2Affine) -> Result<String, SerializationError> {
    let mut bytes = Vec::new();
    point.serialize_uncompressed(&mut bytes)?;
    Ok(hex::encode(&bytes))
}

pub fn serialize_vk(vk: &VerifyingKey<Bls12_381>) -> Result<SerializedVK, SerializationError> {
    Ok(SerializedVK {
        alpha_g1: serialize_g1(&vk.alpha_g1)?,
        beta_g2: serialize_g2(&vk.beta_g2)?,
        gamma_g2: serialize_g2(&vk.gamma_g2)?,
        delta_g2: serialize_g2(&vk.delta_g2)?,
        ic: vk
            .gamma_abc_g1
            .iter()
            .map(serialize_g1)
            .collect::<Result<_, _>>()?,
    })
}
