use ark_bls12_381::Fr;
use ark_r1cs_std::{alloc::AllocVar, boolean::Boolean, eq::EqGadget, uint8::UInt8};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ethzk_types::{EthPublicKey, EthSignature, Message, COMPRESSED_KEY_LEN, MESSAGE_LEN, SIGNATURE_LEN};

use crate::ecdsa_gadget::ecdsa_verdict;
use crate::keccak_gadget::eth_message_hash_gadget;

/// The `verifySignature` circuit.
///
/// Satisfiable exactly when `output` is the result of verifying `signature`
/// over the EIP-191 digest of `message` under `public_key`.
#[derive(Clone)]
pub struct EthSignatureCircuit {
    // Public inputs
    pub message: Option<[u8; MESSAGE_LEN]>,
    pub output: Option<bool>,
    // Private witnesses
    pub signature: Option<[u8; SIGNATURE_LEN]>,
    pub public_key: Option<[u8; COMPRESSED_KEY_LEN]>,
}

impl EthSignatureCircuit {
    /// Create a circuit with None witnesses (for setup)
    pub fn empty() -> Self {
        Self {
            message: None,
            output: None,
            signature: None,
            public_key: None,
        }
    }

    pub fn new(
        message: &Message,
        signature: &EthSignature,
        public_key: &EthPublicKey,
        output: bool,
    ) -> Self {
        Self {
            message: Some(*message.as_bytes()),
            output: Some(output),
            signature: Some(signature.to_bytes()),
            public_key: Some(public_key.to_compressed()),
        }
    }
}

fn witness_bytes<const N: usize>(bytes: Option<[u8; N]>) -> [Option<u8>; N] {
    match bytes {
        Some(b) => b.map(Some),
        None => [None; N],
    }
}

impl ConstraintSynthesizer<Fr> for EthSignatureCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        // === Public inputs ===
        // Order: message (2 packed Fr), output bit.
        // Setup only needs the shape, so the message falls back to zeros.
        let message = UInt8::new_input_vec(cs.clone(), &self.message.unwrap_or_default())?;
        let output = Boolean::new_input(cs.clone(), || {
            self.output.ok_or(SynthesisError::AssignmentMissing)
        })?;

        // === Private witnesses ===
        let signature = UInt8::new_witness_vec(cs.clone(), &witness_bytes(self.signature))?;
        let public_key = UInt8::new_witness_vec(cs.clone(), &witness_bytes(self.public_key))?;

        // === Constraints ===
        let digest = eth_message_hash_gadget(&message)?;
        let verdict = ecdsa_verdict(&digest, &signature, &public_key)?;
        verdict.enforce_equal(&output)?;

        Ok(())
    }
}
