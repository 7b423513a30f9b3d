//! Groth16 program for one statement: "this 32-byte message carries a valid
//! Ethereum personal signature under this public key" (or that it does not).
//!
//! The message and the boolean answer are public; signature and key stay
//! private. The circuit recomputes the EIP-191 digest and the secp256k1 ECDSA
//! check over emulated fields, so the boolean cannot disagree with the
//! witnesses. [`EthSignatureProgram`] wraps setup, proving and off-chain
//! verification over BLS12-381.

pub mod ecdsa_gadget;
mod error;
pub mod keccak_gadget;
pub mod predicate;
pub mod program;
pub mod secp256k1;
pub mod secp256k1_gadget;
pub mod serialize;

use std::time::Instant;

use ark_bls12_381::{Bls12_381, Fr};
use ark_ff::PrimeField;
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, ProvingKey, VerifyingKey};
use ark_relations::r1cs::{
    ConstraintSynthesizer, ConstraintSystem, OptimizationGoal, SynthesisError, SynthesisMode,
};
use ark_snark::SNARK;
use ark_std::rand::{CryptoRng, RngCore};
use ethzk_types::{EthPublicKey, EthSignature, Message};
use tracing::{debug, info};

pub use error::{ProgramError, ProgramResult};
pub use predicate::verify_eth_signature;
pub use program::EthSignatureCircuit;

/// Bytes per packed public-input element (the arkworks `[u8]` packing).
const MESSAGE_CHUNK: usize = ((Fr::MODULUS_BIT_SIZE - 1) / 8) as usize;

/// Public inputs in circuit order: packed message bytes, then the output bit.
pub fn public_inputs(message: &Message, output: bool) -> Vec<Fr> {
    let mut inputs: Vec<Fr> = message
        .as_bytes()
        .chunks(MESSAGE_CHUNK)
        .map(Fr::from_le_bytes_mod_order)
        .collect();
    inputs.push(Fr::from(output));
    inputs
}

/// A proof of one `verifySignature` call, bound to its public input and
/// output.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgramProof {
    pub message: Message,
    pub output: bool,
    pub proof: Proof<Bls12_381>,
}

impl ProgramProof {
    pub fn public_inputs(&self) -> Vec<Fr> {
        public_inputs(&self.message, self.output)
    }
}

struct ProgramKeys {
    pk: ProvingKey<Bls12_381>,
    pvk: PreparedVerifyingKey<Bls12_381>,
}

/// The compiled-once signature program.
#[derive(Default)]
pub struct EthSignatureProgram {
    keys: Option<ProgramKeys>,
}

impl EthSignatureProgram {
    pub const NAME: &'static str = "EthSignatureProgram";
    pub const METHOD: &'static str = "verifySignature";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_compiled(&self) -> bool {
        self.keys.is_some()
    }

    /// Run Groth16 setup. Later calls return the existing verifying key
    /// without touching `rng`.
    pub fn compile<R: RngCore + CryptoRng>(
        &mut self,
        rng: &mut R,
    ) -> ProgramResult<&VerifyingKey<Bls12_381>> {
        if self.keys.is_none() {
            let started = Instant::now();
            info!(program = Self::NAME, "compiling");
            let (pk, vk) =
                Groth16::<Bls12_381>::circuit_specific_setup(EthSignatureCircuit::empty(), rng)
                    .map_err(ProgramError::Setup)?;
            let pvk = Groth16::<Bls12_381>::process_vk(&vk).map_err(ProgramError::Setup)?;
            info!(
                program = Self::NAME,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "compiled"
            );
            self.keys = Some(ProgramKeys { pk, pvk });
        } else {
            debug!(program = Self::NAME, "already compiled");
        }
        self.verifying_key().ok_or(ProgramError::NotCompiled)
    }

    pub fn verifying_key(&self) -> Option<&VerifyingKey<Bls12_381>> {
        self.keys.as_ref().map(|keys| &keys.pvk.vk)
    }

    /// Evaluate the predicate and prove the result.
    pub fn run<R: RngCore + CryptoRng>(
        &self,
        message: &Message,
        signature: &EthSignature,
        public_key: &EthPublicKey,
        rng: &mut R,
    ) -> ProgramResult<ProgramProof> {
        let keys = self.keys.as_ref().ok_or(ProgramError::NotCompiled)?;

        let output = verify_eth_signature(message, signature, public_key);
        let circuit = EthSignatureCircuit::new(message, signature, public_key, output);

        let started = Instant::now();
        let proof =
            Groth16::<Bls12_381>::prove(&keys.pk, circuit, rng).map_err(ProgramError::Proving)?;
        debug!(
            output,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "proof generated"
        );

        Ok(ProgramProof {
            message: *message,
            output,
            proof,
        })
    }

    /// Verify a proof off-chain
    pub fn verify(&self, proof: &ProgramProof) -> ProgramResult<bool> {
        self.verify_inputs(&proof.public_inputs(), &proof.proof)
    }

    /// Verify against raw public inputs. `Ok(false)` is a rejected proof; an
    /// input vector of the wrong shape is an error.
    pub fn verify_inputs(&self, inputs: &[Fr], proof: &Proof<Bls12_381>) -> ProgramResult<bool> {
        let keys = self.keys.as_ref().ok_or(ProgramError::NotCompiled)?;
        Groth16::<Bls12_381>::verify_with_processed_vk(&keys.pvk, inputs, proof)
            .map_err(ProgramError::Verification)
    }
}

/// Count constraints in the signature circuit
pub fn constraint_count() -> Result<usize, SynthesisError> {
    let cs = ConstraintSystem::<Fr>::new_ref();
    cs.set_optimization_goal(OptimizationGoal::Constraints);
    cs.set_mode(SynthesisMode::Setup);
    EthSignatureCircuit::empty().generate_constraints(cs.clone())?;
    Ok(cs.num_constraints())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::ToConstraintField;
    use ark_std::rand::{rngs::StdRng, SeedableRng};
    use ethzk_types::EthWallet;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_public_input_packing_matches_arkworks() {
        let message = Message::from_text("Hello, world!").unwrap();
        let packed: Vec<Fr> = message.as_bytes()[..].to_field_elements().unwrap();
        let inputs = public_inputs(&message, true);
        assert_eq!(packed.len(), 2);
        assert_eq!(&inputs[..2], &packed[..]);
        assert_eq!(inputs[2], Fr::from(1u64));
        assert_eq!(public_inputs(&message, false)[2], Fr::from(0u64));
    }

    #[test]
    fn test_constraint_count() {
        let count = constraint_count().unwrap();
        println!("Signature circuit constraint count: {}", count);
        assert!(count < 10_000_000, "constraint count {} exceeds 10M limit", count);
        assert!(count > 150_000, "constraint count {} below one keccak permutation", count);
    }

    #[test]
    fn test_run_before_compile() {
        let program = EthSignatureProgram::new();
        let wallet = EthWallet::random(&mut test_rng());
        let message = Message::from_text("Hello, world!").unwrap();
        let sig = wallet.sign(&message).unwrap();
        let err = program
            .run(&message, &sig, &wallet.public_key(), &mut test_rng())
            .unwrap_err();
        assert!(matches!(err, ProgramError::NotCompiled));
        assert!(program.verifying_key().is_none());
    }

    #[test]
    fn test_compile_is_idempotent() {
        let mut program = EthSignatureProgram::new();
        let mut rng = test_rng();
        let first = program.compile(&mut rng).unwrap().clone();
        let second = program.compile(&mut rng).unwrap().clone();
        assert_eq!(first, second);
        assert!(program.is_compiled());
    }
}
