//! Typed errors for [`EthSignatureProgram`](crate::EthSignatureProgram).

use ark_relations::r1cs::SynthesisError;
use ark_serialize::SerializationError;
use ethzk_types::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    #[error("program not compiled: call compile first")]
    NotCompiled,

    #[error("circuit setup failed: {0}")]
    Setup(SynthesisError),

    #[error("proving failed: {0}")]
    Proving(SynthesisError),

    #[error("proof verification failed: {0}")]
    Verification(SynthesisError),

    #[error("proof is for program {0:?}")]
    UnknownProgram(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("proof encoding: {0}")]
    Serialization(#[from] SerializationError),
}

pub type ProgramResult<T> = Result<T, ProgramError>;
