// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use ark_std::rand::rngs::StdRng;
use ethzk_circuit::serialize::ProofJson;
use ethzk_circuit::EthSignatureProgram;
use ethzk_types::{EthPublicKey, EthSignature, Message};
use tracing::{debug, info, warn};

use crate::config::HostConfig;
use crate::error::{HostError, HostResult};
use crate::protocol::{Call, Reply, VerificationResult};

/// Where the host is in its lifecycle. There is no way back: a fresh host
/// is the only reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    Uninitialized,
    Loaded,
    Ready,
}

enum Slot {
    Empty,
    Loaded(EthSignatureProgram),
    Ready(EthSignatureProgram),
}

/// Owns the single program slot and the randomness used to set it up and
/// prove with it.
pub struct ExecutionHost {
    slot: Slot,
    rng: StdRng,
}

impl ExecutionHost {
    pub fn new(config: &HostConfig) -> Self {
        Self {
            slot: Slot::Empty,
            rng: config.rng(),
        }
    }

    pub fn state(&self) -> HostState {
        match self.slot {
            Slot::Empty => HostState::Uninitialized,
            Slot::Loaded(_) => HostState::Loaded,
            Slot::Ready(_) => HostState::Ready,
        }
    }

    pub fn load_program(&mut self) -> HostResult<()> {
        if let Slot::Empty = self.slot {
            self.slot = Slot::Loaded(EthSignatureProgram::new());
            info!(program = EthSignatureProgram::NAME, "program loaded");
        } else {
            debug!("program already loaded");
        }
        Ok(())
    }

    /// A failed setup leaves the host `Loaded` so the caller can retry.
    pub fn compile_program(&mut self) -> HostResult<()> {
        match &mut self.slot {
            Slot::Empty => Err(HostError::NotLoaded),
            Slot::Ready(_) => {
                debug!("program already compiled");
                Ok(())
            }
            Slot::Loaded(program) => {
                if let Err(e) = program.compile(&mut self.rng) {
                    warn!(error = %e, "compilation failed");
                    return Err(e.into());
                }
                let program = std::mem::take(program);
                self.slot = Slot::Ready(program);
                Ok(())
            }
        }
    }

    pub fn verify_signature(
        &mut self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> HostResult<VerificationResult> {
        let Slot::Ready(program) = &self.slot else {
            return Err(HostError::NotCompiled);
        };

        let message = Message::from_text(message)?;
        let signature = EthSignature::from_hex(signature)?;
        let public_key = EthPublicKey::from_hex(public_key)?;

        let proof = program.run(&message, &signature, &public_key, &mut self.rng)?;
        info!(valid = proof.output, message = %message, "signature checked");

        Ok(VerificationResult {
            valid: proof.output,
            proof: ProofJson::from_proof(&proof)?,
        })
    }

    pub fn handle(&mut self, call: Call) -> HostResult<Reply> {
        match call {
            Call::LoadProgram => self.load_program().map(|()| Reply::Loaded),
            Call::CompileProgram => self.compile_program().map(|()| Reply::Compiled),
            Call::VerifySignature {
                message,
                signature,
                public_key,
            } => self
                .verify_signature(&message, &signature, &public_key)
                .map(Reply::Verified),
        }
    }
}
