// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Messages crossing the worker boundary. Every [`Request`] is answered by
//! exactly one [`Response`] carrying the same id.

use ethzk_circuit::serialize::ProofJson;
use serde::{Deserialize, Serialize};

use crate::error::HostResult;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    LoadProgram,
    CompileProgram,
    VerifySignature {
        /// Unpadded text; the host pads it.
        message: String,
        signature: String,
        public_key: String,
    },
}

impl Call {
    pub fn method(&self) -> &'static str {
        match self {
            Call::LoadProgram => "loadProgram",
            Call::CompileProgram => "compileProgram",
            Call::VerifySignature { .. } => "verifySignature",
        }
    }
}

#[derive(Debug)]
pub struct Request {
    pub id: RequestId,
    pub call: Call,
}

#[derive(Debug)]
pub enum Reply {
    Loaded,
    Compiled,
    Verified(VerificationResult),
}

#[derive(Debug)]
pub struct Response {
    pub id: RequestId,
    pub result: HostResult<Reply>,
}

/// Outcome of `verifySignature`: the verdict and the proof that backs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    pub proof: ProofJson,
}
