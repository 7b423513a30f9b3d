// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for [`ExecutionHost`](crate::host::ExecutionHost) and
//! [`WorkerClient`](crate::client::WorkerClient) calls.

use ethzk_circuit::ProgramError;
use ethzk_types::DecodeError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no program loaded: call load_program first")]
    NotLoaded,

    #[error("program not compiled: call compile_program first")]
    NotCompiled,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("compilation failed: {0}")]
    Compilation(String),

    #[error("proving failed: {0}")]
    Proving(String),

    #[error("worker sent a reply of the wrong kind")]
    UnexpectedReply,

    #[error("cannot start worker thread: {0}")]
    Spawn(std::io::Error),

    #[error("worker is not running")]
    WorkerUnavailable,
}

impl From<ProgramError> for HostError {
    fn from(err: ProgramError) -> Self {
        match err {
            ProgramError::NotCompiled => HostError::NotCompiled,
            ProgramError::Setup(e) => HostError::Compilation(e.to_string()),
            ProgramError::Decode(e) => HostError::Decode(e),
            other => HostError::Proving(other.to_string()),
        }
    }
}

pub type HostResult<T> = Result<T, HostError>;
