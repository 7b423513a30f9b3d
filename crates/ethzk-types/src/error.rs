// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Typed errors for decoding messages, signatures and keys.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid hex in {what}: {reason}")]
    InvalidHex { what: &'static str, reason: String },

    #[error("message is {len} bytes, at most 32 allowed")]
    MessageTooLong { len: usize },

    #[error("{what}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid recovery byte {0} (expected 0, 1, 27 or 28)")]
    InvalidRecoveryByte(u8),

    #[error("signature scalars out of range")]
    InvalidSignature,

    #[error("not a secp256k1 public key")]
    InvalidPublicKey,

    #[error("invalid secret key")]
    InvalidSecretKey,

    #[error("public key recovery failed")]
    RecoveryFailed,
}
