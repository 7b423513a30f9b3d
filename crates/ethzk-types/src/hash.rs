// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Keccak-256 and the EIP-191 personal-message digest.

use sha3::{Digest, Keccak256};

pub const ETH_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n";

pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// `keccak256("\x19Ethereum Signed Message:\n" || len(message) || message)`,
/// the digest wallets sign for `personal_sign` / `signMessage`.
pub fn eth_message_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(ETH_MESSAGE_PREFIX);
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}
