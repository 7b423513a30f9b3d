// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use k256::ecdsa::VerifyingKey;

use crate::encoding::{decode_hex, encode_hex};
use crate::hash::keccak256;
use crate::DecodeError;

pub const COMPRESSED_KEY_LEN: usize = 33;

/// A secp256k1 public key. Accepts SEC1 compressed (`02`/`03`) or
/// uncompressed (`04`) input; the compressed form is canonical.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthPublicKey(VerifyingKey);

impl EthPublicKey {
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        VerifyingKey::from_sec1_bytes(bytes)
            .map(Self)
            .map_err(|_| DecodeError::InvalidPublicKey)
    }

    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        Self::from_sec1_bytes(&decode_hex(s, "public key")?)
    }

    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.0
    }

    pub fn to_compressed(&self) -> [u8; COMPRESSED_KEY_LEN] {
        let point = self.0.to_encoded_point(true);
        let mut out = [0u8; COMPRESSED_KEY_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    pub fn to_uncompressed(&self) -> [u8; 65] {
        let point = self.0.to_encoded_point(false);
        let mut out = [0u8; 65];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Compressed SEC1 hex.
    pub fn to_hex(&self) -> String {
        encode_hex(self.to_compressed())
    }

    /// Last 20 bytes of `keccak256(x || y)`.
    pub fn address(&self) -> [u8; 20] {
        let digest = keccak256(&self.to_uncompressed()[1..]);
        let mut out = [0u8; 20];
        out.copy_from_slice(&digest[12..]);
        out
    }

    pub fn address_hex(&self) -> String {
        encode_hex(self.address())
    }
}

impl From<VerifyingKey> for EthPublicKey {
    fn from(key: VerifyingKey) -> Self {
        Self(key)
    }
}
