// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Hex helpers. Inputs may carry a `0x` prefix; outputs always do.

use crate::DecodeError;

pub fn strip_0x(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

pub fn decode_hex(s: &str, what: &'static str) -> Result<Vec<u8>, DecodeError> {
    hex::decode(strip_0x(s.trim())).map_err(|e| DecodeError::InvalidHex {
        what,
        reason: e.to_string(),
    })
}

/// Decode hex into exactly `N` bytes.
pub fn decode_hex_array<const N: usize>(
    s: &str,
    what: &'static str,
) -> Result<[u8; N], DecodeError> {
    let bytes = decode_hex(s, what)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| DecodeError::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}
