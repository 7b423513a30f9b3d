// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fmt;

use crate::encoding::{decode_hex_array, encode_hex};
use crate::DecodeError;

pub const MESSAGE_LEN: usize = 32;

/// Fill byte for short messages. This is the ASCII digit `'0'`, not a NUL
/// byte, so padding changes the signed content.
pub const MESSAGE_PAD: u8 = b'0';

/// The 32-byte public input of the signature program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Message([u8; MESSAGE_LEN]);

impl Message {
    /// UTF-8 text right-padded with `'0'` to 32 bytes. Signer and verifier
    /// must both go through this, or the digests diverge.
    pub fn from_text(text: &str) -> Result<Self, DecodeError> {
        let bytes = text.as_bytes();
        if bytes.len() > MESSAGE_LEN {
            return Err(DecodeError::MessageTooLong { len: bytes.len() });
        }
        let mut buf = [MESSAGE_PAD; MESSAGE_LEN];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(Self(buf))
    }

    pub const fn from_bytes(bytes: [u8; MESSAGE_LEN]) -> Self {
        Self(bytes)
    }

    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        decode_hex_array::<MESSAGE_LEN>(s, "message").map(Self)
    }

    pub fn as_bytes(&self) -> &[u8; MESSAGE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        encode_hex(self.0)
    }

    /// The padded text, if the bytes are valid UTF-8.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl AsRef<[u8]> for Message {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_text() {
            Some(text) => f.write_str(text),
            None => f.write_str(&self.to_hex()),
        }
    }
}
