// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Value types shared by the circuit, the execution host and the CLI.
//!
//! Everything here is plain data: a fixed 32-byte [`Message`], an
//! Ethereum-encoded [`EthSignature`], a secp256k1 [`EthPublicKey`], plus the
//! signer ([`EthWallet`]) and public-key recovery used on the presentation
//! side. Decoding failures are reported as [`DecodeError`].

pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod message;
pub mod public_key;
pub mod recover;
pub mod signature;

pub use error::DecodeError;
pub use hash::{eth_message_hash, keccak256, ETH_MESSAGE_PREFIX};
pub use keys::EthWallet;
pub use message::{Message, MESSAGE_LEN, MESSAGE_PAD};
pub use public_key::{EthPublicKey, COMPRESSED_KEY_LEN};
pub use recover::recover_public_key;
pub use signature::{EthSignature, SIGNATURE_LEN};
