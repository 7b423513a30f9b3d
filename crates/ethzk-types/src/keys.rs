// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use std::fmt;

use ark_std::rand::{CryptoRng, RngCore};
use k256::ecdsa::SigningKey;

use crate::encoding::{decode_hex_array, encode_hex};
use crate::hash::eth_message_hash;
use crate::{DecodeError, EthPublicKey, EthSignature, Message};

/// A secp256k1 signing key that signs the way Ethereum wallets do.
#[derive(Clone)]
pub struct EthWallet {
    signing_key: SigningKey,
}

impl EthWallet {
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            signing_key: SigningKey::random(rng),
        }
    }

    pub fn from_secret_hex(s: &str) -> Result<Self, DecodeError> {
        let bytes = decode_hex_array::<32>(s, "secret key")?;
        let signing_key = SigningKey::from_slice(&bytes).map_err(|_| DecodeError::InvalidSecretKey)?;
        Ok(Self { signing_key })
    }

    pub fn secret_hex(&self) -> String {
        encode_hex(self.signing_key.to_bytes())
    }

    pub fn public_key(&self) -> EthPublicKey {
        EthPublicKey::from(*self.signing_key.verifying_key())
    }

    pub fn address_hex(&self) -> String {
        self.public_key().address_hex()
    }

    /// `personal_sign`: ECDSA over the EIP-191 digest of `message`, low-s,
    /// with `v` in `{27, 28}`.
    pub fn sign_message(&self, message: &[u8]) -> Result<EthSignature, k256::ecdsa::Error> {
        let digest = eth_message_hash(message);
        let (signature, recovery_id) = self.signing_key.sign_prehash_recoverable(&digest)?;
        Ok(EthSignature::from_recoverable(signature, recovery_id))
    }

    pub fn sign(&self, message: &Message) -> Result<EthSignature, k256::ecdsa::Error> {
        self.sign_message(message.as_bytes())
    }
}

impl fmt::Debug for EthWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EthWallet")
            .field("address", &self.address_hex())
            .finish_non_exhaustive()
    }
}
