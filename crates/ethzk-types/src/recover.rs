// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use k256::ecdsa::VerifyingKey;

use crate::hash::eth_message_hash;
use crate::{DecodeError, EthPublicKey, EthSignature};

/// Recover the signer of a `personal_sign` signature, as `ecrecover` does.
/// High-s signatures are accepted.
pub fn recover_public_key(
    message: &[u8],
    signature: &EthSignature,
) -> Result<EthPublicKey, DecodeError> {
    let digest = eth_message_hash(message);
    let (sig, recovery_id) = signature.normalized();
    VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id)
        .map(EthPublicKey::from)
        .map_err(|_| DecodeError::RecoveryFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::{RecoveryId, Signature};

    const MESSAGE: &[u8; 32] = b"this is really 32 byte long, huh";
    const SIG: &str = "0x3c0fb2cfab098941e41e180c5e83bd270f1d52811a517dbee235219f35935717\
                       1ce5858264bbdf0afe617da1dc8f3fa94a350e40442eb0363c3c95be9cd0d6d81b";
    const PK: &str = "0x034646ae5047316b4230d0086c8acec687f00b1cd9d1dc634f6cb358ac0a9a8fff";

    #[test]
    fn recovers_known_signer() {
        let sig = EthSignature::from_hex(SIG).unwrap();
        let pk = recover_public_key(MESSAGE, &sig).unwrap();
        assert_eq!(pk.to_hex(), PK);
        assert_eq!(pk.address_hex(), "0xfcad0b19bb29d4674531d6f115237e16afce377c");
    }

    #[test]
    fn other_message_recovers_other_key() {
        let sig = EthSignature::from_hex(SIG).unwrap();
        let expected = EthPublicKey::from_hex(PK).unwrap();
        match recover_public_key(b"this is really 32 byte long, hah", &sig) {
            Ok(pk) => assert_ne!(pk, expected),
            Err(e) => assert_eq!(e, DecodeError::RecoveryFailed),
        }
    }

    #[test]
    fn high_s_recovers_same_signer() {
        let low = EthSignature::from_hex(SIG).unwrap();
        let (r, _) = low.signature().split_bytes();
        let s_high = -*low.signature().s();
        let high = EthSignature::from_recoverable(
            Signature::from_scalars(r, s_high.to_bytes()).unwrap(),
            RecoveryId::new(true, false),
        );
        let pk = recover_public_key(MESSAGE, &high).unwrap();
        assert_eq!(pk.to_hex(), PK);
    }
}
