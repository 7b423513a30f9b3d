use ethzk_types::{eth_message_hash, EthPublicKey, EthSignature, Message};
use k256::ecdsa::signature::hazmat::PrehashVerifier;

/// Is `signature` a valid `personal_sign` signature of `message` under
/// `public_key`?
///
/// The digest is the EIP-191 hash of the full 32 padded bytes. High-s
/// signatures are normalised first, matching `ecrecover`. `v` takes no part
/// in verification. A `false` here is an answer, not a failure.
pub fn verify_eth_signature(
    message: &Message,
    signature: &EthSignature,
    public_key: &EthPublicKey,
) -> bool {
    let digest = eth_message_hash(message.as_bytes());
    let (sig, _) = signature.normalized();
    public_key.verifying_key().verify_prehash(&digest, &sig).is_ok()
}
