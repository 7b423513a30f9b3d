// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

use k256::ecdsa::{RecoveryId, Signature};

use crate::encoding::{decode_hex, encode_hex};
use crate::DecodeError;

pub const SIGNATURE_LEN: usize = 65;

/// An Ethereum personal signature, `r || s || v`.
///
/// `v` is kept exactly as received (`0`/`1` or `27`/`28`); only its parity
/// is meaningful for recovery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EthSignature {
    inner: Signature,
    v: u8,
}

impl EthSignature {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(DecodeError::InvalidLength {
                what: "signature",
                expected: SIGNATURE_LEN,
                actual: bytes.len(),
            });
        }
        let v = bytes[64];
        if !matches!(v, 0 | 1 | 27 | 28) {
            return Err(DecodeError::InvalidRecoveryByte(v));
        }
        let inner = Signature::from_slice(&bytes[..64]).map_err(|_| DecodeError::InvalidSignature)?;
        Ok(Self { inner, v })
    }

    pub fn from_hex(s: &str) -> Result<Self, DecodeError> {
        Self::from_bytes(&decode_hex(s, "signature")?)
    }

    /// Wallet-style encoding of a recoverable signature (`v = 27 + parity`).
    pub fn from_recoverable(signature: Signature, recovery_id: RecoveryId) -> Self {
        Self {
            inner: signature,
            v: 27 + u8::from(recovery_id.is_y_odd()),
        }
    }

    pub fn v(&self) -> u8 {
        self.v
    }

    pub fn y_parity(&self) -> bool {
        self.v % 27 == 1
    }

    pub fn signature(&self) -> &Signature {
        &self.inner
    }

    pub fn recovery_id(&self) -> RecoveryId {
        RecoveryId::new(self.y_parity(), false)
    }

    pub fn is_low_s(&self) -> bool {
        self.inner.normalize_s().is_none()
    }

    /// Low-s form with the recovery id adjusted to match. Negating `s`
    /// negates the nonce point, which flips its y parity.
    pub fn normalized(&self) -> (Signature, RecoveryId) {
        match self.inner.normalize_s() {
            Some(low) => (low, RecoveryId::new(!self.y_parity(), false)),
            None => (self.inner, self.recovery_id()),
        }
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let (r, s) = self.inner.split_bytes();
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&r);
        out[32..64].copy_from_slice(&s);
        out[64] = self.v;
        out
    }

    pub fn to_hex(&self) -> String {
        encode_hex(self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: &str = "3c0fb2cfab098941e41e180c5e83bd270f1d52811a517dbee235219f35935717";
    const S: &str = "1ce5858264bbdf0afe617da1dc8f3fa94a350e40442eb0363c3c95be9cd0d6d8";

    fn fixture_hex(v: &str) -> String {
        format!("0x{R}{S}{v}")
    }

    #[test]
    fn parses_wallet_encoding() {
        let sig = EthSignature::from_hex(&fixture_hex("1b")).unwrap();
        assert_eq!(sig.v(), 27);
        assert!(!sig.y_parity());
        assert!(sig.is_low_s());
        assert_eq!(sig.to_hex(), fixture_hex("1b"));
    }

    #[test]
    fn accepts_raw_parity_byte() {
        let sig = EthSignature::from_hex(&fixture_hex("01")).unwrap();
        assert!(sig.y_parity());
        assert!(sig.recovery_id().is_y_odd());
    }

    #[test]
    fn rejects_bad_recovery_byte() {
        let err = EthSignature::from_hex(&fixture_hex("1d")).unwrap_err();
        assert_eq!(err, DecodeError::InvalidRecoveryByte(29));
    }

    #[test]
    fn rejects_wrong_length() {
        let err = EthSignature::from_hex(&format!("0x{R}{S}")).unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidLength { what: "signature", expected: 65, actual: 64 }
        );
    }

    #[test]
    fn rejects_zero_scalar() {
        let zero = "00".repeat(32);
        let err = EthSignature::from_hex(&format!("{zero}{S}1b")).unwrap_err();
        assert_eq!(err, DecodeError::InvalidSignature);
    }

    #[test]
    fn high_s_normalizes_and_flips_parity() {
        let low = EthSignature::from_hex(&fixture_hex("1b")).unwrap();
        let (r, s) = low.signature().split_bytes();
        let s_high = -*low.signature().s();
        let high_inner = Signature::from_scalars(r, s_high.to_bytes()).unwrap();
        let high = EthSignature::from_recoverable(high_inner, RecoveryId::new(true, false));
        assert!(!high.is_low_s());

        let (norm, recid) = high.normalized();
        assert_eq!(norm.split_bytes().1, s);
        assert!(!recid.is_y_odd());
    }
}
