use anyhow::{Context, Result};
use ethzk_types::{recover_public_key, EthPublicKey, EthSignature, Message};

use crate::output;

/// Recover the signer of a padded message.
pub fn recover(text: &str, signature_hex: &str) -> Result<EthPublicKey> {
    let message = Message::from_text(text)?;
    let signature = EthSignature::from_hex(signature_hex)?;
    recover_public_key(message.as_bytes(), &signature).context("cannot recover public key")
}

pub fn run(text: &str, signature_hex: &str) -> Result<()> {
    let public_key = recover(text, signature_hex)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "public_key": public_key.to_hex(),
            "address": public_key.address_hex(),
        }));
    } else {
        output::label("public_key", &public_key.to_hex());
        output::label("address", &public_key.address_hex());
    }
    Ok(())
}
