use anyhow::Result;
use ethzk_types::{EthWallet, Message};

use crate::commands::verify::ready_client;
use crate::output;
use crate::wallet::crypto_rng;

const SIGNED: &str = "Hello, world!";
const OTHER: &str = "Goodbye, world!";

/// Sign one message with a throwaway key, then prove the signature against
/// it and against a different message.
pub async fn run() -> Result<()> {
    let signer = EthWallet::random(&mut crypto_rng());
    let signature = signer.sign(&Message::from_text(SIGNED)?)?.to_hex();
    let public_key = signer.public_key().to_hex();
    output::note(&format!("signed {SIGNED:?} as {}", signer.address_hex()));

    let client = ready_client().await?;

    let sp = output::spinner(&format!("proving {SIGNED:?}..."));
    let signed = client.verify_signature(SIGNED, &signature, &public_key).await?;
    sp.finish_and_clear();

    let sp = output::spinner(&format!("proving {OTHER:?}..."));
    let other = client.verify_signature(OTHER, &signature, &public_key).await?;
    sp.finish_and_clear();

    client.shutdown().await?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "address": signer.address_hex(),
            "signature": signature,
            "signed": serde_json::to_value(&signed)?,
            "other": serde_json::to_value(&other)?,
        }));
    } else {
        output::label(SIGNED, &output::verdict(signed.valid));
        output::label(OTHER, &output::verdict(other.valid));
        let expected = signed.valid && !other.valid;
        output::status(
            expected,
            if expected { "demo complete" } else { "unexpected verdicts" },
        );
    }
    Ok(())
}
