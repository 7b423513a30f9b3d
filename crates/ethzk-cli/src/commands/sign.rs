use anyhow::{Context, Result};
use ethzk_types::Message;

use crate::output;
use crate::wallet::load_wallet;

pub fn run(text: &str) -> Result<()> {
    let wallet = load_wallet()?;
    let signer = wallet.signer()?;

    let message = Message::from_text(text)?;
    let signature = signer.sign(&message).context("signing failed")?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "message": message.to_string(),
            "signature": signature.to_hex(),
            "public_key": wallet.public_key,
        }));
    } else {
        output::label("signed", &message.to_string());
        output::label("signature", &signature.to_hex());
        output::label("public_key", &wallet.public_key);
    }
    Ok(())
}
