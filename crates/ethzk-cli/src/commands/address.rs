use anyhow::Result;

use crate::output;
use crate::wallet::load_wallet;

pub fn run() -> Result<()> {
    let wallet = load_wallet()?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "address": wallet.address,
            "public_key": wallet.public_key,
        }));
    } else {
        output::label("address", &wallet.address);
        output::label("public_key", &wallet.public_key);
    }
    Ok(())
}
