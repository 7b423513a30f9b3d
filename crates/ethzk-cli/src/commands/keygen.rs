use anyhow::Result;
use ethzk_types::EthWallet;

use crate::output;
use crate::wallet::{crypto_rng, save_wallet_to, wallet_path, WalletData};

pub fn run() -> Result<()> {
    let path = wallet_path()?;
    if path.exists() {
        anyhow::bail!("wallet already exists at {}\ndelete it first to regenerate", path.display());
    }

    let signer = EthWallet::random(&mut crypto_rng());
    let wallet = WalletData::from_wallet(&signer);
    save_wallet_to(&path, &wallet)?;

    if output::is_json() {
        output::json_output(serde_json::json!({
            "wallet_path": path.display().to_string(),
            "address": wallet.address,
            "public_key": wallet.public_key,
        }));
    } else {
        output::status(true, &format!("wallet created at {}", path.display()));
        output::label("address", &wallet.address);
        output::label("public_key", &wallet.public_key);
    }
    Ok(())
}
