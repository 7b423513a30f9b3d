use anyhow::{Context, Result};
use ark_std::rand::{rngs::StdRng, SeedableRng};
use ethzk_types::EthWallet;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output;

pub const WALLET_ENV: &str = "ETHZK_WALLET";

pub fn crypto_rng() -> StdRng {
    StdRng::from_entropy()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WalletData {
    pub secret_key: String,
    pub address: String,
    pub public_key: String,
}

impl WalletData {
    pub fn from_wallet(wallet: &EthWallet) -> Self {
        Self {
            secret_key: wallet.secret_hex(),
            address: wallet.address_hex(),
            public_key: wallet.public_key().to_hex(),
        }
    }

    pub fn signer(&self) -> Result<EthWallet> {
        EthWallet::from_secret_hex(&self.secret_key).context("wallet secret_key is corrupt")
    }
}

/// `$ETHZK_WALLET`, else `~/.ethzk/wallet.json`.
pub fn wallet_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(WALLET_ENV) {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().context("cannot determine home directory")?;
    Ok(home.join(".ethzk").join("wallet.json"))
}

pub fn load_wallet() -> Result<WalletData> {
    let path = wallet_path()?;
    if !path.exists() {
        return Err(output::fail_with_hint(
            &format!("no wallet at {}", path.display()),
            "run `ethzk keygen` first",
        ));
    }
    load_wallet_from(&path)
}

pub fn load_wallet_from(path: &Path) -> Result<WalletData> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read wallet at {}", path.display()))?;
    serde_json::from_str(&data).context("invalid wallet JSON")
}

pub fn save_wallet_to(path: &Path, wallet: &WalletData) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(wallet)?;
    fs::write(path, json).with_context(|| format!("cannot write wallet at {}", path.display()))?;
    Ok(())
}
