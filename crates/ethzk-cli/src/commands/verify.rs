use anyhow::{Context, Result};
use ethzk_host::{HostConfig, VerificationResult, WorkerClient};

use crate::commands::recover::recover;
use crate::output;

/// Spawn a worker and bring it to `Ready`, with a spinner per step.
pub async fn ready_client() -> Result<WorkerClient> {
    let client = WorkerClient::spawn(HostConfig::from_env())?;

    let sp = output::spinner("loading program...");
    client.load_program().await?;
    sp.finish_and_clear();

    let sp = output::spinner("compiling circuit...");
    client.compile_program().await.context("circuit compilation failed")?;
    sp.finish_and_clear();

    Ok(client)
}

pub fn print_result(text: &str, result: &VerificationResult) -> Result<()> {
    if output::is_json() {
        output::json_output(serde_json::to_value(result)?);
    } else {
        output::label("message", text);
        output::label("signature", &output::verdict(result.valid));
        output::label("public input", &result.proof.public_input);
        output::label("proof", &result.proof.proof);
    }
    Ok(())
}

pub async fn run(text: &str, signature_hex: &str, public_key: Option<&str>) -> Result<()> {
    let public_key = match public_key {
        Some(pk) => pk.to_string(),
        None => {
            let recovered = recover(text, signature_hex)?;
            output::note(&format!("recovered signer {}", recovered.address_hex()));
            recovered.to_hex()
        }
    };

    let client = ready_client().await?;

    let sp = output::spinner("proving...");
    let result = client.verify_signature(text, signature_hex, &public_key).await?;
    sp.finish_and_clear();

    print_result(text, &result)?;
    client.shutdown().await?;
    Ok(())
}
