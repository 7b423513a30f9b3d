mod commands;
mod output;
mod wallet;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ethzk", about = "Prove Ethereum signatures in zero knowledge")]
struct Cli {
    /// Machine-readable JSON on stdout
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Generate a new key and create wallet
    Keygen,
    /// Show wallet address and public key
    Address,
    /// Sign a message (padded with '0' to 32 bytes) with the wallet key
    Sign {
        /// Message text, at most 32 bytes
        message: String,
    },
    /// Recover the signer's public key from a message and signature
    Recover {
        message: String,
        /// 65-byte signature hex (r || s || v)
        signature: String,
    },
    /// Prove whether a signature over a message is valid
    Verify {
        message: String,
        /// 65-byte signature hex (r || s || v)
        signature: String,
        /// Signer public key (SEC1 hex); recovered from the signature if omitted
        #[arg(long)]
        public_key: Option<String>,
    },
    /// Sign with a throwaway key and prove a matching and a mismatching message
    Demo,
    /// Run circuit setup and print the verifying key
    Vk,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    output::set_json_mode(cli.json);

    match cli.command {
        Cmd::Keygen => commands::keygen::run()?,
        Cmd::Address => commands::address::run()?,
        Cmd::Sign { message } => commands::sign::run(&message)?,
        Cmd::Recover { message, signature } => commands::recover::run(&message, &signature)?,
        Cmd::Verify {
            message,
            signature,
            public_key,
        } => commands::verify::run(&message, &signature, public_key.as_deref()).await?,
        Cmd::Demo => commands::demo::run().await?,
        Cmd::Vk => commands::vk::run()?,
    }
    Ok(())
}
