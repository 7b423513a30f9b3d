// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! # ethzk-host
//!
//! Runs [`EthSignatureProgram`](ethzk_circuit::EthSignatureProgram) behind a
//! message boundary.
//!
//! | Module | Purpose |
//! |---|---|
//! | [`host`] | `ExecutionHost`: the `Uninitialized → Loaded → Ready` state machine |
//! | [`worker`] | Dedicated OS thread that owns one host and drains its queue |
//! | [`client`] | `WorkerClient`: async proxy, one correlated request per call |
//! | [`protocol`] | Request / response messages and `VerificationResult` |
//! | [`config`] | `HostConfig` (`ETHZK_RNG_SEED`) |
//!
//! ```rust,no_run
//! use ethzk_host::{HostConfig, WorkerClient};
//!
//! # async fn example() -> ethzk_host::HostResult<()> {
//! let client = WorkerClient::spawn(HostConfig::from_env())?;
//! client.load_program().await?;
//! client.compile_program().await?;
//! let result = client
//!     .verify_signature("Hello, world!", "0x…", "0x02…")
//!     .await?;
//! println!("valid: {}", result.valid);
//! client.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod protocol;
pub mod worker;

pub use client::WorkerClient;
pub use config::HostConfig;
pub use error::{HostError, HostResult};
pub use host::{ExecutionHost, HostState};
pub use protocol::VerificationResult;
