// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The worker: one OS thread, one [`ExecutionHost`], requests handled
//! strictly in arrival order.

use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::config::HostConfig;
use crate::host::ExecutionHost;
use crate::protocol::{Request, Response};

pub const WORKER_THREAD_NAME: &str = "ethzk-worker";

/// Start the worker. It exits once `requests` is closed and drained, or
/// when nobody is left to receive responses.
pub fn spawn(
    config: HostConfig,
    requests: UnboundedReceiver<Request>,
    responses: UnboundedSender<Response>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name(WORKER_THREAD_NAME.into())
        .spawn(move || run(ExecutionHost::new(&config), requests, responses))
}

fn run(
    mut host: ExecutionHost,
    mut requests: UnboundedReceiver<Request>,
    responses: UnboundedSender<Response>,
) {
    info!("worker started");
    while let Some(Request { id, call }) = requests.blocking_recv() {
        debug!(id, method = call.method(), "handling request");
        let result = host.handle(call);
        if responses.send(Response { id, result }).is_err() {
            debug!(id, "response channel closed");
            break;
        }
    }
    info!(state = ?host.state(), "worker stopped");
}
