// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Async proxy over the worker.
//!
//! Each call gets a fresh id, parks a `oneshot` sender under that id, and
//! sends one [`Request`]. A router task reads worker responses and wakes the
//! matching caller. Dropping a call future removes its entry; the worker
//! still finishes that step and the router discards the reply.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::HostConfig;
use crate::error::{HostError, HostResult};
use crate::protocol::{Call, Reply, Request, RequestId, Response, VerificationResult};
use crate::worker;

type Pending = Arc<Mutex<HashMap<RequestId, oneshot::Sender<HostResult<Reply>>>>>;

fn lock(pending: &Pending) -> MutexGuard<'_, HashMap<RequestId, oneshot::Sender<HostResult<Reply>>>> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Removes a call's entry if the call future is dropped before its reply.
struct PendingGuard<'a> {
    id: RequestId,
    pending: &'a Pending,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if lock(self.pending).remove(&self.id).is_some() {
            debug!(id = self.id, "call abandoned");
        }
    }
}

pub struct WorkerClient {
    requests: mpsc::UnboundedSender<Request>,
    pending: Pending,
    next_id: AtomicU64,
    worker: thread::JoinHandle<()>,
    router: JoinHandle<()>,
}

impl WorkerClient {
    /// Start a worker thread with a fresh host. Must be called inside a
    /// tokio runtime.
    pub fn spawn(config: HostConfig) -> HostResult<Self> {
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let worker = worker::spawn(config, req_rx, resp_tx).map_err(HostError::Spawn)?;

        let pending = Pending::default();
        let router = tokio::spawn(route(resp_rx, Arc::clone(&pending)));

        Ok(Self {
            requests: req_tx,
            pending,
            next_id: AtomicU64::new(1),
            worker,
            router,
        })
    }

    pub async fn load_program(&self) -> HostResult<()> {
        match self.call(Call::LoadProgram).await? {
            Reply::Loaded => Ok(()),
            _ => Err(HostError::UnexpectedReply),
        }
    }

    pub async fn compile_program(&self) -> HostResult<()> {
        match self.call(Call::CompileProgram).await? {
            Reply::Compiled => Ok(()),
            _ => Err(HostError::UnexpectedReply),
        }
    }

    pub async fn verify_signature(
        &self,
        message: &str,
        signature: &str,
        public_key: &str,
    ) -> HostResult<VerificationResult> {
        let call = Call::VerifySignature {
            message: message.to_string(),
            signature: signature.to_string(),
            public_key: public_key.to_string(),
        };
        match self.call(call).await? {
            Reply::Verified(result) => Ok(result),
            _ => Err(HostError::UnexpectedReply),
        }
    }

    /// Close the queue, let the worker finish what it already accepted, and
    /// wait for it to exit.
    pub async fn shutdown(self) -> HostResult<()> {
        let Self {
            requests,
            worker,
            router,
            ..
        } = self;
        drop(requests);

        let joined = tokio::task::spawn_blocking(move || worker.join())
            .await
            .map_err(|_| HostError::WorkerUnavailable)?;
        joined.map_err(|_| HostError::WorkerUnavailable)?;
        router.await.map_err(|_| HostError::WorkerUnavailable)?;
        debug!("worker shut down");
        Ok(())
    }

    async fn call(&self, call: Call) -> HostResult<Reply> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = oneshot::channel();
        lock(&self.pending).insert(id, tx);
        let _guard = PendingGuard {
            id,
            pending: &self.pending,
        };

        debug!(id, method = call.method(), "sending request");
        self.requests
            .send(Request { id, call })
            .map_err(|_| HostError::WorkerUnavailable)?;

        rx.await.map_err(|_| HostError::WorkerUnavailable)?
    }
}

async fn route(mut responses: mpsc::UnboundedReceiver<Response>, pending: Pending) {
    while let Some(Response { id, result }) = responses.recv().await {
        let waiter = lock(&pending).remove(&id);
        match waiter {
            Some(tx) => {
                if tx.send(result).is_err() {
                    debug!(id, "caller went away before the reply");
                }
            }
            None => debug!(id, "discarding reply for abandoned call"),
        }
    }
    // Worker gone: dropping the senders fails every waiting call.
    lock(&pending).clear();
}
