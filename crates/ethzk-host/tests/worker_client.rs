// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! The full remote-call surface, driven the way a front end would.

use std::time::Duration;

use ark_std::rand::{rngs::StdRng, SeedableRng};
use ethzk_host::{HostConfig, HostError, WorkerClient};
use ethzk_types::{EthWallet, Message};

const HELLO: &str = "Hello, world!";
const GOODBYE: &str = "Goodbye, world!";

fn sign(text: &str) -> (String, String) {
    let wallet = EthWallet::random(&mut StdRng::seed_from_u64(2024));
    let sig = wallet.sign(&Message::from_text(text).unwrap()).unwrap();
    (sig.to_hex(), wallet.public_key().to_hex())
}

fn client() -> WorkerClient {
    WorkerClient::spawn(HostConfig::with_seed(42)).unwrap()
}

#[tokio::test]
async fn hello_valid_goodbye_invalid() {
    let (sig, pk) = sign(HELLO);
    let client = client();
    client.load_program().await.unwrap();
    client.compile_program().await.unwrap();

    let hello = client.verify_signature(HELLO, &sig, &pk).await.unwrap();
    assert!(hello.valid);
    assert_eq!(hello.proof.public_input, Message::from_text(HELLO).unwrap().to_hex());

    let goodbye = client.verify_signature(GOODBYE, &sig, &pk).await.unwrap();
    assert!(!goodbye.valid);
    assert!(!goodbye.proof.public_output);

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn not_ready_errors_reach_caller() {
    let (sig, pk) = sign(HELLO);
    let client = client();

    assert!(matches!(client.compile_program().await, Err(HostError::NotLoaded)));
    assert!(matches!(
        client.verify_signature(HELLO, &sig, &pk).await,
        Err(HostError::NotCompiled)
    ));
    client.load_program().await.unwrap();
    assert!(matches!(
        client.verify_signature(HELLO, &sig, &pk).await,
        Err(HostError::NotCompiled)
    ));

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_calls_get_their_own_replies() {
    let (sig, pk) = sign(HELLO);
    let client = client();
    client.load_program().await.unwrap();
    client.compile_program().await.unwrap();

    // a decode error does not poison the host
    let err = client.verify_signature(HELLO, "0xnothex", &pk).await.unwrap_err();
    assert!(matches!(err, HostError::Decode(_)));

    let (hello, goodbye, hello_again) = tokio::join!(
        client.verify_signature(HELLO, &sig, &pk),
        client.verify_signature(GOODBYE, &sig, &pk),
        client.verify_signature(HELLO, &sig, &pk),
    );
    let (hello, goodbye, hello_again) = (hello.unwrap(), goodbye.unwrap(), hello_again.unwrap());
    assert!(hello.valid);
    assert!(!goodbye.valid);
    assert!(hello_again.valid);
    assert_eq!(goodbye.proof.public_input, Message::from_text(GOODBYE).unwrap().to_hex());

    client.shutdown().await.unwrap();
}

#[tokio::test]
async fn abandoned_compile_still_commits() {
    let (sig, pk) = sign(HELLO);
    let client = client();
    client.load_program().await.unwrap();
    client.load_program().await.unwrap();

    // give up on the compile almost immediately
    let _ = tokio::time::timeout(Duration::from_millis(1), client.compile_program()).await;

    // queued behind the abandoned compile, so the host is Ready by now
    let result = client.verify_signature(HELLO, &sig, &pk).await.unwrap();
    assert!(result.valid);
    // already compiled: a no-op
    client.compile_program().await.unwrap();

    client.shutdown().await.unwrap();
}
