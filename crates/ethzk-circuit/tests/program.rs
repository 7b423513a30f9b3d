//! End-to-end: sign, prove, verify, and ship the proof as JSON.
//! All imports go through the public crate surface.

use std::sync::OnceLock;

use ark_bls12_381::Fr;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use ethzk_circuit::serialize::ProofJson;
use ethzk_circuit::{EthSignatureProgram, ProgramError};
use ethzk_types::{EthPublicKey, EthSignature, EthWallet, Message};

fn rng() -> StdRng {
    StdRng::seed_from_u64(123)
}

fn compiled(rng: &mut StdRng) -> EthSignatureProgram {
    let mut program = EthSignatureProgram::new();
    program.compile(rng).unwrap();
    program
}

/// Setup is the slow part; the tests share one compiled program.
fn program() -> &'static EthSignatureProgram {
    static PROGRAM: OnceLock<EthSignatureProgram> = OnceLock::new();
    PROGRAM.get_or_init(|| compiled(&mut rng()))
}

// ── Hello / Goodbye ──

#[test]
fn hello_valid_goodbye_invalid() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);

    let hello = Message::from_text("Hello, world!").unwrap();
    let goodbye = Message::from_text("Goodbye, world!").unwrap();
    let sig = wallet.sign(&hello).unwrap();
    let pk = wallet.public_key();

    let valid = program.run(&hello, &sig, &pk, &mut rng).unwrap();
    assert!(valid.output);
    assert_eq!(valid.message, hello);
    assert!(program.verify(&valid).unwrap());

    // a negative answer is still a provable statement
    let invalid = program.run(&goodbye, &sig, &pk, &mut rng).unwrap();
    assert!(!invalid.output);
    assert_eq!(invalid.message, goodbye);
    assert!(program.verify(&invalid).unwrap());
}

#[test]
fn ethers_fixture_proves_valid() {
    let mut rng = rng();
    let program = program();
    let message = Message::from_text("this is really 32 byte long, huh").unwrap();
    let sig = EthSignature::from_hex(
        "0x3c0fb2cfab098941e41e180c5e83bd270f1d52811a517dbee235219f35935717\
         1ce5858264bbdf0afe617da1dc8f3fa94a350e40442eb0363c3c95be9cd0d6d81b",
    )
    .unwrap();
    let pk = EthPublicKey::from_hex(
        "0x034646ae5047316b4230d0086c8acec687f00b1cd9d1dc634f6cb358ac0a9a8fff",
    )
    .unwrap();

    let proof = program.run(&message, &sig, &pk, &mut rng).unwrap();
    assert!(proof.output);
    assert!(program.verify(&proof).unwrap());
}

// ── tampering ──

#[test]
fn flipped_output_fails_verification() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);
    let message = Message::from_text("Hello, world!").unwrap();
    let sig = wallet.sign(&message).unwrap();

    let mut proof = program.run(&message, &sig, &wallet.public_key(), &mut rng).unwrap();
    proof.output = !proof.output;
    assert!(!program.verify(&proof).unwrap());
}

#[test]
fn swapped_message_fails_verification() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);
    let message = Message::from_text("Hello, world!").unwrap();
    let sig = wallet.sign(&message).unwrap();

    let mut proof = program.run(&message, &sig, &wallet.public_key(), &mut rng).unwrap();
    proof.message = Message::from_text("Goodbye, world!").unwrap();
    assert!(!program.verify(&proof).unwrap());
}

#[test]
fn forged_output_fails_verification() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);
    let hello = Message::from_text("Hello, world!").unwrap();
    let goodbye = Message::from_text("Goodbye, world!").unwrap();
    let sig = wallet.sign(&hello).unwrap();

    // honest "false" for an unsigned message, re-published as "true"
    let honest = program.run(&goodbye, &sig, &wallet.public_key(), &mut rng).unwrap();
    assert!(!honest.output);
    let mut json = ProofJson::from_proof(&honest).unwrap();
    json.public_output = true;
    let forged = ProofJson::from_json(&json.to_json().unwrap())
        .unwrap()
        .to_proof()
        .unwrap();
    assert!(forged.output);
    assert!(!program.verify(&forged).unwrap());
}

#[test]
fn malformed_public_inputs_are_an_error() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);
    let message = Message::from_text("Hello, world!").unwrap();
    let sig = wallet.sign(&message).unwrap();
    let proof = program.run(&message, &sig, &wallet.public_key(), &mut rng).unwrap();

    let err = program
        .verify_inputs(&[Fr::from(1u64)], &proof.proof)
        .unwrap_err();
    assert!(matches!(err, ProgramError::Verification(_)));
    assert!(program.verify_inputs(&proof.public_inputs(), &proof.proof).unwrap());
}

#[test]
fn proof_from_other_setup_fails() {
    let mut rng = rng();
    let program = program();
    let other = compiled(&mut StdRng::seed_from_u64(321));
    let wallet = EthWallet::random(&mut rng);
    let message = Message::from_text("Hello, world!").unwrap();
    let sig = wallet.sign(&message).unwrap();

    let proof = program.run(&message, &sig, &wallet.public_key(), &mut rng).unwrap();
    assert!(!other.verify(&proof).unwrap());
}

// ── JSON transport ──

#[test]
fn json_proof_still_verifies() {
    let mut rng = rng();
    let program = program();
    let wallet = EthWallet::random(&mut rng);
    let message = Message::from_text("Hello, world!").unwrap();
    let sig = wallet.sign(&message).unwrap();
    let proof = program.run(&message, &sig, &wallet.public_key(), &mut rng).unwrap();

    let json = ProofJson::from_proof(&proof).unwrap().to_json().unwrap();
    let back = ProofJson::from_json(&json).unwrap();
    assert_eq!(back.public_input, message.to_hex());
    assert!(back.public_output);

    let decoded = back.to_proof().unwrap();
    assert_eq!(decoded, proof);
    assert!(program.verify(&decoded).unwrap());
}

#[test]
fn vk_export_has_one_ic_per_input() {
    let vk = program().verifying_key().unwrap();
    let svk = ethzk_circuit::serialize::serialize_vk(vk).unwrap();
    // constant + 2 message elements + output
    assert_eq!(svk.ic.len(), 4);
    assert_eq!(svk.alpha_g1.len(), 192);
    assert_eq!(svk.beta_g2.len(), 384);
}
