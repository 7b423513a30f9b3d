//! Keccak-256 over `UInt8` / `UInt64` gadgets, and the EIP-191 personal
//! message digest built on it.
//!
//! Lanes are little-endian `UInt64`s, so XOR with constants and rotations are
//! free; each XOR or AND of two variable bits costs one constraint. One
//! permutation is roughly 150K constraints.

use ark_bls12_381::Fr;
use ark_r1cs_std::{convert::ToBytesGadget, uint64::UInt64, uint8::UInt8};
use ark_relations::r1cs::SynthesisError;
use ethzk_types::ETH_MESSAGE_PREFIX;

/// Sponge rate of Keccak-256 in bytes.
const RATE: usize = 136;

const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

const RHO: [usize; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

type State = [UInt64<Fr>; 25];

fn keccak_f(state: &mut State) {
    for rc in ROUND_CONSTANTS {
        // θ
        let columns: Vec<UInt64<Fr>> = (0..5)
            .map(|x| {
                &(&(&(&state[x] ^ &state[x + 5]) ^ &state[x + 10]) ^ &state[x + 15]) ^ &state[x + 20]
            })
            .collect();
        for x in 0..5 {
            let d = &columns[(x + 4) % 5] ^ &columns[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[5 * y + x] ^= &d;
            }
        }

        // ρ and π
        let mut last = state[1].clone();
        for (&pi, &rho) in PI.iter().zip(&RHO) {
            last = std::mem::replace(&mut state[pi], last.rotate_left(rho));
        }

        // χ
        for y in 0..5 {
            let row: Vec<UInt64<Fr>> = state[5 * y..5 * y + 5].to_vec();
            for x in 0..5 {
                state[5 * y + x] = &row[x] ^ &(&!&row[(x + 1) % 5] & &row[(x + 2) % 5]);
            }
        }

        // ι
        state[0] ^= rc;
    }
}

/// Keccak-256 (the original padding, as used by Ethereum) of `input`.
/// Returns the 32 digest bytes in output order.
pub fn keccak256_gadget(input: &[UInt8<Fr>]) -> Result<Vec<UInt8<Fr>>, SynthesisError> {
    let mut padded = input.to_vec();
    padded.push(UInt8::constant(0x01));
    while padded.len() % RATE != 0 {
        padded.push(UInt8::constant(0x00));
    }
    let last = padded.len() - 1;
    padded[last] = &padded[last] ^ 0x80u8;

    let mut state: State = core::array::from_fn(|_| UInt64::constant(0));
    for block in padded.chunks(RATE) {
        for (lane, bytes) in state.iter_mut().zip(block.chunks(8)) {
            *lane ^= UInt64::from_bytes_le(bytes)?;
        }
        keccak_f(&mut state);
    }

    let mut digest = Vec::with_capacity(32);
    for lane in &state[..4] {
        digest.extend(lane.to_bytes_le()?);
    }
    Ok(digest)
}

/// `keccak256("\x19Ethereum Signed Message:\n" || len || message)`. The
/// length is fixed by the slice, so the prefix is all constants.
pub fn eth_message_hash_gadget(message: &[UInt8<Fr>]) -> Result<Vec<UInt8<Fr>>, SynthesisError> {
    let mut preimage = UInt8::constant_vec(ETH_MESSAGE_PREFIX);
    preimage.extend(UInt8::constant_vec(message.len().to_string().as_bytes()));
    preimage.extend_from_slice(message);
    keccak256_gadget(&preimage)
}
