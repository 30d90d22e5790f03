//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! SHA-1 produces a 160-bit digest. It is no longer considered secure against
//! collision attacks and should only be used where an existing format or
//! protocol requires it.
//!
//! The whole message is hashed in one call: the input is padded to a multiple
//! of 64 bytes, each 64-byte block is compressed into the five 32-bit state
//! words, and the final state is written out big-endian.
//!
//! # Usage
//!
//! ```rust
//! use crypto_digest::Digest;
//! use sha1::Sha1;
//!
//! let hex = sha1::calculate(b"abc");
//! assert_eq!(hex, "a9993e364706816aba3e25717850c26c9cd0d89d");
//!
//! let out = Sha1::digest(b"abc");
//! assert_eq!(out[..4], [0xa9u8, 0x99, 0x3e, 0x36]);
//! ```

extern crate byte_tools;
extern crate crypto_digest;
extern crate generic_array;
extern crate thiserror;
#[cfg(test)]
#[macro_use]
extern crate crypto_tests;

use byte_tools::{read_u32v_be, write_u32_be, write_u64_be};
use crypto_digest::Digest;
use generic_array::GenericArray;
use generic_array::typenum::U20;

mod consts;
pub use consts::{BLOCK_BYTES, BLOCK_LEN, SCHEDULE_LEN, STATE_LEN};
use consts::{H, K};

mod error;
pub use error::Error;

/// Expand 16 message words into the 80-word message schedule.
pub fn sha1_schedule(words: &[u32; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    w[..BLOCK_LEN].copy_from_slice(words);
    // Each word depends on earlier ones, so this must run in index order.
    for i in BLOCK_LEN..SCHEDULE_LEN {
        w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
    }
    w
}

/// Process a block of already decoded big-endian words with the SHA-1
/// compression function.
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN], words: &[u32; BLOCK_LEN]) {
    fn choose(b: u32, c: u32, d: u32) -> u32 { (b & c) | (!b & d) }

    fn parity(b: u32, c: u32, d: u32) -> u32 { b ^ c ^ d }

    fn majority(b: u32, c: u32, d: u32) -> u32 { (b & c) | (b & d) | (c & d) }

    let w = sha1_schedule(words);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    for (i, &wi) in w.iter().enumerate() {
        let (f, k) = match i {
            0..=19 => (choose(b, c, d), K[0]),
            20..=39 => (parity(b, c, d), K[1]),
            40..=59 => (majority(b, c, d), K[2]),
            _ => (parity(b, c, d), K[3]),
        };

        let temp = a.rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(wi);
        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a 64-byte block with the SHA-1 compression function.
///
/// Panics if `block` is not exactly `BLOCK_BYTES` long.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_BYTES);
    let mut words = [0u32; BLOCK_LEN];
    read_u32v_be(&mut words, block);
    sha1_digest_block_u32(state, &words);
}

/// A structure that represents that state of a digest computation for the
/// SHA-1 digest function
#[derive(Clone, Copy)]
struct Sha1State {
    h: [u32; STATE_LEN],
}

impl Sha1State {
    fn new() -> Sha1State { Sha1State { h: H } }

    fn process_block(&mut self, block: &[u8]) {
        sha1_digest_block(&mut self.h, block);
    }

    fn result(&self) -> GenericArray<u8, U20> {
        let mut out = GenericArray::<u8, U20>::default();
        for (chunk, &h) in out.chunks_mut(4).zip(self.h.iter()) {
            write_u32_be(chunk, h);
        }
        out
    }

    fn result_str(&self) -> String {
        format!("{:08x}{:08x}{:08x}{:08x}{:08x}",
                self.h[0], self.h[1], self.h[2], self.h[3], self.h[4])
    }
}

/// Length of the message in bits, as stored in the final 8 bytes of the
/// padded message.
pub fn bit_length(len: u64) -> Result<u64, Error> {
    len.checked_mul(8).ok_or(Error::LengthOverflow { len })
}

fn expect_bit_length(len: u64) -> u64 {
    match bit_length(len) {
        Ok(bits) => bits,
        Err(e) => panic!("{}", e),
    }
}

fn pad_with_length(input: &[u8], length_bits: u64) -> Vec<u8> {
    let padded_len = (input.len() + 9).div_ceil(BLOCK_BYTES) * BLOCK_BYTES;
    let mut data = Vec::with_capacity(padded_len);
    data.extend_from_slice(input);
    data.push(0x80);
    data.resize(padded_len - 8, 0);

    let mut length = [0u8; 8];
    write_u64_be(&mut length, length_bits);
    data.extend_from_slice(&length);
    data
}

/// Pad `input` to a whole number of blocks: a single `0x80` byte, zeros up
/// to 56 bytes into the last block, then the bit length of `input` as a
/// big-endian `u64`.
///
/// Panics if the bit length of `input` does not fit in 64 bits; see
/// [`try_pad`] for the checked variant.
pub fn pad(input: &[u8]) -> Vec<u8> {
    pad_with_length(input, expect_bit_length(input.len() as u64))
}

/// Like [`pad`], but reports an oversized input as `Error::LengthOverflow`.
pub fn try_pad(input: &[u8]) -> Result<Vec<u8>, Error> {
    let length_bits = bit_length(input.len() as u64)?;
    Ok(pad_with_length(input, length_bits))
}

fn compress(padded: &[u8]) -> Sha1State {
    debug_assert_eq!(padded.len() % BLOCK_BYTES, 0);
    let mut state = Sha1State::new();
    for block in padded.chunks_exact(BLOCK_BYTES) {
        state.process_block(block);
    }
    state
}

/// Compute the 20-byte SHA-1 digest of `input`.
pub fn digest(input: &[u8]) -> GenericArray<u8, U20> {
    compress(&pad(input)).result()
}

/// Like [`digest`], but reports an oversized input as `Error::LengthOverflow`.
pub fn try_digest(input: &[u8]) -> Result<GenericArray<u8, U20>, Error> {
    Ok(compress(&try_pad(input)?).result())
}

/// Compute the SHA-1 digest of `input` as 40 lowercase hex digits.
pub fn calculate(input: &[u8]) -> String {
    compress(&pad(input)).result_str()
}

/// Like [`calculate`], but reports an oversized input as `Error::LengthOverflow`.
pub fn try_calculate(input: &[u8]) -> Result<String, Error> {
    Ok(compress(&try_pad(input)?).result_str())
}

/// The SHA-1 Digest algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1;

impl Digest for Sha1 {
    type N = U20;

    fn digest(input: &[u8]) -> GenericArray<u8, U20> {
        crate::digest(input)
    }

    fn block_size() -> usize { BLOCK_BYTES }
}
