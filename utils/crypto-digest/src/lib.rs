extern crate generic_array;

use generic_array::{ArrayLength, GenericArray};
use generic_array::typenum::Unsigned;

/// The Digest trait specifies an interface common to digest functions.
///
/// The whole message is supplied in a single call; implementations keep no
/// state between calls.
pub trait Digest {
    type N: ArrayLength<u8>;

    /// Compute the digest of `input`.
    fn digest(input: &[u8]) -> GenericArray<u8, Self::N>;

    /// Get the block size in bytes.
    fn block_size() -> usize;

    /// Get the output size in bytes.
    fn output_bytes() -> usize { Self::N::to_usize() }

    /// Get the output size in bits.
    fn output_bits() -> usize { Self::N::to_usize() * 8 }

    /// Compute the digest of `input` as a lowercase hex string.
    fn hex_digest(input: &[u8]) -> String {
        Self::digest(input).iter().map(|b| format!("{:02x}", b)).collect()
    }
}
