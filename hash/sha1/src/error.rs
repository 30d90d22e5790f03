use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("message length of {len} bytes overflows the 64-bit bit-length field")]
    LengthOverflow { len: u64 },
}
