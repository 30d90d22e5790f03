extern crate crypto_digest;

pub mod hash;
