pub const STATE_LEN: usize = 5;
pub const BLOCK_LEN: usize = 16;
pub const BLOCK_BYTES: usize = BLOCK_LEN * 4;
pub const SCHEDULE_LEN: usize = 80;

/// Initial hash value
pub const H: [u32; STATE_LEN] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// Round constants, one per group of 20 rounds
pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];
