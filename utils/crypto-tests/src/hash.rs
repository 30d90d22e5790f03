use crypto_digest::Digest;

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

pub fn main_test<D: Digest>(tests: &[Test]) {
    for t in tests.iter() {
        let out = D::digest(t.input);
        assert_eq!(out[..], t.output[..], "test vector {}", t.name);
    }

    // The hex form must agree with the raw bytes
    for t in tests.iter() {
        let hex = D::hex_digest(t.input);
        assert_eq!(hex.len(), 2 * D::output_bytes());
        let mut expected = String::new();
        for byte in t.output {
            expected.push_str(&format!("{:02x}", byte));
        }
        assert_eq!(hex, expected, "test vector {}", t.name);
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let input = vec![b'a'; 1_000_000];
    let out = D::digest(&input);
    assert_eq!(out[..], expected[..]);
}
