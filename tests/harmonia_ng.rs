use harmonia::hash::{HarmoniaNg, harmonia_ng};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn expect_digest_eq(input: &[u8], expected: &[u8; 32]) {
    let got = harmonia_ng(input);

    assert_eq!(
        &got, expected,
        "Digest mismatch for input {:?}\nExpected {:?}\nGot      {:?}",
        input, expected, got,
    );
}

fn hamming_distance(a: &[u8; 32], b: &[u8; 32]) -> u32 {
    a.iter().zip(b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

// -------------------------------------------------------
// 1. OFFICIAL HARMONIA-NG TEST VECTORS
// -------------------------------------------------------

#[test]
fn harmonia_ng_empty_vector() {
    let empty_out = [
        0xf0, 0x86, 0x1e, 0x3a, 0xd1, 0xa2, 0xa4, 0x38, 0xb4, 0xce, 0xea, 0x78, 0xd1, 0x4f, 0x21,
        0x07, 0x4d, 0xcd, 0x71, 0x2b, 0x07, 0x39, 0x17, 0xb2, 0x8d, 0x7a, 0xe7, 0xfa, 0xd8, 0xf6,
        0xa5, 0x62,
    ];

    expect_digest_eq(&[], &empty_out);
}

#[test]
fn harmonia_ng_name_vector() {
    let out = [
        0x11, 0xcd, 0x23, 0x65, 0x0f, 0x8f, 0xd4, 0x81, 0x88, 0x48, 0xbc, 0x6f, 0x09, 0xda, 0x18,
        0xb0, 0x64, 0x03, 0xed, 0x6f, 0x52, 0x50, 0x44, 0x7c, 0x5d, 0x10, 0x36, 0x73, 0x0c, 0xb8,
        0x98, 0x7c,
    ];

    expect_digest_eq(b"Harmonia", &out);
}

#[test]
fn harmonia_ng_known_phrase() {
    let out = [
        0x05, 0xa0, 0x15, 0xd7, 0x92, 0xc2, 0x14, 0x6a, 0x00, 0xd9, 0x41, 0xba, 0x34, 0x2e, 0x0d,
        0xbb, 0x21, 0x9f, 0xf7, 0xef, 0x6d, 0xa4, 0x8d, 0x05, 0xca, 0xf8, 0x31, 0x0d, 0x3c, 0x84,
        0x41, 0x72,
    ];

    expect_digest_eq(b"The quick brown fox jumps over the lazy dog", &out);
}

#[test]
fn harmonia_ng_uppercase_vector() {
    let out = [
        0x6d, 0x31, 0x06, 0x50, 0xbe, 0x20, 0x92, 0xbe, 0x61, 0x1c, 0xf3, 0x5e, 0xa8, 0xdc, 0xc4,
        0x6b, 0x81, 0x99, 0xa3, 0xf6, 0x29, 0x93, 0x98, 0xfa, 0x68, 0xdc, 0xf7, 0x3f, 0x80, 0xf8,
        0xa3, 0x34,
    ];

    expect_digest_eq(b"HARMONIA-NG", &out);
}

// -------------------------------------------------------
// 2. STREAMING VS ONE-SHOT EQUIVALENCE
// -------------------------------------------------------

#[test]
fn streaming_two_calls_matches_vector() {
    let mut ctx = HarmoniaNg::new();
    ctx.update(b"Harm");
    ctx.update(b"onia");

    assert_eq!(ctx.finalize(), harmonia_ng(b"Harmonia"));
}

#[test]
fn streaming_empty_updates() {
    let mut ctx = HarmoniaNg::new();
    ctx.update(&[]);
    ctx.update(&[]);

    assert_eq!(ctx.finalize(), harmonia_ng(&[]));
}

#[test]
fn streaming_byte_by_byte() {
    let input: Vec<u8> = (0..300).map(|i| i as u8).collect();

    let mut ctx = HarmoniaNg::new();
    for byte in &input {
        ctx.update(std::slice::from_ref(byte));
    }

    assert_eq!(ctx.finalize(), harmonia_ng(&input));
}

#[test]
fn streaming_fixed_chunks() {
    let input: Vec<u8> = (0..1000).map(|i| (i * 31) as u8).collect();
    let expected = harmonia_ng(&input);

    for chunk_size in [1, 3, 7, 13, 32, 63, 64, 65, 100, 256] {
        let mut ctx = HarmoniaNg::new();
        for chunk in input.chunks(chunk_size) {
            ctx.update(chunk);
        }

        assert_eq!(ctx.finalize(), expected, "chunk size {}", chunk_size);
    }
}

#[test]
fn streaming_random_chunks() {
    let mut rng = StdRng::seed_from_u64(0x4841524d_4f4e4941);

    let mut input = vec![0u8; 4096];
    rng.fill(input.as_mut_slice());
    let expected = harmonia_ng(&input);

    for _ in 0..20 {
        let mut ctx = HarmoniaNg::new();
        let mut rest = input.as_slice();
        while !rest.is_empty() {
            let take = rng.gen_range(1..=rest.len().min(200));
            ctx.update(&rest[..take]);
            rest = &rest[take..];
        }

        assert_eq!(ctx.finalize(), expected);
    }
}

// -------------------------------------------------------
// 3. LENGTH-DOMAIN BOUNDARIES
// -------------------------------------------------------

#[test]
fn padding_boundary_lengths() {
    // 55 fits the padding in the current block, 56 forces an extra block,
    // the rest straddle one- and two-block boundaries.
    for len in [0, 1, 55, 56, 63, 64, 65, 119, 120, 128] {
        let input: Vec<u8> = (0..len).map(|i| (i * 7 + 1) as u8).collect();

        let digest = harmonia_ng(&input);

        assert_ne!(digest, [0u8; 32], "zero digest at length {}", len);
        assert_eq!(digest, harmonia_ng(&input), "nondeterministic at length {}", len);
    }
}

#[test]
fn adjacent_lengths_differ() {
    let input = [0xABu8; 129];

    for len in 0..128 {
        assert_ne!(
            harmonia_ng(&input[..len]),
            harmonia_ng(&input[..len + 1]),
            "digest collision between lengths {} and {}",
            len,
            len + 1,
        );
    }
}

// -------------------------------------------------------
// 4. 1 MIB REGRESSION
// -------------------------------------------------------

#[test]
fn one_mib_reference_digest() {
    let expected = [
        0x0f, 0x7e, 0xfe, 0x1e, 0xd8, 0x34, 0x6d, 0x31, 0x4e, 0xb9, 0x3f, 0x51, 0xe9, 0xd2, 0xdc,
        0x99, 0xa5, 0x89, 0x54, 0x4a, 0x8b, 0x57, 0xce, 0x47, 0xdb, 0x93, 0xf9, 0x35, 0xb5, 0xec,
        0xda, 0x10,
    ];

    let input = vec![0x61u8; 1 << 20];

    expect_digest_eq(&input, &expected);
}

#[test]
fn one_mib_chunking_invariance() {
    let input = vec![0x61u8; 1 << 20];
    let expected = harmonia_ng(&input);

    // 16 KiB chunks
    let mut ctx = HarmoniaNg::new();
    for chunk in input.chunks(16 * 1024) {
        ctx.update(chunk);
    }
    assert_eq!(ctx.finalize(), expected);

    // 1-byte increments
    let mut ctx = HarmoniaNg::new();
    for byte in &input {
        ctx.update(std::slice::from_ref(byte));
    }
    assert_eq!(ctx.finalize(), expected);
}

// -------------------------------------------------------
// 5. AVALANCHE SANITY
// -------------------------------------------------------

#[test]
fn single_bit_avalanche() {
    let mut rng = StdRng::seed_from_u64(0x9E3779B9);
    let trials: usize = 1000;
    let mut total = 0u64;

    for trial in 0..trials {
        let mut input = [0u8; 32];
        rng.fill(input.as_mut_slice());

        let base = harmonia_ng(&input);

        let bit = trial % 256;
        input[bit / 8] ^= 1 << (bit % 8);

        total += u64::from(hamming_distance(&base, &harmonia_ng(&input)));
    }

    let mean = total as f64 / trials as f64;
    assert!(mean >= 96.0, "avalanche mean too low: {:.2} bits", mean);
}

// -------------------------------------------------------
// 6. CONCURRENT CONTEXTS
// -------------------------------------------------------

#[test]
fn concurrent_contexts_match_sequential() {
    let a: Vec<u8> = (0..10_000).map(|i| (i % 251) as u8).collect();
    let b: Vec<u8> = (0..10_000).map(|i| (i % 241) as u8).collect();

    let expected_a = harmonia_ng(&a);
    let expected_b = harmonia_ng(&b);

    let ta = std::thread::spawn(move || harmonia_ng(&a));
    let tb = std::thread::spawn(move || harmonia_ng(&b));

    assert_eq!(ta.join().unwrap(), expected_a);
    assert_eq!(tb.join().unwrap(), expected_b);
}
