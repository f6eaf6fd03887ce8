#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng; // faster than StdRng
use rand::{Rng, SeedableRng};
use textencoder::{
    EncodeError, EncodeIntoResult, EscapedStr, EscapedString, NULL_ESCAPE, UnitWidth, encode,
    encode_into,
};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Byte sequences worth splicing into inputs: the escape, its prefixes, and
/// one lead of each width plus a bare continuation byte.
static SPLICE_TABLE: &[&[u8]] = &[
    &NULL_ESCAPE,
    &[0xF4, 0x90, 0x80],
    &[0xF4, 0x90],
    &[0xF4],
    &[0xC3, 0xA9],
    &[0xE2, 0x82, 0xAC],
    &[0xF0, 0x9F, 0x98, 0x80],
    &[0x80],
    &[0x00],
];

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size == 0 || !seed.is_multiple_of(4) {
        return fuzzer_mutate(data, size, max_size);
    }

    // Overwrite a random position with a splice; keep the size unless the
    // splice runs past it.
    with_rng(|rng| {
        let splice = SPLICE_TABLE[rng.random_range(0..SPLICE_TABLE.len())];
        let at = rng.random_range(0..size);
        let end = (at + splice.len()).min(max_size);
        data[at..end].copy_from_slice(&splice[..end - at]);
        size.max(end)
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Input {
    capacity: u8,
    text: String,
    raw: Vec<u8>,
}

fn unit_offset(bytes: &[u8], units: usize) -> usize {
    let mut pos = 0;
    for _ in 0..units {
        pos += if bytes[pos..].starts_with(&NULL_ESCAPE) {
            NULL_ESCAPE.len()
        } else {
            UnitWidth::of_leading_byte(bytes[pos]).map_or(1, UnitWidth::bytes)
        };
    }
    pos
}

fn check(input: Input) {
    // Well-formed text: full and chunked encodes agree with the Rust bytes.
    let escaped = EscapedString::from_text(&input.text);
    let whole = encode(escaped.as_escaped());
    assert_eq!(whole, input.text.as_bytes());

    let capacity = 4 + usize::from(input.capacity) % 60;
    let mut buf = vec![0u8; capacity];
    let mut rest = escaped.as_escaped();
    let mut chunked = Vec::with_capacity(whole.len());
    while !rest.is_empty() {
        let EncodeIntoResult { read, written } =
            encode_into(rest, &mut buf).expect("escaped text is well formed");
        assert!(read > 0);
        chunked.extend_from_slice(&buf[..written]);
        rest = rest.tail(unit_offset(rest.as_bytes(), read));
    }
    assert_eq!(chunked, whole);

    // Arbitrary bytes: never panic, never overrun.
    let raw = EscapedStr::new(&input.raw);
    let capacity = usize::from(input.capacity);
    let mut dst = vec![0xAAu8; capacity];
    match encode_into(raw, &mut dst) {
        Ok(result) => {
            assert!(result.written <= capacity);
            assert!(result.read <= raw.len());
            assert!(dst[result.written..].iter().all(|&b| b == 0xAA));
        }
        Err(EncodeError::MalformedInput { offset, .. }) => assert!(offset < raw.len()),
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary(&mut arbitrary::Unstructured::new(data)) {
        check(input);
    }
});
