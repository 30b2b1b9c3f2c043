//! Property-based tests for the UTF-8 codec and buffer growth.
//!
//! 1. Round trip: every codepoint in the four encoding ranges encodes to
//!    the same bytes as `char::encode_utf8` and decodes back to itself,
//!    forward and backward.
//! 2. Buffer shape: after any sequence of appends, capacity never shrinks,
//!    `len + 1 <= capacity`, and the byte at `len` is the terminator.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    clippy::uninlined_format_args,
    reason = "Proptest macros generate code with these patterns"
)]

use lstr_core::{utf8, BufferConfig, FixedBuffer, GrowableBuffer, MutableBuffer, StrView};
use proptest::prelude::*;

// -- Strategies --

/// Codepoints drawn evenly from the 1-, 2-, 3- and 4-byte ranges.
fn codepoint_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        0u32..=0x7F,
        0x80u32..=0x7FF,
        0x800u32..=0xFFFF,
        0x1_0000u32..=utf8::MAX_CODEPOINT,
    ]
}

fn chunks_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(1u8..=0xFF, 0..40), 0..32)
}

proptest! {
    #[test]
    fn encode_decode_round_trip(cp in codepoint_strategy()) {
        let (bytes, len) = utf8::encode(cp);
        prop_assert_eq!(len, utf8::encoded_len(cp));
        prop_assert_eq!(utf8::decode_forward(&bytes[..len]), (cp, len));
        prop_assert_eq!(utf8::decode_backward(&bytes[..len], len), Some((cp, 0)));
    }

    #[test]
    fn encode_matches_std_for_scalar_values(c in any::<char>()) {
        let mut expected = [0u8; 4];
        let expected = c.encode_utf8(&mut expected).as_bytes();
        let (bytes, len) = utf8::encode(u32::from(c));
        prop_assert_eq!(&bytes[..len], expected);
    }

    #[test]
    fn codepoint_count_matches_std(s in "\\PC{0,64}") {
        prop_assert_eq!(utf8::codepoint_count(s.as_bytes()), s.chars().count());
        prop_assert_eq!(StrView::from(s.as_str()).utf8_len(), s.chars().count());
    }

    #[test]
    fn backward_walk_visits_every_char(s in "\\PC{0,32}") {
        let bytes = s.as_bytes();
        let mut end = bytes.len();
        let mut seen = Vec::new();
        while let Some((cp, start)) = utf8::decode_backward(bytes, end) {
            seen.push(cp);
            end = start;
        }
        seen.reverse();
        let expected: Vec<u32> = s.chars().map(u32::from).collect();
        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn decoder_always_progresses(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
        let (_, len) = utf8::decode_forward(&bytes);
        prop_assert!(len >= 1 && len <= bytes.len());
    }

    #[test]
    fn growable_keeps_shape(chunks in chunks_strategy(), floor in 1usize..64) {
        let mut buf = GrowableBuffer::with_config(BufferConfig::new().with_min_capacity(floor));
        let mut expected = Vec::new();
        let mut last_capacity = 0;
        for chunk in &chunks {
            buf.append_bytes(chunk).unwrap();
            expected.extend_from_slice(chunk);
            prop_assert!(buf.capacity() >= last_capacity);
            prop_assert!(buf.len() < buf.capacity());
            prop_assert_eq!(buf.storage()[buf.len()], 0);
            last_capacity = buf.capacity();
        }
        prop_assert_eq!(buf.as_bytes(), expected.as_slice());
    }

    #[test]
    fn fixed_accepts_exactly_what_fits(chunks in chunks_strategy()) {
        let mut buf = FixedBuffer::<128>::new();
        for chunk in &chunks {
            let before = buf.len();
            let fits = before + chunk.len() < 128;
            prop_assert_eq!(buf.append_bytes(chunk).is_ok(), fits);
            if !fits {
                prop_assert_eq!(buf.len(), before);
            }
            prop_assert_eq!(buf.storage()[buf.len()], 0);
        }
    }
}
