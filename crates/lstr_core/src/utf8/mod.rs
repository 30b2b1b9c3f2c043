//! Stateless UTF-8 encoding and decoding over raw byte spans.
//!
//! The decoder never fails. Malformed input
//! decodes to *something* with a byte length of at least 1, so a scanner
//! driving it always makes progress:
//!
//! - A lead byte that is not a valid UTF-8 lead (a stray continuation byte,
//!   or `0xF8..=0xFF`) decodes as itself with length 1.
//! - A sequence truncated by the end of input decodes with the missing
//!   continuation bytes treated as zero payload, and its reported length is
//!   clamped to the bytes actually available.
//!
//! Validation is the caller's concern (`std::str::from_utf8` exists for that).

/// Maximum encoded length of a codepoint.
pub const MAX_LEN: usize = 4;

/// Largest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10_FFFF;

const CONTINUATION_PAYLOAD: u8 = 0b0011_1111;

/// Returns `true` for continuation bytes (`0b10xx_xxxx`).
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    byte & 0b1100_0000 == 0b1000_0000
}

/// Encoded length announced by a lead byte.
///
/// - `0xxx_xxxx`: 1 byte
/// - `110x_xxxx`: 2 bytes
/// - `1110_xxxx`: 3 bytes
/// - `1111_0xxx`: 4 bytes
/// - Everything else (continuation, invalid): 1 byte
#[inline]
pub const fn lead_len(byte: u8) -> usize {
    if byte >> 7 == 0 {
        1
    } else if byte >> 5 == 0b110 {
        2
    } else if byte >> 4 == 0b1110 {
        3
    } else if byte >> 3 == 0b1_1110 {
        4
    } else {
        1
    }
}

/// Decode the codepoint at the start of `bytes`.
///
/// Returns `(codepoint, byte_length)`. Empty input returns `(0, 0)`.
pub fn decode_forward(bytes: &[u8]) -> (u32, usize) {
    let Some(&lead) = bytes.first() else {
        return (0, 0);
    };
    let len = lead_len(lead);
    let payload = |i: usize| -> u32 {
        u32::from(bytes.get(i).copied().unwrap_or(0) & CONTINUATION_PAYLOAD)
    };
    let codepoint = match len {
        2 => (u32::from(lead & 0b0001_1111) << 6) | payload(1),
        3 => (u32::from(lead & 0b0000_1111) << 12) | (payload(1) << 6) | payload(2),
        4 => {
            (u32::from(lead & 0b0000_0111) << 18)
                | (payload(1) << 12)
                | (payload(2) << 6)
                | payload(3)
        }
        _ => u32::from(lead),
    };
    (codepoint, len.min(bytes.len()))
}

/// Decode the codepoint that ends just before `end`.
///
/// Steps back one byte; while that byte is a continuation byte and fewer
/// than [`MAX_LEN`] bytes have been visited, keeps stepping back toward the
/// lead byte, then decodes forward from it. Returns
/// `(codepoint, start_of_codepoint)`, or `None` when `end == 0`.
///
/// A continuation byte with no matching lead byte within reach decodes as
/// itself, one byte long.
///
/// # Panics
///
/// Panics if `end > bytes.len()`.
pub fn decode_backward(bytes: &[u8], end: usize) -> Option<(u32, usize)> {
    if end == 0 {
        return None;
    }
    let mut start = end - 1;
    while start > 0 && is_continuation(bytes[start]) && end - start < MAX_LEN {
        start -= 1;
    }

    let (codepoint, len) = decode_forward(&bytes[start..end]);
    if start + len == end && lead_len(bytes[start]) == end - start {
        Some((codepoint, start))
    } else {
        Some((u32::from(bytes[end - 1]), end - 1))
    }
}

/// Encode `codepoint` as UTF-8.
///
/// Returns the encoded bytes (only the first `len` are meaningful) and `len`.
/// The form is chosen by magnitude: `..=0x7F` one byte, `0x80..=0x7FF` two,
/// `0x800..=0xFFFF` three, everything above four. Bits above the 21 that a
/// 4-byte sequence can carry are dropped.
#[allow(
    clippy::cast_possible_truncation,
    reason = "every arm masks before truncating to u8"
)]
pub fn encode(codepoint: u32) -> ([u8; MAX_LEN], usize) {
    let cont = |shift: u32| 0b1000_0000 | ((codepoint >> shift) as u8 & CONTINUATION_PAYLOAD);

    match codepoint {
        0..=0x7F => ([codepoint as u8, 0, 0, 0], 1),
        0x80..=0x7FF => (
            [0b1100_0000 | ((codepoint >> 6) as u8 & 0b0001_1111), cont(0), 0, 0],
            2,
        ),
        0x800..=0xFFFF => (
            [
                0b1110_0000 | ((codepoint >> 12) as u8 & 0b0000_1111),
                cont(6),
                cont(0),
                0,
            ],
            3,
        ),
        _ => (
            [
                0b1111_0000 | ((codepoint >> 18) as u8 & 0b0000_0111),
                cont(12),
                cont(6),
                cont(0),
            ],
            4,
        ),
    }
}

/// Encoded length of `codepoint`, without encoding it.
#[inline]
pub const fn encoded_len(codepoint: u32) -> usize {
    match codepoint {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

/// Number of codepoints in `bytes`, counted by repeated forward decoding.
pub fn codepoint_count(mut bytes: &[u8]) -> usize {
    let mut count = 0;
    while !bytes.is_empty() {
        let (_, len) = decode_forward(bytes);
        bytes = &bytes[len..];
        count += 1;
    }
    count
}

/// Byte length of the first `count` codepoints of `bytes`.
///
/// Stops early at the end of input, so the result never exceeds `bytes.len()`.
pub fn utf8_size(bytes: &[u8], count: usize) -> usize {
    let mut offset = 0;
    for _ in 0..count {
        if offset >= bytes.len() {
            break;
        }
        let (_, len) = decode_forward(&bytes[offset..]);
        offset += len;
    }
    offset
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
