//! Dvar name hashing
//!
//! The storage subsystem keys dvars by a 32-bit hash of the name, so the
//! values computed here must match its table bit for bit. Names starting
//! with `0x` are hex literals and are their own hash.

const HASH_SEED: u32 = 0x319712C3;
const HASH_MULTIPLIER: u32 = 0xB3CB2E29;

/// Lowercase `A..=Z`, then widen like a signed `char`
const fn fold(byte: u8) -> u32 {
    let byte = if byte.is_ascii_uppercase() { byte + 32 } else { byte };
    byte as i8 as i32 as u32
}

const fn hex_digit(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}

const fn is_c_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Parse like `strtoul(s, _, 16)` with a 32-bit `unsigned long`
///
/// Magnitudes past 32 bits saturate to `u32::MAX`, whatever the sign.
const fn parse_hex(data: &[u8], start: usize) -> u32 {
    let mut i = start;
    while i < data.len() && is_c_space(data[i]) {
        i += 1;
    }

    let mut negative = false;
    if i < data.len() && (data[i] == b'+' || data[i] == b'-') {
        negative = data[i] == b'-';
        i += 1;
    }

    // Optional prefix, only taken when a digit follows it
    if i + 2 < data.len()
        && data[i] == b'0'
        && (data[i + 1] == b'x' || data[i + 1] == b'X')
        && hex_digit(data[i + 2]).is_some()
    {
        i += 2;
    }

    let mut value: u32 = 0;
    let mut overflow = false;
    while i < data.len() {
        let Some(digit) = hex_digit(data[i]) else {
            break;
        };
        if !overflow {
            match value.checked_mul(16) {
                Some(shifted) => value = shifted | digit,
                None => overflow = true,
            }
        }
        i += 1;
    }

    if overflow {
        return u32::MAX;
    }
    if negative {
        value = value.wrapping_neg();
    }
    value
}

/// Hash a dvar name (compile-time capable)
///
/// The name ends at the first NUL byte, if any.
pub const fn hash_bytes(data: &[u8]) -> u32 {
    let len = {
        let mut n = 0;
        while n < data.len() && data[n] != 0 {
            n += 1;
        }
        n
    };

    if len >= 2 && data[0] == b'0' && data[1] == b'x' {
        return parse_hex(data, 2);
    }

    let first = if len > 0 { data[0] } else { 0 };
    let mut hash = (fold(first) ^ HASH_SEED).wrapping_mul(HASH_MULTIPLIER);

    if first != 0 {
        // Every following byte, terminating NUL included
        let mut i = 1;
        while i <= len {
            let byte = if i < len { data[i] } else { 0 };
            hash = (hash ^ fold(byte)).wrapping_mul(HASH_MULTIPLIER);
            i += 1;
        }
    }

    hash
}

/// Hash a dvar name at runtime
#[inline]
pub fn generate_hash(name: &str) -> u32 {
    hash_bytes(name.as_bytes())
}

/// Render a hash for display, `0x` followed by uppercase hex
pub fn format_hash(hash: u32) -> String {
    format!("0x{:X}", hash)
}
