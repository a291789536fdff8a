use crate::error::{ParseError, Result};

/// Split a bracketed IPv6 literal off the front of `input`.
///
/// `input` must start with `[`. Returns the address text (brackets stripped,
/// colons retained) and the remainder after the closing bracket. Only hex
/// digits and `:` are permitted between the brackets; anything else, or a
/// missing `]`, is an error.
pub(crate) fn split_literal(input: &str) -> Result<(&str, &str)> {
    let inner = input.strip_prefix('[').ok_or(ParseError::InvalidIpv6)?;
    let Some(close) = memchr::memchr(b']', inner.as_bytes()) else {
        return Err(ParseError::InvalidIpv6);
    };
    let addr = &inner[..close];
    if !addr.bytes().all(|b| b.is_ascii_hexdigit() || b == b':') {
        return Err(ParseError::InvalidIpv6);
    }
    Ok((addr, &inner[close + 1..]))
}
