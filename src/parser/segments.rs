//! The five ordered segment parsers. Each consumes a prefix of the
//! remaining input, records what it extracted, and returns the advanced
//! cursor; a stage that finds nothing to do returns its input unchanged.

use crate::arena::Arena;
use crate::error::{ParseError, Result};
use crate::ipv6;
use crate::parsed_url::UrlParts;
use crate::scheme::default_port;

/// Scheme: text before the first `:`, but only when `://` follows.
///
/// A colon not followed by `/` belongs to a later `user:pass` or
/// `host:port` construct, so the cursor stays put. `:/` without the second
/// slash is malformed.
pub(super) fn scheme<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let bytes = input.as_bytes();
    let Some(colon) = memchr::memchr(b':', bytes) else {
        return Ok(input);
    };
    if bytes.get(colon + 1) != Some(&b'/') {
        return Ok(input);
    }
    if bytes.get(colon + 2) != Some(&b'/') {
        return Err(ParseError::InvalidScheme);
    }
    parts.scheme = Some(arena.push_lower(&input[..colon])?);
    Ok(&input[colon + 3..])
}

/// Userinfo: everything before the first `@`, split at the first `:`.
/// Both halves are stored case-preserved; a username without `:` gets a
/// present-but-empty password.
pub(super) fn user_pass<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let bytes = input.as_bytes();
    let Some(at) = memchr::memchr(b'@', bytes) else {
        return Ok(input);
    };
    match memchr::memchr(b':', &bytes[..at]) {
        None => {
            parts.user = Some(arena.push_raw(&input[..at])?);
            parts.pass = Some(arena.push_raw("")?);
        }
        Some(colon) => {
            parts.user = Some(arena.push_raw(&input[..colon])?);
            parts.pass = Some(arena.push_raw(&input[colon + 1..at])?);
        }
    }
    Ok(&input[at + 1..])
}

/// Host, optional port, and inline path.
///
/// The scheme default port is established first, so an explicit port always
/// overrides it. A `[` opens a bracket-delimited IPv6 literal; otherwise the
/// first `:` and `/` decide where the host ends and whether the colon is a
/// port separator at all.
pub(super) fn host_port_path<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    parts.port = match parts.scheme {
        Some(s) => default_port(arena.span_str(s)),
        None => 0,
    };

    if input.starts_with('[') {
        return bracketed_host(input, arena, parts);
    }

    let bytes = input.as_bytes();
    let colon = memchr::memchr(b':', bytes);
    let slash = memchr::memchr(b'/', bytes);

    let (host_end, path_start) = match (colon, slash) {
        // A '/' before the ':' puts the colon inside the path, not in a
        // port separator position (Windows-style "/e:/path" segments).
        (Some(c), Some(s)) if s < c => (s, Some(s)),
        (Some(c), _) => {
            parts.port = decimal_prefix(&input[c + 1..]);
            let after_port = memchr::memchr(b'/', &bytes[c + 1..]).map(|i| c + 1 + i);
            (c, after_port)
        }
        (None, s) => (s.unwrap_or(input.len()), s),
    };

    if host_end > 0 {
        parts.host = Some(arena.push_lower(&input[..host_end])?);
    }
    take_path(input, path_start, arena, parts)
}

/// Bracketed IPv6 literal: host delimited by `]` instead of `:` or `/`,
/// with `:port` and `/path` resuming after the closing bracket.
fn bracketed_host<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let (addr, rest) = ipv6::split_literal(input)?;
    if !addr.is_empty() {
        parts.host = Some(arena.push_lower(addr)?);
    }

    let bytes = rest.as_bytes();
    let colon = memchr::memchr(b':', bytes);
    let slash = memchr::memchr(b'/', bytes);

    let path_start = match (colon, slash) {
        (Some(c), s) if s.is_none_or(|s| c < s) => {
            parts.port = decimal_prefix(&rest[c + 1..]);
            memchr::memchr(b'/', &bytes[c + 1..]).map(|i| c + 1 + i)
        }
        (_, s) => s,
    };
    take_path(rest, path_start, arena, parts)
}

/// Copy the path from `path_start` up to the first `?`/`#`/end and leave
/// the cursor there. Without a `/` the host has consumed the remainder and
/// the cursor stays put.
fn take_path<'s>(
    input: &'s str,
    path_start: Option<usize>,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let Some(start) = path_start else {
        return Ok(input);
    };
    let rel = &input[start..];
    let end = memchr::memchr2(b'?', b'#', rel.as_bytes()).unwrap_or(rel.len());
    parts.path = Some(arena.push_lower(&rel[..end])?);
    Ok(&rel[end..])
}

/// Query: `?` up to the next `#` or end of string.
pub(super) fn query<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let Some(rest) = input.strip_prefix('?') else {
        return Ok(input);
    };
    let end = memchr::memchr(b'#', rest.as_bytes()).unwrap_or(rest.len());
    parts.query = Some(arena.push_lower(&rest[..end])?);
    Ok(&rest[end..])
}

/// Fragment: `#` up to end of string.
pub(super) fn fragment<'s>(
    input: &'s str,
    arena: &mut Arena<'_>,
    parts: &mut UrlParts,
) -> Result<&'s str> {
    let Some(rest) = input.strip_prefix('#') else {
        return Ok(input);
    };
    parts.fragment = Some(arena.push_lower(rest)?);
    Ok("")
}

/// Leading decimal digits of `text`, saturating at `u32::MAX`; trailing
/// non-digit text is ignored.
fn decimal_prefix(text: &str) -> u32 {
    let mut value: u32 = 0;
    for b in text.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }
    value
}
