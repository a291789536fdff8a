mod segments;

use crate::arena::Arena;
use crate::error::Result;
use crate::parsed_url::UrlParts;

/// Run the five segment parsers in fixed order, threading the cursor from
/// one to the next. Scheme must resolve before host/port (default-port
/// lookup), userinfo before host (its `@` consumes the authority prefix),
/// host/port before query/fragment. Any stage error aborts the whole parse.
pub(crate) fn parse_parts(url: &str, arena: &mut Arena<'_>) -> Result<UrlParts> {
    // The record is charged against the budget before any field is written;
    // a zero-capacity buffer never parses.
    arena.charge(core::mem::size_of::<UrlParts>())?;

    let mut parts = UrlParts::default();
    let rest = segments::scheme(url, arena, &mut parts)?;
    let rest = segments::user_pass(rest, arena, &mut parts)?;
    let rest = segments::host_port_path(rest, arena, &mut parts)?;
    let rest = segments::query(rest, arena, &mut parts)?;
    segments::fragment(rest, arena, &mut parts)?;
    Ok(parts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    fn parse(url: &str) -> Result<(UrlParts, Arena<'static>)> {
        let mut arena = Arena::owned(crate::ParsedUrl::capacity_for(url));
        let parts = parse_parts(url, &mut arena)?;
        Ok((parts, arena))
    }

    #[test]
    fn test_stage_order_scheme_feeds_port_default() {
        let (parts, _) = parse("https://h").unwrap();
        assert_eq!(parts.port, 443);
    }

    #[test]
    fn test_colon_without_slashes_is_not_a_scheme() {
        let (parts, arena) = parse("hej:hopp@testurl.com").unwrap();
        assert!(parts.scheme.is_none());
        assert_eq!(arena.span_str(parts.user.unwrap()), "hej");
        assert_eq!(arena.span_str(parts.pass.unwrap()), "hopp");
        assert_eq!(arena.span_str(parts.host.unwrap()), "testurl.com");
    }

    #[test]
    fn test_single_slash_scheme_fails() {
        assert_eq!(parse("http:/x").unwrap_err(), ParseError::InvalidScheme);
    }

    #[test]
    fn test_user_without_password_gets_empty_password() {
        let (parts, arena) = parse("user@h").unwrap();
        assert_eq!(arena.span_str(parts.user.unwrap()), "user");
        assert_eq!(arena.span_str(parts.pass.unwrap()), "");
    }

    #[test]
    fn test_empty_authority_keeps_defaults() {
        let (parts, arena) = parse("file:///sub/resource.file").unwrap();
        assert_eq!(arena.span_str(parts.scheme.unwrap()), "file");
        assert!(parts.host.is_none());
        assert_eq!(parts.port, 0);
        assert_eq!(arena.span_str(parts.path.unwrap()), "/sub/resource.file");
    }

    #[test]
    fn test_path_colon_is_not_a_port() {
        let (parts, arena) = parse("file://some_host/e:/sub").unwrap();
        assert_eq!(arena.span_str(parts.host.unwrap()), "some_host");
        assert_eq!(parts.port, 0);
        assert_eq!(arena.span_str(parts.path.unwrap()), "/e:/sub");
    }

    #[test]
    fn test_port_then_path_colon() {
        let (parts, arena) = parse("http://h:8080/e:/whoppa").unwrap();
        assert_eq!(arena.span_str(parts.host.unwrap()), "h");
        assert_eq!(parts.port, 8080);
        assert_eq!(arena.span_str(parts.path.unwrap()), "/e:/whoppa");
    }

    #[test]
    fn test_bracketed_host_with_port_and_path() {
        let (parts, arena) = parse("http://[2001:db8::1]:8080/p").unwrap();
        assert_eq!(arena.span_str(parts.host.unwrap()), "2001:db8::1");
        assert_eq!(parts.port, 8080);
        assert_eq!(arena.span_str(parts.path.unwrap()), "/p");
    }

    #[test]
    fn test_bracketed_host_failures() {
        assert_eq!(parse("http://[::1").unwrap_err(), ParseError::InvalidIpv6);
        assert_eq!(parse("http://[g::1]").unwrap_err(), ParseError::InvalidIpv6);
    }

    #[test]
    fn test_query_and_fragment_cursor_handoff() {
        let (parts, arena) = parse("http://h/p?apa=kossa#le_fragment").unwrap();
        assert_eq!(arena.span_str(parts.path.unwrap()), "/p");
        assert_eq!(arena.span_str(parts.query.unwrap()), "apa=kossa");
        assert_eq!(arena.span_str(parts.fragment.unwrap()), "le_fragment");
    }

    #[test]
    fn test_fragment_without_query() {
        let (parts, arena) = parse("http://h/p#frag").unwrap();
        assert!(parts.query.is_none());
        assert_eq!(arena.span_str(parts.fragment.unwrap()), "frag");
    }
}
