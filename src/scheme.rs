/// Get the default port for a scheme, or 0 when the scheme has none.
/// Uses length + first byte to minimize comparisons.
pub(crate) fn default_port(scheme: &str) -> u32 {
    let bytes = scheme.as_bytes();

    match (bytes.len(), bytes.first()) {
        (4, Some(b'h')) if bytes == b"http" => 80,
        (5, Some(b'h')) if bytes == b"https" => 443,
        (3, Some(b'f')) if bytes == b"ftp" => 21,
        (3, Some(b's')) if bytes == b"ssh" => 22,
        (6, Some(b't')) if bytes == b"telnet" => 23,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port() {
        assert_eq!(default_port("http"), 80);
        assert_eq!(default_port("https"), 443);
        assert_eq!(default_port("ftp"), 21);
        assert_eq!(default_port("ssh"), 22);
        assert_eq!(default_port("telnet"), 23);
        assert_eq!(default_port("gopher"), 0);
        assert_eq!(default_port(""), 0);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        // Schemes are lowercased before they reach the table
        assert_eq!(default_port("HTTP"), 0);
    }
}
