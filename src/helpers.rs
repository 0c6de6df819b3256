use crate::compat::{Cow, String};
use crate::error::{Error, Result};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Trim surrounding C0 controls and spaces and drop internal tabs/newlines.
/// URLs pasted from shells and config files often carry both.
/// Returns a Cow to avoid allocation when possible.
pub fn clean_input(input: &str) -> Cow<'_, str> {
    let trimmed = input.trim_matches(|c: char| c <= ' ');
    if !has_tabs_or_newline(trimmed) {
        return Cow::Borrowed(trimmed);
    }

    Cow::Owned(
        trimmed
            .chars()
            .filter(|&c| !matches!(c, '\t' | '\n' | '\r'))
            .collect::<String>(),
    )
}

/// Split `scheme:rest` at the first colon.
/// Returns None when there is no colon at all.
pub fn split_scheme(input: &str) -> Option<(&str, &str)> {
    memchr::memchr(b':', input.as_bytes()).map(|pos| (&input[..pos], &input[pos + 1..]))
}

/// Split an alias from its transport qualifier at the first `+`.
pub fn split_transport(scheme: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'+', scheme.as_bytes()).map_or((scheme, None), |pos| {
        (&scheme[..pos], Some(&scheme[pos + 1..]))
    })
}

/// Prune fragment (#hash) from URL string
/// Returns (`url_without_fragment`, `fragment_without_hash`)
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split the raw query (without `?`) from the rest of the URL
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split `authority/path` after the `//` marker.
/// The path keeps its leading slash.
pub fn split_authority(input: &str) -> (&str, &str) {
    memchr::memchr(b'/', input.as_bytes()).map_or((input, ""), |pos| {
        (&input[..pos], &input[pos..])
    })
}

/// Split `userinfo@host:port` at the last `@`
pub fn split_userinfo(authority: &str) -> (Option<&str>, &str) {
    memchr::memrchr(b'@', authority.as_bytes()).map_or((None, authority), |pos| {
        (Some(&authority[..pos]), &authority[pos + 1..])
    })
}

/// Parse host string into hostname and optional port parts.
///
/// Anything after an IPv6 `]` other than `:port` is [`Error::InvalidPort`].
pub fn split_host_port(host: &str) -> Result<(&str, Option<&str>)> {
    if host.starts_with('[') {
        // IPv6 address
        if let Some(bracket_end) = host.find(']') {
            let ipv6_part = &host[0..=bracket_end];
            let port_part = &host[bracket_end + 1..];
            if port_part.is_empty() {
                return Ok((ipv6_part, None));
            }
            let port = port_part.strip_prefix(':').ok_or(Error::InvalidPort)?;
            return Ok((ipv6_part, Some(port)));
        }
        return Ok((host, None));
    }

    Ok(match host.rfind(':') {
        Some(colon_pos) => (&host[0..colon_pos], Some(&host[colon_pos + 1..])),
        None => (host, None),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("\t\npg://localhost/db\r\n"), "pg://localhost/db");
        assert_eq!(clean_input("pg://localhost/db"), "pg://localhost/db");
        assert_eq!(clean_input("\t\n\r"), "");
        assert_eq!(clean_input("pg://local\thost/\ndb"), "pg://localhost/db");
        assert_eq!(clean_input("  sq:/tmp/my file.db  "), "sq:/tmp/my file.db");
    }

    #[test]
    fn test_split_scheme() {
        assert_eq!(
            split_scheme("pg://localhost"),
            Some(("pg", "//localhost"))
        );
        assert_eq!(split_scheme("sqlite:/tmp/a.db"), Some(("sqlite", "/tmp/a.db")));
        assert_eq!(split_scheme("localhost"), None);
    }

    #[test]
    fn test_split_transport() {
        assert_eq!(split_transport("mysql"), ("mysql", None));
        assert_eq!(split_transport("mysql+unix"), ("mysql", Some("unix")));
        assert_eq!(split_transport("odbc+sql+server"), ("odbc", Some("sql+server")));
        assert_eq!(split_transport("+tcp"), ("", Some("tcp")));
    }

    #[test]
    fn test_prune_fragment_and_query() {
        assert_eq!(prune_fragment("//h/db#frag"), ("//h/db", Some("frag")));
        assert_eq!(prune_fragment("//h/db"), ("//h/db", None));
        assert_eq!(split_query("//h/db?a=1"), ("//h/db", Some("a=1")));
        assert_eq!(split_query("//h/db?"), ("//h/db", Some("")));
    }

    #[test]
    fn test_split_authority() {
        assert_eq!(split_authority("user@host:1/db/x"), ("user@host:1", "/db/x"));
        assert_eq!(split_authority("host"), ("host", ""));
    }

    #[test]
    fn test_split_userinfo() {
        assert_eq!(split_userinfo("u:p@host"), (Some("u:p"), "host"));
        assert_eq!(split_userinfo("u:p@x@host"), (Some("u:p@x"), "host"));
        assert_eq!(split_userinfo("host"), (None, "host"));
    }

    #[test]
    fn test_split_host_port() {
        assert_eq!(split_host_port("localhost:5432"), Ok(("localhost", Some("5432"))));
        assert_eq!(split_host_port("localhost"), Ok(("localhost", None)));
        assert_eq!(split_host_port("[::1]:3306"), Ok(("[::1]", Some("3306"))));
        assert_eq!(split_host_port("[::1]"), Ok(("[::1]", None)));
        assert_eq!(split_host_port("host:"), Ok(("host", Some(""))));
    }

    #[test]
    fn test_split_host_port_rejects_trailing_junk() {
        assert_eq!(split_host_port("[::1]junk"), Err(Error::InvalidPort));
        assert_eq!(split_host_port("[::1]5432"), Err(Error::InvalidPort));
    }
}
