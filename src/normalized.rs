use crate::checkers::parse_port;
use crate::compat::{String, ToString, Vec};
use crate::error::{Error, Result};
use crate::helpers::{prune_fragment, split_authority, split_host_port, split_query, split_userinfo};
use crate::percent_encode::{
    percent_decode, percent_encode_fragment_into, percent_encode_segment_into,
    percent_encode_userinfo_into,
};
use crate::query::QueryParams;
use crate::resolver::Resolved;

/// Driver-agnostic decomposition of a database URL.
///
/// Userinfo, path and query components are stored percent-decoded; the host
/// is kept as written.
///
/// Two forms are recognised after the scheme:
/// - `//[user[:pass]@]host[:port][/path]` (network form)
/// - `/path` or `path` (opaque form, a filesystem path or socket)
///
/// In the opaque form `host` is empty and `port` is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Canonical scheme name
    pub scheme: String,
    /// Transport qualifier, empty when none was given
    pub transport: String,
    /// Decoded user name, empty when none was given
    pub user: String,
    /// `None` when the userinfo had no `:`
    pub password: Option<String>,
    /// Host as written, brackets kept for IPv6
    pub host: String,
    /// Port as given, or the scheme's default when a host was given without one
    pub port: Option<u16>,
    /// Decoded literal path, leading slash included
    pub path: String,
    /// Non-empty path segments, in order
    pub path_segments: Vec<String>,
    /// Set for the `scheme:/path` form
    pub opaque: bool,
    /// Decoded query options
    pub query: QueryParams,
    /// Decoded fragment, without `#`
    pub fragment: String,
    /// Opaque path as written, for lossless display
    raw_path: String,
}

impl NormalizedUrl {
    /// Decompose everything after `scheme:`.
    pub(crate) fn decompose(rest: &str, resolved: &Resolved) -> Result<Self> {
        let (rest, fragment) = prune_fragment(rest);
        let (rest, query) = split_query(rest);

        let mut url = Self {
            scheme: resolved.entry.name.to_string(),
            transport: resolved.transport.clone(),
            query: query.map(QueryParams::parse).unwrap_or_default(),
            fragment: fragment.map(percent_decode).unwrap_or_default(),
            ..Self::default()
        };

        let path = if let Some(rest) = rest.strip_prefix("//") {
            let (authority, path) = split_authority(rest);
            let (userinfo, host_port) = split_userinfo(authority);
            if let Some(userinfo) = userinfo {
                match userinfo.split_once(':') {
                    Some((user, password)) => {
                        url.user = percent_decode(user);
                        url.password = Some(percent_decode(password));
                    }
                    None => url.user = percent_decode(userinfo),
                }
            }

            let (host, port) = split_host_port(host_port)?;
            url.host = host.to_string();
            url.port = match port {
                Some(port) => parse_port(port)?,
                None => None,
            };
            if url.port.is_none() && !url.host.is_empty() {
                url.port = resolved.entry.default_port;
            }
            path
        } else {
            if rest.is_empty() {
                return Err(Error::InvalidDatabaseScheme);
            }
            url.opaque = true;
            url.raw_path = rest.to_string();
            rest
        };

        url.path = percent_decode(path);
        url.path_segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(percent_decode)
            .collect();

        Ok(url)
    }

    /// First path segment, or `""`
    pub fn database(&self) -> &str {
        self.path_segments.first().map_or("", String::as_str)
    }

    /// Write `[user[:pass]@]host[:port]` with the given host.
    pub(crate) fn write_authority(&self, buffer: &mut String, host: &str) {
        use core::fmt::Write;

        if !self.user.is_empty() || self.password.is_some() {
            percent_encode_userinfo_into(buffer, &self.user);
            if let Some(password) = &self.password {
                buffer.push(':');
                percent_encode_userinfo_into(buffer, password);
            }
            buffer.push('@');
        }
        buffer.push_str(host);
        if let Some(port) = self.port {
            let _ = write!(buffer, ":{port}");
        }
    }
}

impl core::fmt::Display for NormalizedUrl {
    /// Canonical URL form: `scheme[+transport]://userinfo@host:port/path?query#fragment`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut buffer = String::with_capacity(64);
        buffer.push_str(&self.scheme);
        if !self.transport.is_empty() {
            buffer.push('+');
            buffer.push_str(&self.transport);
        }
        buffer.push(':');

        if self.opaque {
            for (i, segment) in self.raw_path.split('/').enumerate() {
                if i > 0 {
                    buffer.push('/');
                }
                percent_encode_segment_into(&mut buffer, &percent_decode(segment));
            }
        } else {
            buffer.push_str("//");
            self.write_authority(&mut buffer, &self.host);
            for segment in &self.path_segments {
                buffer.push('/');
                percent_encode_segment_into(&mut buffer, segment);
            }
        }

        if !self.query.is_empty() {
            buffer.push('?');
            self.query.serialize_into(&mut buffer);
        }
        if !self.fragment.is_empty() {
            buffer.push('#');
            percent_encode_fragment_into(&mut buffer, &self.fragment);
        }
        f.write_str(&buffer)
    }
}
