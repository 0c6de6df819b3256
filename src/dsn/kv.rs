use super::Target;
use super::instance::split_instance;
use crate::compat::{String, ToString, Vec};
use crate::error::{Error, Result};
use crate::normalized::NormalizedUrl;
use crate::scheme::{KvDialect, lookup};

/// Builder for `Key=Value;Key=Value` connection strings.
///
/// Empty values are skipped and the first value written for a key (compared
/// ASCII case-insensitively) wins, so URL components take precedence over
/// query options that repeat them.
pub(super) struct KvWriter {
    dialect: KvDialect,
    buffer: String,
    keys: Vec<String>,
}

impl KvWriter {
    pub(super) fn new(dialect: KvDialect) -> Self {
        Self {
            dialect,
            buffer: String::with_capacity(96),
            keys: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, key: &str, value: &str) {
        self.push_with(key, value, false);
    }

    /// Push a value that is always quoted, e.g. an ODBC driver name.
    pub(super) fn push_quoted(&mut self, key: &str, value: &str) {
        self.push_with(key, value, true);
    }

    /// Push a user-supplied option. Keys have no quoting syntax, so a key
    /// that would split or open a pair is rejected.
    pub(super) fn push_option(&mut self, key: &str, value: &str) -> Result<()> {
        if key.contains([';', '=', '{', '}', '"']) {
            return Err(Error::InvalidDatabaseScheme);
        }
        self.push(key, value);
        Ok(())
    }

    fn push_with(&mut self, key: &str, value: &str, force_quote: bool) {
        if value.is_empty() || self.keys.iter().any(|k| k.eq_ignore_ascii_case(key)) {
            return;
        }
        if !self.buffer.is_empty() {
            self.buffer.push(';');
        }
        self.buffer.push_str(key);
        self.buffer.push('=');
        quote_into(&mut self.buffer, self.dialect, value, force_quote);
        self.keys.push(key.to_string());
    }

    pub(super) fn finish(self) -> String {
        self.buffer
    }
}

fn needs_quoting(value: &str, special: &[char]) -> bool {
    value.contains(special) || value.starts_with(' ') || value.ends_with(' ')
}

/// ODBC wraps in `{}` doubling `}`; OLE DB wraps in `""` doubling `"`.
fn quote_into(buffer: &mut String, dialect: KvDialect, value: &str, force: bool) {
    match dialect {
        KvDialect::Odbc => {
            if force || needs_quoting(value, &[';', '=', '{', '}']) {
                buffer.push('{');
                buffer.push_str(&value.replace('}', "}}"));
                buffer.push('}');
            } else {
                buffer.push_str(value);
            }
        }
        KvDialect::Adodb => {
            if force || needs_quoting(value, &[';', '=', '"', '\'']) {
                buffer.push('"');
                buffer.push_str(&value.replace('"', "\"\""));
                buffer.push('"');
            } else {
                buffer.push_str(value);
            }
        }
    }
}

/// ODBC DSN. The transport names the ODBC driver (`odbc+postgres`), with
/// further `+` read as spaces (`odbc+sql+server`). When no port is given it
/// is taken from the driver's registry entry, if the name resolves.
pub(super) fn odbc(url: &NormalizedUrl) -> Result<(String, Target)> {
    if url.opaque {
        return Err(Error::InvalidDatabaseScheme);
    }
    let (instance, database) = split_instance(&url.path_segments)?;

    let mut server = url.host.clone();
    if !instance.is_empty() {
        server.push('\\');
        server.push_str(instance);
    }
    let port = url
        .port
        .or_else(|| lookup(&url.transport).and_then(|entry| entry.default_port));

    let mut kv = KvWriter::new(KvDialect::Odbc);
    if !url.transport.is_empty() {
        kv.push_quoted("Driver", &url.transport.replace('+', " "));
    }
    kv.push("Server", &server);
    kv.push("Port", &port.map(|port| port.to_string()).unwrap_or_default());
    kv.push("Database", database);
    kv.push("UID", &url.user);
    kv.push("PWD", url.password.as_deref().unwrap_or_default());
    for (key, value) in url.query.iter() {
        kv.push_option(key, value)?;
    }

    let target = Target {
        host: url.host.clone(),
        port,
        instance: instance.to_string(),
        database: database.to_string(),
    };
    Ok((kv.finish(), target))
}

/// ADODB DSN: `adodb://provider:port/datasource/dbname`. The data source
/// defaults to `.` (the local machine).
pub(super) fn adodb(url: &NormalizedUrl) -> Result<(String, Target)> {
    if url.opaque {
        return Err(Error::InvalidDatabaseScheme);
    }
    let (data_source, database) = match url.path_segments.as_slice() {
        [] => (".", ""),
        [data_source] => (data_source.as_str(), ""),
        [data_source, database] => (data_source.as_str(), database.as_str()),
        _ => return Err(Error::InvalidDatabaseScheme),
    };

    let mut kv = KvWriter::new(KvDialect::Adodb);
    kv.push("Provider", &url.host);
    kv.push("Port", &url.port.map(|port| port.to_string()).unwrap_or_default());
    kv.push("Data Source", data_source);
    kv.push("Database", database);
    kv.push("User ID", &url.user);
    kv.push("Password", url.password.as_deref().unwrap_or_default());
    for (key, value) in url.query.iter() {
        kv.push_option(key, value)?;
    }

    let target = Target {
        host: url.host.clone(),
        port: url.port,
        instance: data_source.to_string(),
        database: database.to_string(),
    };
    Ok((kv.finish(), target))
}
