use crate::checkers::is_valid_scheme;
use crate::compat::{String, ToString};
use crate::error::{Error, Result};
use crate::helpers::split_transport;
use crate::scheme::{SchemeEntry, lookup};

/// A scheme resolved against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub entry: &'static SchemeEntry,
    /// Accepted transport qualifier, empty when none was given
    pub transport: String,
}

/// Resolve a raw scheme such as `pg`, `mysql+unix` or `odbc+sql+server`.
///
/// The scheme is split at the first `+`: the left part is looked up as an
/// alias, the right part is checked against the driver's transports.
///
/// # Errors
///
/// - [`Error::InvalidDatabaseScheme`] for an empty or malformed scheme
/// - [`Error::UnknownDatabaseScheme`] when the alias is not registered
/// - [`Error::InvalidTransportProtocol`] when the qualifier is not accepted
pub fn resolve(scheme: &str) -> Result<Resolved> {
    let (alias, transport) = split_transport(scheme);
    if alias.is_empty() || !is_valid_scheme(scheme) {
        return Err(Error::InvalidDatabaseScheme);
    }

    let entry = lookup(alias).ok_or(Error::UnknownDatabaseScheme)?;

    let transport = match transport {
        None => String::new(),
        Some(qualifier) => entry
            .transports
            .accept(qualifier)
            .ok_or(Error::InvalidTransportProtocol)?
            .to_string(),
    };

    tracing::trace!(
        scheme = entry.name,
        transport = %transport,
        "resolved database scheme"
    );

    Ok(Resolved { entry, transport })
}
