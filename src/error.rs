/// Errors that can occur while turning a database URL into a DSN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Empty or malformed scheme, or a URL shape the target driver cannot express
    InvalidDatabaseScheme,
    /// Scheme alias not present in the registry
    UnknownDatabaseScheme,
    /// Transport qualifier not accepted by the driver
    InvalidTransportProtocol,
    /// Port is not an integer in `0..=65535`
    InvalidPort,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidDatabaseScheme => "invalid database scheme",
            Self::UnknownDatabaseScheme => "unknown database scheme",
            Self::InvalidTransportProtocol => "invalid transport protocol",
            Self::InvalidPort => "invalid port",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for database URL parsing
pub type Result<T> = core::result::Result<T, Error>;

/// Failure of [`open`](crate::open): either the URL was rejected or the
/// connector refused the DSN. Connector errors are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError<E> {
    /// The URL could not be parsed
    Parse(Error),
    /// The connector returned an error for the resolved driver and DSN
    Connect(E),
}

impl<E> From<Error> for OpenError<E> {
    fn from(err: Error) -> Self {
        Self::Parse(err)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for OpenError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parse(err) => err.fmt(f),
            Self::Connect(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for OpenError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Connect(err) => Some(err),
        }
    }
}
