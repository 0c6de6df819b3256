use crate::dsn::Dsn;
use crate::error::OpenError;

/// Something that opens database connections from a driver key and a DSN.
///
/// This crate ships no drivers; implement this for whatever registry of SQL
/// drivers the application links. Closures `Fn(&str, &str) -> Result<C, E>`
/// implement it directly.
pub trait Connector {
    type Connection;
    type Error;

    /// Open a connection with the driver registered under `driver`.
    ///
    /// # Errors
    ///
    /// Whatever the underlying driver reports.
    fn connect(&self, driver: &str, dsn: &str) -> Result<Self::Connection, Self::Error>;
}

impl<F, C, E> Connector for F
where
    F: Fn(&str, &str) -> Result<C, E>,
{
    type Connection = C;
    type Error = E;

    fn connect(&self, driver: &str, dsn: &str) -> Result<C, E> {
        self(driver, dsn)
    }
}

/// Parse `url` and hand the resolved driver and DSN to `connector`.
///
/// # Errors
///
/// [`OpenError::Parse`] when the URL is rejected, [`OpenError::Connect`]
/// with the connector's error, unmodified, when the connection fails.
pub fn open<C>(connector: &C, url: &str) -> Result<C::Connection, OpenError<C::Error>>
where
    C: Connector + ?Sized,
{
    let dsn = Dsn::parse(url)?;
    tracing::trace!(driver = dsn.driver(), "opening connection");
    connector
        .connect(dsn.driver(), dsn.dsn())
        .map_err(OpenError::Connect)
}
