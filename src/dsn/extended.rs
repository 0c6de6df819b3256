use super::Target;
use super::kv::{KvWriter, odbc};
use crate::compat::String;
use crate::error::{Error, Result};
use crate::normalized::NormalizedUrl;
use crate::scheme::KvDialect;

/// OLE DB provider bridging ADODB to ODBC drivers
const MSDASQL_PROVIDER: &str = "MSDASQL.1";

/// OLE ODBC DSN: the ODBC DSN of the inner protocol (`oleodbc+postgres`),
/// carried as the `Extended Properties` of an ADODB DSN for `MSDASQL.1`.
pub(super) fn generate(url: &NormalizedUrl) -> Result<(String, Target)> {
    if url.transport.is_empty() {
        return Err(Error::InvalidDatabaseScheme);
    }
    let (properties, target) = odbc(url)?;

    let mut kv = KvWriter::new(KvDialect::Adodb);
    kv.push("Provider", MSDASQL_PROVIDER);
    kv.push_quoted("Extended Properties", &properties);
    Ok((kv.finish(), target))
}
