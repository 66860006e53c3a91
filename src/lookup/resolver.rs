use hickory_resolver::{
    Resolver,
    error::{ResolveError, ResolveErrorKind},
};
use log::trace;

use super::LookupError;

/// Source of DNS TXT records.
pub trait TxtResolver {
    /// All TXT records for `query`, each flattened to one string.
    /// A name without TXT records yields an empty list, not an error.
    fn txt_records(&self, query: &str) -> Result<Vec<String>, LookupError>;
}

/// [`TxtResolver`] backed by the blocking `hickory-resolver` client.
pub struct DnsTxtResolver {
    resolver: Resolver,
}

impl DnsTxtResolver {
    pub fn from_system_conf() -> Result<Self, LookupError> {
        Ok(Self {
            resolver: Resolver::from_system_conf()?,
        })
    }

    pub fn new(resolver: Resolver) -> Self {
        Self { resolver }
    }
}

impl TxtResolver for DnsTxtResolver {
    fn txt_records(&self, query: &str) -> Result<Vec<String>, LookupError> {
        trace!(query = query; "TXT lookup");
        match self.resolver.txt_lookup(query) {
            Ok(lookup) => Ok(lookup
                .iter()
                .map(|txt| {
                    txt.txt_data()
                        .iter()
                        .map(|chunk| String::from_utf8_lossy(chunk))
                        .collect::<String>()
                })
                .collect()),
            Err(e) => no_records_as_empty(query, e),
        }
    }
}

/// NXDOMAIN and empty answers mean "no TXT records"; anything else is a DNS failure.
fn no_records_as_empty(query: &str, error: ResolveError) -> Result<Vec<String>, LookupError> {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Ok(Vec::new()),
        _ => Err(LookupError::Dns {
            query: query.to_string(),
            reason: error.to_string(),
        }),
    }
}
