/// Errors returned by the derivation engine.
///
/// Malformed money fields are deliberately *not* represented here: they
/// are coerced to zero at the wire boundary and guarded against in the
/// totalizer, so aggregate displays stay renderable.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// One or more requested test names matched no active catalog
    /// service. The whole batch is aborted; the unmatched names are
    /// carried verbatim so an administrator can reconcile the catalog.
    #[error("no active service matches: {}", unmatched.join(", "))]
    CatalogMismatch { unmatched: Vec<String> },

    /// Ambient configuration (environment) was invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
