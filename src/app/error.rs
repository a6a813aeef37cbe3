use thiserror::Error;

/// Failures at the database seam. Both kinds are handled the same way by
/// the caller: logged, not retried.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("MONGODB_URI must be set via --mongodb-uri or in .env/environment variables")]
    MissingUri,

    #[error("could not reach MongoDB")]
    Connection(#[source] mongodb::error::Error),

    #[error("failed to fetch collection `{collection}`")]
    Query {
        collection: String,
        #[source]
        source: mongodb::error::Error,
    },
}
