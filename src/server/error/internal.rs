use thiserror::Error;

/// Internal issues with the codebase or its collaborators indicating unexpected behavior
#[derive(Error, Debug)]
pub enum InternalError {
    /// A session record written by the auth flow could not be read.
    ///
    /// Occurs when the server snapshot stored in the session does not have the
    /// expected shape.
    #[error("Malformed session record {session_id}: {source}")]
    MalformedSession {
        /// Session the record belongs to
        session_id: String,
        /// The underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}
