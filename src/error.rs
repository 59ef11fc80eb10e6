use std::io;

/// Errors from driving the application. Requests themselves never fail; the
/// router answers anything it doesn't know with a 404 or 405.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// We couldn't listen locally, for example if the address was malformed
    /// or already in use.
    #[error("could not bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    /// The local server stopped accepting connections.
    #[error("local server stopped: {0}")]
    Serve(#[source] io::Error),

    /// The Lambda runtime loop gave up, usually because the runtime API
    /// was unreachable.
    #[error("Lambda runtime stopped: {0}")]
    Lambda(#[source] lambda_http::Error),
}
