use crate::error::Error;
use axum::Router;
use tokio::net::TcpListener;

/// Hand the app to the Lambda runtime. `lambda_http` turns each invocation
/// event into an HTTP request and the response back into an event.
pub async fn lambda(app: Router) -> Result<(), Error> {
    tracing::info!("starting Lambda runtime");

    lambda_http::run(app).await.map_err(Error::Lambda)
}

/// Serve the app on a TCP listener, for local development.
pub async fn local(app: Router, address: &str) -> Result<(), Error> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|source| Error::Bind {
            address: address.to_string(),
            source,
        })?;
    tracing::info!(address = ?listener.local_addr(), "listening");

    axum::serve(listener, app).await.map_err(Error::Serve)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_bind_failure() {
        let err = local(Router::new(), "not an address").await.unwrap_err();

        match err {
            Error::Bind { address, .. } => assert_eq!(address, "not an address"),
            other => panic!("expected a bind error, got {other:?}"),
        }
    }
}
