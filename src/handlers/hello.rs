use axum::Json;
use serde::Serialize;

/// The greeting returned from `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resp {
    #[serde(rename = "Hello")]
    hello: &'static str,
}

impl Default for Resp {
    fn default() -> Self {
        Self { hello: "World" }
    }
}

#[tracing::instrument]
pub async fn handler() -> Json<Resp> {
    Json(Resp::default())
}
