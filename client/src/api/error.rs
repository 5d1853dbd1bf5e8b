use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("websocket error: {0}")]
    WebSocket(String),

    #[error("api client used before Api::init")]
    NotInitialized,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Http(other.to_string()),
        }
    }
}
