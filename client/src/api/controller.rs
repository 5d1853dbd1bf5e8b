use crate::api::error::ApiError;
use crate::api::feed::{LogSource, OnMessage, SubscribeRequest};
use futures_util::future::{AbortHandle, Abortable};
use futures_util::StreamExt;
use gloo_net::http::Request;
use gloo_net::websocket::{futures::WebSocket, Message};
use leptos::logging::warn;
use leptos::task::spawn_local;
use shared::types::api_config::{ApiConfig, ControllerConfigs};
use shared::types::log_message::LogMessage;

/// REST client for the proxy's external controller.
pub struct Controller {
    config: ApiConfig,
}

impl Controller {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn configs(&self) -> Result<ControllerConfigs, ApiError> {
        let mut req = Request::get(&self.config.configs_url());
        if let Some(auth) = self.config.authorization() {
            req = req.header("Authorization", &auth);
        }
        let resp = req.send().await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(resp.json::<ControllerConfigs>().await?)
    }
}

/// Streams `/logs` over a WebSocket.
#[derive(Debug, Clone, Copy, Default)]
pub struct WsLogSource;

/// Live WebSocket reader; dropping it aborts the reader and closes the socket.
pub struct LogStreamHandle {
    abort: AbortHandle,
}

impl Drop for LogStreamHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

impl LogSource for WsLogSource {
    type Handle = LogStreamHandle;

    fn subscribe(
        &self,
        request: &SubscribeRequest,
        on_message: OnMessage,
    ) -> Result<LogStreamHandle, ApiError> {
        let url = request.config.logs_url(&request.level);
        let ws = WebSocket::open(&url).map_err(|e| ApiError::WebSocket(e.to_string()))?;
        let (abort, registration) = AbortHandle::new_pair();

        let reader = async move {
            let (_sink, mut stream) = ws.split();
            while let Some(frame) = stream.next().await {
                let text = match frame {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Bytes(bytes)) => match String::from_utf8(bytes) {
                        Ok(text) => text,
                        Err(_) => continue,
                    },
                    Err(e) => {
                        warn!("log stream closed: {e}");
                        break;
                    }
                };
                for decoded in decode_frame(&text) {
                    match decoded {
                        Ok(message) => on_message(message),
                        Err(e) => warn!("skipping undecodable log record: {e}"),
                    }
                }
            }
        };
        spawn_local(async move {
            let _ = Abortable::new(reader, registration).await;
        });

        Ok(LogStreamHandle { abort })
    }
}

/// A frame normally carries one JSON record, but newline-delimited batches
/// are accepted too.
pub fn decode_frame(text: &str) -> impl Iterator<Item = Result<LogMessage, serde_json::Error>> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(LogMessage::from_json)
}
