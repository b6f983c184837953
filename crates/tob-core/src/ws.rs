//! Pull-style WebSocket message source.
//!
//! A stream worker owns exactly one connection and drives it by repeatedly
//! asking for the next text message. [`MessageSource`] is that capability as
//! a trait, so the worker loop can be exercised in tests with scripted
//! sources; [`WsSource`] is the production implementation over
//! tokio-tungstenite.
//!
//! There is deliberately no reconnect here: a failed connection ends the
//! stream and the caller decides what that means (for the feed, the symbol's
//! worker terminates).

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

use crate::error::FeedError;

/// Capability to receive the next text message from a streaming connection.
///
/// `Ok(Some(text))` is one message, `Ok(None)` is a clean end of stream, and
/// `Err` is a connection-level failure. Both of the latter are terminal.
#[async_trait]
pub trait MessageSource: Send {
    async fn next_message(&mut self) -> Result<Option<String>, FeedError>;
}

/// A single TLS WebSocket connection.
pub struct WsSource {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl WsSource {
    /// Connect to `url` and perform the WebSocket handshake.
    pub async fn connect(url: &str) -> Result<Self, FeedError> {
        let (stream, _response) = connect_async(url)
            .await
            .map_err(|e| FeedError::Connect(e.to_string()))?;
        debug!("connected to {url}");
        Ok(Self { stream })
    }

    /// Best-effort close of the underlying connection.
    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}

#[async_trait]
impl MessageSource for WsSource {
    async fn next_message(&mut self) -> Result<Option<String>, FeedError> {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return Ok(Some(text.to_string())),
                Some(Ok(Message::Ping(payload))) => {
                    // Keep-alive; answer and keep reading.
                    if let Err(e) = self.stream.send(Message::Pong(payload)).await {
                        return Err(FeedError::Receive(e.to_string()));
                    }
                }
                Some(Ok(Message::Close(_))) => return Ok(None),
                Some(Ok(_)) => {} // Binary, Pong, Frame — not part of this feed
                Some(Err(e)) => return Err(FeedError::Receive(e.to_string())),
                None => return Ok(None),
            }
        }
    }
}
