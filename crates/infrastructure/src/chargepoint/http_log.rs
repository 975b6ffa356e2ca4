use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{error, info};

/// One vendor HTTP request/response pair
#[derive(Debug, Clone, Serialize)]
pub struct HttpExchange {
    pub timestamp: DateTime<Utc>,
    pub operation: String,
    pub url: String,
    pub request: Value,
    /// `None` when no response arrived
    pub status: Option<u16>,
    pub response: Value,
}

type Writer = Box<dyn AsyncWrite + Send + Unpin>;

/// Append-only sink for vendor HTTP exchanges, one JSON object per line.
///
/// The writer is injected; [`HttpLogSink::create`] opens a file for it. The
/// handle is released when the sink is closed or dropped.
pub struct HttpLogSink {
    writer: Mutex<Option<Writer>>,
}

impl HttpLogSink {
    pub fn new<W>(writer: W) -> Self
    where
        W: AsyncWrite + Send + Unpin + 'static,
    {
        Self {
            writer: Mutex::new(Some(Box::new(writer))),
        }
    }

    /// Create (or truncate) the log file at `path`.
    pub async fn create(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).await?;
        info!("HTTP exchange log: {:?}", path);
        Ok(Self::new(file))
    }

    /// Append one exchange. Write failures are logged, not returned.
    pub async fn record(&self, exchange: &HttpExchange) {
        let mut line = match serde_json::to_vec(exchange) {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to encode HTTP exchange: {}", e);
                return;
            }
        };
        line.push(b'\n');

        let mut guard = self.writer.lock().await;
        let Some(writer) = guard.as_mut() else {
            return;
        };
        if let Err(e) = writer.write_all(&line).await {
            error!("Failed to write HTTP exchange log: {}", e);
            return;
        }
        if let Err(e) = writer.flush().await {
            error!("Failed to flush HTTP exchange log: {}", e);
        }
    }

    /// Flush and release the writer. Later records are dropped.
    pub async fn close(&self) -> std::io::Result<()> {
        if let Some(mut writer) = self.writer.lock().await.take() {
            writer.flush().await?;
            writer.shutdown().await?;
        }
        Ok(())
    }
}
