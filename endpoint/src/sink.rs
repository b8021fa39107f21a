use async_trait::async_trait;
use std::fmt;
use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Mutex;

/// Returned from [`EventSink::write`] when the consuming side is gone - the
/// client disconnected or the draining loop shut down. Production should
/// stop; there is nobody left to deliver to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkClosed;

impl fmt::Display for SinkClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event sink closed")
    }
}

impl std::error::Error for SinkClosed {}

/// Where an endpoint writes its chunks.
///
/// The hub supplies the implementation: an in-memory recorder on the
/// single-shot path, a capacity-one relay channel on the streaming path.
/// Endpoints write each chunk as one `write` call and never see the wire.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Writes one chunk. On the streaming path this may block until the
    /// previous chunk has been forwarded to the client.
    async fn write(&self, chunk: &[u8]) -> Result<(), SinkClosed>;

    /// Records a non-success HTTP status for the response. Only meaningful
    /// on the single-shot path before the response is written; the streaming
    /// path logs and ignores it since its headers are already on the wire.
    fn set_status(&self, status: u16);
}

/// In-memory sink standing in for the live connection on the single-shot
/// path. Captures everything the endpoint writes, plus any status it sets.
#[derive(Debug, Default)]
pub struct RecordingSink {
    body: Mutex<Vec<u8>>,
    // 0 means "never set"; reads fall back to 200.
    status: AtomicU16,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The captured body so far.
    pub fn body(&self) -> Vec<u8> {
        self.body.lock().map(|body| body.clone()).unwrap_or_default()
    }

    /// The recorded status, defaulting to 200 when the endpoint set none.
    pub fn status(&self) -> u16 {
        match self.status.load(Ordering::Acquire) {
            0 => 200,
            status => status,
        }
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn write(&self, chunk: &[u8]) -> Result<(), SinkClosed> {
        let mut body = self.body.lock().map_err(|_| SinkClosed)?;
        body.extend_from_slice(chunk);
        Ok(())
    }

    fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::Release);
    }
}
