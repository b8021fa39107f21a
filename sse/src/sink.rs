use async_trait::async_trait;
use endpoint::sink::{EventSink, SinkClosed};
use log::*;
use tokio::sync::mpsc::Sender;

/// Relay-channel sink handed to a streaming endpoint.
///
/// The channel behind it holds one chunk: `write` suspends until the
/// draining loop has taken the previous chunk off the channel, which is what
/// throttles a fast producer to the client's write/flush rate. A failed send
/// means the draining loop is gone (client disconnected) and maps to
/// [`SinkClosed`].
pub struct ChannelSink {
    tx: Sender<Vec<u8>>,
}

impl ChannelSink {
    pub fn new(tx: Sender<Vec<u8>>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl EventSink for ChannelSink {
    async fn write(&self, chunk: &[u8]) -> Result<(), SinkClosed> {
        self.tx.send(chunk.to_vec()).await.map_err(|_| SinkClosed)
    }

    fn set_status(&self, status: u16) {
        // SSE headers are already on the wire once the stream is open.
        warn!("Ignoring status {status} set on an open event stream");
    }
}
