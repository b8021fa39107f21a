use crate::connection::ConnectionId;
use crate::sink::ChannelSink;
use async_stream::stream;
use axum::response::sse::Event;
use endpoint::{envelope, Endpoint, RequestContext};
use futures::Stream;
use log::*;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::mpsc;

// At most one chunk in flight between the producer task and the draining
// loop; the producer blocks until the previous chunk has been forwarded.
const RELAY_CAPACITY: usize = 1;

/// Bridges a chunk-producing endpoint onto a live SSE connection.
///
/// The endpoint runs on its own tokio task, writing into a capacity-one
/// relay channel. The returned stream is the draining loop: each chunk is
/// wrapped in the success envelope and yielded as one `data:` frame, in
/// exactly the order produced. The stream ends when the endpoint finishes
/// (channel closed); dropping the stream - which axum does when the client
/// disconnects - cancels the endpoint's context so it stops producing within
/// one pacing interval.
pub fn relay(
    handler: Arc<dyn Endpoint>,
    ctx: RequestContext,
) -> impl Stream<Item = Result<Event, Infallible>> {
    let connection_id = ConnectionId::new();
    let cancellation = ctx.cancellation_token().clone();
    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(RELAY_CAPACITY);

    let producer_id = connection_id.clone();
    tokio::spawn(async move {
        let sink = ChannelSink::new(tx);
        handler.handle(ctx, &sink).await;
        debug!("Endpoint finished producing for connection {}", producer_id.as_str());
    });

    // Held inside the stream so that dropping it cancels the endpoint.
    let disconnect_guard = cancellation.drop_guard();

    stream! {
        let _disconnect_guard = disconnect_guard;

        while let Some(chunk) = rx.recv().await {
            match envelope::encode_success(&chunk) {
                Ok(payload) => yield Ok(Event::default().data(payload)),
                Err(e) => {
                    // One bad chunk does not terminate the stream.
                    error!(
                        "Error encoding SSE event for connection {}: {e}",
                        connection_id.as_str()
                    );
                    continue;
                }
            }
        }

        debug!("Relay closed for connection {}", connection_id.as_str());
    }
}
