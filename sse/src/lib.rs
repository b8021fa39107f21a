//! Server-Sent Events bridge between chunk-producing endpoints and live
//! connections.
//!
//! This crate adapts the synchronous-looking `endpoint::Endpoint` contract
//! (write a chunk, check for termination, repeat) into a cancelable stream of
//! framed SSE events the web layer can hand straight to axum.
//!
//! # Architecture
//!
//! - **One producer task per connection**: the endpoint runs on its own tokio
//!   task with a [`sink::ChannelSink`] as its output and the connection's
//!   cancellation token in its context.
//! - **Capacity-one relay channel**: at most one chunk is ever in flight. A
//!   fast producer blocks in `write` until the draining loop has forwarded
//!   the previous chunk, so memory per connection is bounded to one chunk and
//!   the producer is throttled to the client's write/flush rate.
//! - **Draining loop**: [`relay::relay`] receives each chunk, wraps it in the
//!   success envelope, and yields it as one `data:` frame. axum flushes every
//!   event, so the client observes it without buffering delay.
//! - **Cooperative shutdown**: when the client disconnects, axum drops the
//!   stream; a drop guard cancels the context token and the endpoint exits
//!   within one pacing interval. When the endpoint finishes on its own, the
//!   channel closes and the stream simply ends - there is no "done" frame.
//!
//! A chunk that fails to encode is logged and dropped; the stream continues.
//!
//! # Modules
//!
//! - `connection`: server-generated connection ids for log correlation
//! - `relay`: the producer-task spawn and draining loop
//! - `sink`: the relay-channel sink handed to streaming endpoints

pub mod connection;
pub mod relay;
pub mod sink;

pub use relay::relay;
