//! Endpoint abstraction shared by both protocol adaptations.
//!
//! This crate is the hub's vocabulary: the [`Endpoint`] trait every business
//! endpoint implements, the [`RequestContext`] and [`sink::EventSink`] it is
//! handed, the JSON envelope codec, the `max_count` resolver, and the
//! registry that binds names to endpoints.
//!
//! It has no dependency on the transport layer, so endpoints can be written
//! and tested without an HTTP server in sight. The `web` crate adapts an
//! endpoint to the single-shot path (one envelope per request) and the `sse`
//! crate to the streaming path (one framed event per chunk); the endpoint
//! itself never knows which protocol is in use.
//!
//! # Modules
//!
//! - `context`: per-request parameters, effective event limit, cancellation
//! - `envelope`: success/error JSON envelope encoding
//! - `event_count`: `max_count` query-parameter resolution
//! - `registry`: setup-time endpoint registration, frozen before serving
//! - `sink`: the chunk sink trait plus the in-memory recording sink

pub mod context;
pub mod envelope;
pub mod event_count;
pub mod registry;
pub mod sink;

pub use context::RequestContext;
pub use registry::{EndpointRegistry, RegistryBuilder};

use async_trait::async_trait;
use sink::EventSink;

/// The interface every business endpoint implements.
///
/// An endpoint repeatedly produces a chunk and writes it to `sink`, then
/// checks its termination conditions: it must stop once it has written
/// `ctx.max_count()` chunks, once a write returns [`sink::SinkClosed`], or
/// within one production interval of `ctx` being canceled. Cancellation is
/// cooperative - the hub never tears an endpoint down forcibly, so an
/// implementation that stops polling the signal will keep running until its
/// next write fails.
///
/// The endpoint owns the pacing between chunks. To signal a failure, write an
/// error envelope and record a non-success status via
/// [`sink::EventSink::set_status`]; the hub relays it verbatim instead of
/// wrapping it.
#[async_trait]
pub trait Endpoint: Send + Sync + 'static {
    async fn handle(&self, ctx: RequestContext, sink: &dyn EventSink);
}
