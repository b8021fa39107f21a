use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::sse::{KeepAlive, Sse};
use axum::response::{AppendHeaders, IntoResponse, Response};
use endpoint::sink::RecordingSink;
use endpoint::{envelope, event_count, RequestContext};
use log::*;
use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

use crate::{AppState, Error};

/// GET one chunk from the named endpoint, wrapped in a JSON envelope.
///
/// The single-shot path is the streaming path with the event limit forced to
/// 1: the endpoint runs against an in-memory recording sink instead of the
/// live connection, and whatever it captured is wrapped once. Any `max_count`
/// the client supplied is ignored here.
pub async fn single_shot(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, Error> {
    info!("Received REST request for endpoint {name}");

    let Some(handler) = app_state.registry_ref().get(&name) else {
        return Err(Error::endpoint_not_found(&name));
    };

    let ctx = RequestContext::new(&name, params, 1, CancellationToken::new());
    let sink = RecordingSink::new();
    handler.handle(ctx, &sink).await;

    // A non-success status means the endpoint shaped its own error envelope;
    // relay body and status verbatim.
    let status = sink.status();
    if status != StatusCode::OK.as_u16() {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return Ok((
            status,
            [(header::CONTENT_TYPE, "application/json")],
            sink.body(),
        )
            .into_response());
    }

    let body = envelope::encode_success(&sink.body()).map_err(Error::Encoding)?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// GET the named endpoint as a live event stream.
///
/// The event limit comes from the `max_count` query parameter (default 3600).
/// The response declares a no-cache, cross-origin-allowed event stream; each
/// chunk the endpoint produces arrives as one flushed `data:` frame. The
/// stream ends without a terminator frame when the endpoint finishes.
pub async fn stream(
    State(app_state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Response, Error> {
    info!("Received SSE request for endpoint {name}");

    let Some(handler) = app_state.registry_ref().get(&name) else {
        return Err(Error::endpoint_not_found(&name));
    };

    let max_count = event_count::resolve(params.get("max_count").map(String::as_str));
    let ctx = RequestContext::new(&name, params, max_count, CancellationToken::new());

    let stream = sse::relay(handler, ctx);

    Ok((
        AppendHeaders([
            (header::CACHE_CONTROL, "no-cache"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ]),
        Sse::new(stream).keep_alive(KeepAlive::default()),
    )
        .into_response())
}
