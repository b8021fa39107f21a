use std::collections::HashMap;
use tokio_util::sync::CancellationToken;

/// Everything an endpoint invocation gets to see about its request: the name
/// it was dispatched under, the query parameters, the effective event limit,
/// and the cancellation signal tied to the client connection.
///
/// The event limit is already resolved by the time a context is built - the
/// single-shot path forces it to 1, the streaming path derives it from
/// `max_count`.
#[derive(Clone, Debug)]
pub struct RequestContext {
    endpoint: String,
    query: HashMap<String, String>,
    max_count: usize,
    cancellation: CancellationToken,
}

impl RequestContext {
    pub fn new(
        endpoint: impl Into<String>,
        query: HashMap<String, String>,
        max_count: usize,
        cancellation: CancellationToken,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            query,
            max_count,
            cancellation,
        }
    }

    /// The name this endpoint was registered (and dispatched) under.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Maximum number of chunks this invocation may produce.
    pub fn max_count(&self) -> usize {
        self.max_count
    }

    /// Completes when the client has disconnected. Endpoints should select
    /// against this at least once per production interval.
    pub async fn cancelled(&self) {
        self.cancellation.cancelled().await
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with(max_count: usize) -> RequestContext {
        RequestContext::new(
            "test",
            HashMap::from([("max_count".to_string(), "7".to_string())]),
            max_count,
            CancellationToken::new(),
        )
    }

    #[test]
    fn test_query_lookup() {
        let ctx = context_with(7);
        assert_eq!(ctx.query("max_count"), Some("7"));
        assert_eq!(ctx.query("missing"), None);
    }

    #[tokio::test]
    async fn test_cancellation_is_observable() {
        let ctx = context_with(1);
        assert!(!ctx.is_cancelled());

        ctx.cancellation_token().cancel();
        assert!(ctx.is_cancelled());
        // Must resolve immediately once the token is cancelled.
        ctx.cancelled().await;
    }
}
