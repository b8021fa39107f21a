use crate::Endpoint;
use std::collections::HashMap;
use std::sync::Arc;

/// Collects endpoint registrations during the setup phase.
///
/// The builder is consumed by [`RegistryBuilder::build`] into an immutable
/// [`EndpointRegistry`], so registration after serving has started is not
/// expressible - the write-during-setup, read-only-during-serving discipline
/// is enforced by the API shape rather than by convention.
#[derive(Default)]
pub struct RegistryBuilder {
    endpoints: HashMap<String, Arc<dyn Endpoint>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `endpoint` under `name`. May be called any number of times;
    /// the last registration for a given name wins.
    pub fn register(mut self, name: impl Into<String>, endpoint: Arc<dyn Endpoint>) -> Self {
        self.endpoints.insert(name.into(), endpoint);
        self
    }

    /// Freezes the mapping for the lifetime of the process.
    pub fn build(self) -> EndpointRegistry {
        EndpointRegistry {
            endpoints: self.endpoints,
        }
    }
}

/// Immutable name-to-endpoint mapping shared by every connection. Requires
/// no locking: it is never written to once built.
pub struct EndpointRegistry {
    endpoints: HashMap<String, Arc<dyn Endpoint>>,
}

impl EndpointRegistry {
    pub fn get(&self, name: &str) -> Option<Arc<dyn Endpoint>> {
        self.endpoints.get(name).map(Arc::clone)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Endpoint>)> {
        self.endpoints
            .iter()
            .map(|(name, endpoint)| (name.as_str(), endpoint))
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::EventSink;
    use crate::RequestContext;
    use async_trait::async_trait;

    struct TaggedEndpoint {
        tag: &'static str,
    }

    #[async_trait]
    impl Endpoint for TaggedEndpoint {
        async fn handle(&self, _ctx: RequestContext, sink: &dyn EventSink) {
            let _ = sink.write(self.tag.as_bytes()).await;
        }
    }

    #[test]
    fn test_lookup_by_registered_name() {
        let registry = RegistryBuilder::new()
            .register("clock", Arc::new(TaggedEndpoint { tag: "clock" }))
            .build();

        assert!(registry.get("clock").is_some());
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn test_last_registration_for_a_name_wins() {
        let registry = RegistryBuilder::new()
            .register("test", Arc::new(TaggedEndpoint { tag: "first" }))
            .register("test", Arc::new(TaggedEndpoint { tag: "second" }))
            .build();

        assert_eq!(registry.len(), 1);

        let endpoint = registry.get("test").unwrap();
        let sink = crate::sink::RecordingSink::new();
        let ctx = RequestContext::new(
            "test",
            Default::default(),
            1,
            tokio_util::sync::CancellationToken::new(),
        );
        endpoint.handle(ctx, &sink).await;

        assert_eq!(sink.body(), b"second");
    }

    #[test]
    fn test_empty_registry() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
