use config::Config;
use endpoint::EndpointRegistry;
use std::sync::Arc;

pub mod config;
pub mod logging;

// Service-level state shared with the router. Needs to implement Clone to be
// able to be passed into Router as State.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<EndpointRegistry>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, registry: EndpointRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            config,
        }
    }

    pub fn registry_ref(&self) -> &EndpointRegistry {
        &self.registry
    }
}
