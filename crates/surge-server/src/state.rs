use surge_client::LoadTestClient;
use surge_core::{Result, SurgeConfig};

#[derive(Clone)]
pub struct AppState {
    pub client: LoadTestClient,
    pub backend_url: String,
}

impl AppState {
    pub fn new(config: &SurgeConfig) -> Result<Self> {
        Ok(Self {
            client: LoadTestClient::from_config(&config.backend)?,
            backend_url: config.backend.url.clone(),
        })
    }
}
