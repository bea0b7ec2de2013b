use crate::core::{ConfigProvider, DogImageResponse, DogSource};
use crate::utils::error::{Result, WoofError};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_ENDPOINT: &str = "https://random.dog/woof.json";

/// Plain GET against a fixed endpoint. No custom headers, no timeout, no retry.
#[derive(Debug, Clone)]
pub struct HttpDogSource {
    endpoint: String,
    client: Client,
}

impl HttpDogSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.endpoint())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpDogSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl DogSource for HttpDogSource {
    async fn fetch(&self) -> Result<DogImageResponse> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(WoofError::TransportFailure)?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(WoofError::NonSuccessStatus { status });
        }

        let body = response
            .bytes()
            .await
            .map_err(WoofError::TransportFailure)?;
        tracing::debug!("Decoding {} byte payload", body.len());

        Ok(DogImageResponse::from_slice(&body)?)
    }
}
