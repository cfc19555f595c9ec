//! Alarm Server Client
//!
//! HTTP client for the alarm webmon's `alarms` resource.

use crate::alarms::Snapshot;
use crate::consts::cli_consts::refresh;
use crate::environment::Environment;
use crate::source::AlarmSource;
use crate::source::error::AlarmSourceError;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with monitor version
const USER_AGENT: &str = concat!("alarmmon/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AlarmServerClient {
    client: Client,
    environment: Environment,
    base_url: String,
}

impl AlarmServerClient {
    pub fn new(environment: Environment) -> Self {
        let base_url = environment.alarm_server_url();
        Self::with_base_url(environment, base_url)
    }

    /// Client pointed at an explicit base URL (`--url` or a saved config).
    pub fn with_base_url(environment: Environment, base_url: String) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(refresh::connect_timeout())
                .timeout(refresh::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, AlarmSourceError> {
        if !response.status().is_success() {
            return Err(AlarmSourceError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
    ) -> Result<T, AlarmSourceError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        let decoded = serde_json::from_slice(&response_bytes)?;
        Ok(decoded)
    }
}

#[async_trait::async_trait]
impl AlarmSource for AlarmServerClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn fetch_snapshot(&self) -> Result<Snapshot, AlarmSourceError> {
        self.get_request("alarms").await
    }
}
