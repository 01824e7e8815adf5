use async_trait::async_trait;
use url::Url;

use super::{RemoteConfigError, RemoteConfigProvider, RemoteConfiguration};
use crate::config::core_config::RemoteConfigConfig;

/// Fetches the configuration map as a JSON object with a GET request.
pub struct HttpRemoteConfigProvider {
    client: reqwest::Client,
    url: Url,
}

impl HttpRemoteConfigProvider {
    pub fn new(url: Url, timeout: std::time::Duration) -> Result<Self, RemoteConfigError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &RemoteConfigConfig) -> Result<Self, RemoteConfigError> {
        let url = config
            .url
            .clone()
            .ok_or(RemoteConfigError::MissingUrl)?;
        let timeout = config
            .timeout
            .try_into()
            .map_err(|_| RemoteConfigError::InvalidTimeout)?;

        Self::new(url, timeout)
    }
}

#[async_trait]
impl RemoteConfigProvider for HttpRemoteConfigProvider {
    async fn get_all_configurations(&self) -> Result<RemoteConfiguration, RemoteConfigError> {
        tracing::debug!(url = %self.url, "Fetching remote configuration");

        let configuration = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<RemoteConfiguration>()
            .await?;

        Ok(configuration)
    }
}
