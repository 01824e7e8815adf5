use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod http;


pub const DOWNLOAD_VC_TIMEOUT_KEY: &str = "openId4VCIDownloadVCTimeout";

pub type RemoteConfiguration = HashMap<String, Value>;

#[derive(Debug, Error)]
pub enum RemoteConfigError {
    #[error("Transport error: `{0}`")]
    Transport(#[from] reqwest::Error),
    #[error("Remote configuration url is not configured")]
    MissingUrl,
    #[error("Invalid remote configuration timeout")]
    InvalidTimeout,
}

/// Backend-published key/value configuration of the wallet.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait RemoteConfigProvider: Send + Sync {
    async fn get_all_configurations(&self) -> Result<RemoteConfiguration, RemoteConfigError>;
}

/// Timeout the calling workflow applies to the credential download.
///
/// A missing, non-numeric or sub-millisecond remote value yields `default`,
/// as does a failed fetch.
pub async fn vc_download_timeout(
    provider: &dyn RemoteConfigProvider,
    default: std::time::Duration,
) -> std::time::Duration {
    let configurations = match provider.get_all_configurations().await {
        Ok(configurations) => configurations,
        Err(error) => {
            tracing::warn!(%error, "Remote configuration unavailable, using default timeout");
            return default;
        }
    };

    configurations
        .get(DOWNLOAD_VC_TIMEOUT_KEY)
        .and_then(parse_timeout_millis)
        .map(std::time::Duration::from_millis)
        .unwrap_or(default)
}

fn parse_timeout_millis(value: &Value) -> Option<u64> {
    let millis = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(string) => string.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    if millis.is_finite() && millis >= 1.0 {
        Some(millis as u64)
    } else {
        None
    }
}
