use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, DurationSeconds, serde_as, skip_serializing_none};
use strum::{Display, EnumString};
use url::Url;

use super::ConfigParsingError;

pub const DEFAULT_PROOF_VALIDITY_SECONDS: i64 = 5 * 60 * 60;
pub const DEFAULT_DOWNLOAD_TIMEOUT_MILLIS: i64 = 30_000;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    #[serde(default)]
    pub app: Custom,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoreConfig {
    pub openid4vci: OpenID4VCIConfig,
    pub remote_config: RemoteConfigConfig,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenID4VCIConfig {
    /// `exp - iat` of every proof of possession.
    #[serde_as(as = "DurationSeconds<i64>")]
    pub proof_validity: time::Duration,
    /// Used when the remote configuration has no usable download timeout.
    #[serde_as(as = "DurationMilliSeconds<i64>")]
    pub download_timeout: time::Duration,
    pub key_format: KeyFormat,
    pub credential_format: String,
    pub credential_context: Vec<String>,
    pub credential_type: String,
}

impl Default for OpenID4VCIConfig {
    fn default() -> Self {
        Self {
            proof_validity: time::Duration::seconds(DEFAULT_PROOF_VALIDITY_SECONDS),
            download_timeout: time::Duration::milliseconds(DEFAULT_DOWNLOAD_TIMEOUT_MILLIS),
            key_format: KeyFormat::default(),
            credential_format: "ldp_vc".to_string(),
            credential_context: vec!["https://www.w3.org/2018/credentials/v1".to_string()],
            credential_type: "MOSIPVerifiableCredential".to_string(),
        }
    }
}

/// PEM flavour of the wallet's public key, selects the JWK converter.
#[derive(
    Debug, Default, Copy, Clone, Display, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum KeyFormat {
    /// `-----BEGIN PUBLIC KEY-----`
    #[default]
    #[serde(rename = "SPKI")]
    #[strum(serialize = "SPKI")]
    Spki,
    /// `-----BEGIN RSA PUBLIC KEY-----`
    #[serde(rename = "PKCS1")]
    #[strum(serialize = "PKCS1")]
    Pkcs1,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteConfigConfig {
    pub url: Option<Url>,
    #[serde_as(as = "DurationSeconds<i64>")]
    pub timeout: time::Duration,
}

impl Default for RemoteConfigConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: time::Duration::seconds(10),
        }
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: Serialize + DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    /// Later inputs override earlier ones, `WALLET_`-prefixed environment
    /// variables (with `__` as the nesting separator) override all of them.
    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("WALLET_").split("__").lowercase(false));
        }

        let core = figment
            .extract::<CoreConfig>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;

        tracing::debug!(key_format = %core.openid4vci.key_format, "Configuration loaded");

        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
