use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::{AsRefStr, Display, EnumString};

pub const FALLBACK_LANGUAGE: &str = "en";

#[derive(
    Debug, Default, Copy, Clone, Display, AsRefStr, EnumString, PartialEq, Eq, Serialize, Deserialize,
)]
pub enum Protocol {
    #[default]
    #[serde(rename = "OpenId4VCI")]
    #[strum(serialize = "OpenId4VCI")]
    OpenId4VCI,
    #[serde(rename = "OTP")]
    #[strum(serialize = "OTP")]
    Otp,
}

/// Issuer entry as published in the wallet's issuer registry.
#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerDescriptor {
    pub credential_issuer: String,
    #[serde(default)]
    pub protocol: Protocol,
    pub client_id: Option<String>,
    #[serde(default)]
    pub scopes_supported: Vec<String>,
    #[serde(default)]
    pub additional_headers: IndexMap<String, String>,
    #[serde(rename = ".well-known")]
    pub well_known: Option<String>,
    pub redirect_uri: Option<String>,
    pub authorization_endpoint: Option<String>,
    pub token_endpoint: Option<String>,
    pub credential_endpoint: Option<String>,
    pub credential_audience: Option<String>,
    #[serde(default)]
    pub display: Vec<IssuerDisplay>,
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerDisplay {
    pub name: Option<String>,
    pub language: Option<String>,
    pub locale: Option<String>,
    pub logo: Option<IssuerLogo>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl IssuerDisplay {
    /// Registry entries carry either `language` or the OpenID4VCI `locale`.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().or(self.locale.as_deref())
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerLogo {
    pub url: String,
    pub alt_text: Option<String>,
}
