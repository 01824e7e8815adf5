use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use super::issuer::IssuerLogo;

/// Credential as returned by the issuer's credential endpoint.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiableCredential {
    pub credential: CredentialDocument,
    pub format: Option<String>,
    pub issuer_logo: Option<IssuerLogo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CredentialDocument {
    pub id: String,
    #[serde(rename = "credentialSubject", default)]
    pub credential_subject: CredentialSubject,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl CredentialDocument {
    /// Server-assigned request id: the last path segment of the credential id.
    pub fn request_id(&self) -> &str {
        self.id.rsplit('/').next().unwrap_or(&self.id)
    }
}

#[skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CredentialSubject {
    #[serde(rename = "UIN")]
    pub uin: Option<String>,
    #[serde(rename = "VID")]
    pub vid: Option<String>,
    #[serde(flatten)]
    pub claims: Map<String, Value>,
}

impl CredentialSubject {
    pub fn subject_id(&self) -> Option<&str> {
        self.uin
            .as_deref()
            .filter(|uin| !uin.is_empty())
            .or(self.vid.as_deref())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialWrapper {
    pub verifiable_credential: VerifiableCredential,
    /// `issuer:protocol:requestId`
    pub identifier: String,
    #[serde(with = "time::serde::rfc3339")]
    pub generated_on: OffsetDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VcMetadata {
    pub request_id: Option<String>,
    pub issuer: Option<String>,
    pub protocol: Option<String>,
    pub id: Option<String>,
}
