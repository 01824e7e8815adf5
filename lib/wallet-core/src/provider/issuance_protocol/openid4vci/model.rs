use indexmap::IndexMap;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Debug, Deserialize)]
pub struct OpenID4VCITokenResponseDTO {
    #[serde(alias = "accessToken")]
    pub access_token: SecretString,
    #[serde(default, alias = "tokenType")]
    pub token_type: Option<String>,
    #[serde(default, alias = "expiresIn")]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub c_nonce: Option<String>,
}

/// Claims of the access token the holder relies on.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AccessTokenClaims {
    #[serde(default)]
    pub c_nonce: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenID4VCIProofPayload {
    pub nonce: String,
}

/// Format, `@context` and `type` of the requested credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CredentialTypeDescriptor {
    pub format: String,
    pub context: Vec<String>,
    pub r#type: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenID4VCICredentialDefinitionRequestDTO {
    #[serde(rename = "@context")]
    pub context: Vec<String>,
    pub r#type: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenID4VCICredentialRequestDTO {
    pub format: String,
    pub credential_definition: OpenID4VCICredentialDefinitionRequestDTO,
    pub proof: OpenID4VCIProofRequestDTO,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenID4VCIProofRequestDTO {
    pub proof_type: String,
    pub jwt: String,
}

/// Input of the external OAuth/OIDC authorization library.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationConfigurationDTO {
    pub client_id: String,
    pub scopes: Vec<String>,
    pub additional_headers: IndexMap<String, String>,
    pub well_known_endpoint: Option<String>,
    pub redirect_url: Option<String>,
    pub service_configuration: ServiceConfigurationDTO,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceConfigurationDTO {
    pub authorization_endpoint: String,
    pub token_endpoint: String,
}
