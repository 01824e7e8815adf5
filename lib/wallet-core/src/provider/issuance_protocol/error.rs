use thiserror::Error;

use crate::proto::jwt::JwtError;
use crate::provider::key_algorithm::error::KeyConversionError;

#[derive(Debug, Error)]
pub enum OpenID4VCIError {
    #[error("Key conversion error: `{0}`")]
    KeyConversion(#[from] KeyConversionError),
    #[error("Proof construction error: `{0}`")]
    ProofConstruction(#[from] ProofConstructionError),
    #[error("Configuration error: `{0}`")]
    Configuration(#[from] ConfigurationError),
}

#[derive(Debug, Error)]
pub enum ProofConstructionError {
    #[error("Token response carries no c_nonce")]
    MissingNonce,
    #[error("Invalid access token: `{0}`")]
    InvalidAccessToken(JwtError),
    #[error("Signing failed: `{0}`")]
    Signing(JwtError),
    #[error("Could not format proof: `{0}`")]
    Formatting(JwtError),
}

impl From<JwtError> for ProofConstructionError {
    fn from(error: JwtError) -> Self {
        match error {
            JwtError::CouldNotSign(_) | JwtError::EmptySignature => Self::Signing(error),
            JwtError::CouldNotFormat(_) | JwtError::CouldNotExtract(_) => Self::Formatting(error),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Missing required issuer field `{0}`")]
    MissingField(&'static str),
    #[error("Invalid issuer endpoint `{field}`: `{reason}`")]
    InvalidEndpoint { field: &'static str, reason: String },
}
