use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wallet_crypto::SignerError;

use self::mapper::{b64url_to_bin, bin_to_b64url_string, string_to_b64url_string};
use self::model::{JWTHeader, JWTPayload};
use crate::model::key::PublicKeyJwk;

pub mod mapper;
pub mod model;


#[derive(Debug, Error)]
pub enum JwtError {
    #[error("Could not format: `{0}`")]
    CouldNotFormat(String),
    #[error("Could not sign: `{0}`")]
    CouldNotSign(SignerError),
    #[error("Could not extract: `{0}`")]
    CouldNotExtract(String),
    #[error("Empty signature")]
    EmptySignature,
}

/// Signs the `header.payload` input of a compact JWS.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SignatureProvider: Send + Sync {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError>;
}

#[derive(Debug)]
pub struct Jwt<Payload> {
    pub header: JWTHeader,
    pub payload: JWTPayload<Payload>,
}

impl<Payload: Serialize + Send + Sync> Jwt<Payload> {
    pub fn new(
        signature_type: String,
        algorithm: String,
        jwk: Option<PublicKeyJwk>,
        payload: JWTPayload<Payload>,
    ) -> Jwt<Payload> {
        let header = JWTHeader {
            algorithm,
            jwk,
            signature_type: Some(signature_type),
            key_id: None,
        };

        Jwt { header, payload }
    }

    /// Produces `header.payload.signature`. A signer that yields no bytes is an
    /// error: an unsigned token is never returned.
    pub async fn tokenize(&self, auth_fn: &dyn SignatureProvider) -> Result<String, JwtError> {
        let jwt_header_json = serde_json::to_string(&self.header)
            .map_err(|e| JwtError::CouldNotFormat(e.to_string()))?;
        let payload_json = serde_json::to_string(&self.payload)
            .map_err(|e| JwtError::CouldNotFormat(e.to_string()))?;
        let mut token = format!(
            "{}.{}",
            string_to_b64url_string(&jwt_header_json)?,
            string_to_b64url_string(&payload_json)?,
        );

        let signature = auth_fn
            .sign(token.as_bytes())
            .await
            .map_err(JwtError::CouldNotSign)?;

        if signature.is_empty() {
            return Err(JwtError::EmptySignature);
        }

        token.push('.');
        token.push_str(&bin_to_b64url_string(&signature)?);

        Ok(token)
    }
}

/// Reads the claims of a JWT without checking its signature.
///
/// Only for tokens this wallet consumes but does not verify, such as the
/// access token whose claims carry `c_nonce`.
pub fn decode_unverified_payload<T: DeserializeOwned>(token: &str) -> Result<T, JwtError> {
    let token = token.trim_matches(|c: char| c == '.' || c.is_whitespace());
    let mut jwt_parts = token.splitn(3, '.');

    let (Some(_header), Some(payload)) = (jwt_parts.next(), jwt_parts.next()) else {
        return Err(JwtError::CouldNotExtract("Missing token part".to_owned()));
    };

    let payload_decoded = b64url_to_bin(payload)?;

    serde_json::from_slice(&payload_decoded).map_err(|e| JwtError::CouldNotExtract(e.to_string()))
}
