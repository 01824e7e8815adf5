use std::sync::Arc;

use secrecy::ExposeSecret;
use time::OffsetDateTime;

use self::mapper::required_field;
use self::model::{
    AccessTokenClaims, CredentialTypeDescriptor, OpenID4VCICredentialRequestDTO,
    OpenID4VCIProofPayload, OpenID4VCITokenResponseDTO,
};
use super::error::{OpenID4VCIError, ProofConstructionError};
use crate::config::core_config::{DEFAULT_DOWNLOAD_TIMEOUT_MILLIS, OpenID4VCIConfig};
use crate::model::issuer::IssuerDescriptor;
use crate::model::key::{KeyPairReference, PublicKeyJwk};
use crate::proto::jwt::model::JWTPayload;
use crate::proto::jwt::{Jwt, decode_unverified_payload};
use crate::provider::key_algorithm::JwkConverter;
use crate::provider::key_algorithm::error::KeyConversionError;
use crate::provider::key_storage::{KeyStorage, KeyStorageSignatureProvider};
use crate::provider::remote_config::{RemoteConfigProvider, vc_download_timeout};

pub mod mapper;
pub mod model;

#[cfg(test)]
mod test_mapper;

pub const PROOF_JWT_TYPE: &str = "openid4vci-proof+jwt";
pub const PROOF_TYPE_JWT: &str = "jwt";
pub const VERIFIABLE_CREDENTIAL_TYPE: &str = "VerifiableCredential";

/// Holder side of the OpenID4VCI credential request.
pub struct OpenID4VCIHolder {
    config: OpenID4VCIConfig,
    jwk_converter: Arc<dyn JwkConverter>,
    key_storage: Arc<dyn KeyStorage>,
}

impl OpenID4VCIHolder {
    pub fn new(
        config: OpenID4VCIConfig,
        jwk_converter: Arc<dyn JwkConverter>,
        key_storage: Arc<dyn KeyStorage>,
    ) -> Self {
        Self {
            config,
            jwk_converter,
            key_storage,
        }
    }

    pub fn get_jwk(&self, public_key_pem: &str) -> Result<PublicKeyJwk, KeyConversionError> {
        self.jwk_converter.to_jwk(public_key_pem)
    }

    pub fn credential_type(&self) -> CredentialTypeDescriptor {
        CredentialTypeDescriptor {
            format: self.config.credential_format.clone(),
            context: self.config.credential_context.clone(),
            r#type: vec![
                VERIFIABLE_CREDENTIAL_TYPE.to_string(),
                self.config.credential_type.clone(),
            ],
        }
    }

    /// Proof of possession of `key`, bound to the `c_nonce` of `token_response`.
    pub async fn build_proof(
        &self,
        key: &KeyPairReference,
        token_response: &OpenID4VCITokenResponseDTO,
        issuer: &IssuerDescriptor,
    ) -> Result<String, OpenID4VCIError> {
        self.build_proof_at(key, token_response, issuer, OffsetDateTime::now_utc())
            .await
    }

    pub async fn build_proof_at(
        &self,
        key: &KeyPairReference,
        token_response: &OpenID4VCITokenResponseDTO,
        issuer: &IssuerDescriptor,
        now: OffsetDateTime,
    ) -> Result<String, OpenID4VCIError> {
        let client_id = required_field(issuer.client_id.as_deref(), "client_id")?;
        let audience = required_field(issuer.credential_audience.as_deref(), "credential_audience")?;

        let signature_provider =
            KeyStorageSignatureProvider::new(self.key_storage.clone(), &key.key_reference);
        let algorithm = self.key_storage.jose_alg();

        let jwk = self
            .get_jwk(&key.public_key_pem)?
            .with_signature_use(&algorithm);
        let nonce = resolve_nonce(token_response)?;

        let payload = JWTPayload {
            issuer: Some(client_id),
            custom: OpenID4VCIProofPayload { nonce },
            audience: Some(audience),
            issued_at: Some(now),
            expires_at: Some(now + self.config.proof_validity),
        };

        let jwt = Jwt::new(PROOF_JWT_TYPE.to_string(), algorithm, Some(jwk), payload);
        let proof = jwt
            .tokenize(&signature_provider)
            .await
            .map_err(ProofConstructionError::from)?;

        tracing::debug!(
            credential_issuer = %issuer.credential_issuer,
            "Built OpenID4VCI proof of possession"
        );

        Ok(proof)
    }

    /// Body POSTed to the issuer's credential endpoint.
    pub async fn credential_request_body(
        &self,
        key: &KeyPairReference,
        token_response: &OpenID4VCITokenResponseDTO,
        issuer: &IssuerDescriptor,
    ) -> Result<OpenID4VCICredentialRequestDTO, OpenID4VCIError> {
        let proof = self.build_proof(key, token_response, issuer).await?;

        Ok(mapper::credential_request_body(
            proof,
            &self.credential_type(),
        ))
    }

    pub async fn download_timeout(
        &self,
        remote_config: &dyn RemoteConfigProvider,
    ) -> std::time::Duration {
        let default = std::time::Duration::try_from(self.config.download_timeout).unwrap_or(
            std::time::Duration::from_millis(DEFAULT_DOWNLOAD_TIMEOUT_MILLIS as u64),
        );

        vc_download_timeout(remote_config, default).await
    }
}

/// `c_nonce` claim of the access token, else the `c_nonce` of the token
/// response itself.
fn resolve_nonce(
    token_response: &OpenID4VCITokenResponseDTO,
) -> Result<String, ProofConstructionError> {
    let from_response = token_response
        .c_nonce
        .clone()
        .filter(|nonce| !nonce.is_empty());

    let claims = match decode_unverified_payload::<AccessTokenClaims>(
        token_response.access_token.expose_secret(),
    ) {
        Ok(claims) => claims,
        Err(error) if from_response.is_none() => {
            return Err(ProofConstructionError::InvalidAccessToken(error));
        }
        Err(_) => AccessTokenClaims::default(),
    };

    claims
        .c_nonce
        .filter(|nonce| !nonce.is_empty())
        .or(from_response)
        .ok_or(ProofConstructionError::MissingNonce)
}
