use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use time::OffsetDateTime;
use wallet_core::config::core_config::CoreConfig;
use wallet_core::error::ErrorMessageMixin;
use wallet_core::model::credential::VerifiableCredential;
use wallet_core::model::issuer::IssuerDescriptor;
use wallet_core::model::key::KeyPairReference;
use wallet_core::provider::issuance_protocol::error::OpenID4VCIError;
use wallet_core::provider::issuance_protocol::openid4vci::OpenID4VCIHolder;
use wallet_core::provider::issuance_protocol::openid4vci::mapper::{
    construct_authorization_configuration, get_vc_metadata, update_credential_information,
};
use wallet_core::provider::issuance_protocol::openid4vci::model::OpenID4VCITokenResponseDTO;
use wallet_core::provider::key_algorithm::JwkConverter;
use wallet_core::provider::key_algorithm::provider::jwk_converter_for;
use wallet_core::provider::key_storage::internal::InternalKeyStorage;
use wallet_core::provider::remote_config::http::HttpRemoteConfigProvider;
use wallet_core::provider::remote_config::vc_download_timeout;


const KEY_REFERENCE: &str = "cli-key";

/// Files the OpenID4VCI proof is built from.
pub struct ProofInput<'a> {
    pub public_key: &'a Path,
    pub private_key: &'a Path,
    pub token_response: &'a Path,
    pub issuer: &'a Path,
}

fn read_string(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read `{}`", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    serde_json::from_str(&read_string(path)?)
        .with_context(|| format!("Failed to parse `{}`", path.display()))
}

struct ProofContext {
    holder: OpenID4VCIHolder,
    key: KeyPairReference,
    token_response: OpenID4VCITokenResponseDTO,
    issuer: IssuerDescriptor,
}

impl ProofContext {
    fn load(config: &CoreConfig, input: &ProofInput<'_>) -> anyhow::Result<Self> {
        let key_storage = InternalKeyStorage::rs256().with_key(
            KEY_REFERENCE,
            SecretString::from(read_string(input.private_key)?),
        );

        Ok(Self {
            holder: OpenID4VCIHolder::new(
                config.openid4vci.clone(),
                jwk_converter_for(config.openid4vci.key_format),
                Arc::new(key_storage),
            ),
            key: KeyPairReference {
                key_reference: KEY_REFERENCE.to_string(),
                public_key_pem: read_string(input.public_key)?,
            },
            token_response: read_json(input.token_response)?,
            issuer: read_json(input.issuer)?,
        })
    }
}

fn log_failure(error: &OpenID4VCIError) {
    tracing::error!(%error, message = %error.error_message(), "Proof construction failed");
}

pub fn jwk(config: &CoreConfig, public_key: &Path) -> anyhow::Result<Value> {
    let jwk = jwk_converter_for(config.openid4vci.key_format).to_jwk(&read_string(public_key)?)?;

    Ok(serde_json::to_value(jwk)?)
}

pub async fn proof(config: &CoreConfig, input: &ProofInput<'_>) -> anyhow::Result<String> {
    let context = ProofContext::load(config, input)?;

    let proof = context
        .holder
        .build_proof(&context.key, &context.token_response, &context.issuer)
        .await
        .inspect_err(log_failure)?;

    Ok(proof)
}

pub async fn request_body(config: &CoreConfig, input: &ProofInput<'_>) -> anyhow::Result<Value> {
    let context = ProofContext::load(config, input)?;

    let body = context
        .holder
        .credential_request_body(&context.key, &context.token_response, &context.issuer)
        .await
        .inspect_err(log_failure)?;

    Ok(serde_json::to_value(body)?)
}

pub fn authorization_config(issuer: &Path) -> anyhow::Result<Value> {
    let issuer: IssuerDescriptor = read_json(issuer)?;

    Ok(serde_json::to_value(construct_authorization_configuration(
        &issuer,
    )?)?)
}

/// Stored form of a downloaded credential plus the metadata read back from it.
pub fn credential_info(issuer: &Path, credential: &Path, language: &str) -> anyhow::Result<Value> {
    let issuer: IssuerDescriptor = read_json(issuer)?;
    let credential: VerifiableCredential = read_json(credential)?;

    let wrapper =
        update_credential_information(&issuer, credential, language, OffsetDateTime::now_utc());
    let metadata = get_vc_metadata(
        Some(&wrapper.identifier),
        Some(&wrapper.verifiable_credential),
    );

    Ok(json!({
        "credential": wrapper,
        "metadata": metadata,
    }))
}

pub async fn download_timeout(config: &CoreConfig) -> anyhow::Result<std::time::Duration> {
    let default = std::time::Duration::try_from(config.openid4vci.download_timeout)
        .context("Invalid download timeout")?;

    let provider = match HttpRemoteConfigProvider::from_config(&config.remote_config) {
        Ok(provider) => provider,
        Err(error) => {
            tracing::warn!(%error, message = %error.error_message(), "Remote configuration disabled");
            return Ok(default);
        }
    };

    Ok(vc_download_timeout(&provider, default).await)
}
