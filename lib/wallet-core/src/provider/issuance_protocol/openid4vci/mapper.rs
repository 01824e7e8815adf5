use time::OffsetDateTime;
use url::Url;

use super::PROOF_TYPE_JWT;
use super::model::{
    AuthorizationConfigurationDTO, CredentialTypeDescriptor,
    OpenID4VCICredentialDefinitionRequestDTO, OpenID4VCICredentialRequestDTO,
    OpenID4VCIProofRequestDTO, ServiceConfigurationDTO,
};
use crate::model::credential::{CredentialWrapper, VcMetadata, VerifiableCredential};
use crate::model::issuer::{FALLBACK_LANGUAGE, IssuerDescriptor, IssuerDisplay};
use crate::provider::issuance_protocol::error::ConfigurationError;

/// `issuer:protocol:requestId`, where `requestId` is the last path segment of
/// the credential id.
pub fn get_identifier(issuer: &IssuerDescriptor, credential: &VerifiableCredential) -> String {
    format!(
        "{}:{}:{}",
        issuer.credential_issuer,
        issuer.protocol,
        credential.credential.request_id()
    )
}

/// Splits an identifier built by [`get_identifier`] back into its parts.
///
/// The issuer may itself contain `:` (it is usually a URL), so protocol and
/// request id are taken from the right. Missing parts stay `None`.
pub fn get_vc_metadata(
    identifier: Option<&str>,
    credential: Option<&VerifiableCredential>,
) -> VcMetadata {
    let (issuer, protocol, request_id) = match identifier {
        Some(identifier) => split_identifier(identifier),
        None => (None, None, None),
    };

    VcMetadata {
        request_id,
        issuer,
        protocol,
        id: credential
            .and_then(|credential| credential.credential.credential_subject.subject_id())
            .map(ToOwned::to_owned),
    }
}

fn split_identifier(identifier: &str) -> (Option<String>, Option<String>, Option<String>) {
    let parts: Vec<&str> = identifier.split(':').collect();

    let non_empty = |part: &str| Some(part.to_owned()).filter(|part| !part.is_empty());

    match parts.as_slice() {
        [] => (None, None, None),
        [issuer] => (non_empty(issuer), None, None),
        [issuer, protocol] => (non_empty(issuer), non_empty(protocol), None),
        [issuer @ .., protocol, request_id] => (
            non_empty(&issuer.join(":")),
            non_empty(protocol),
            non_empty(request_id),
        ),
    }
}

/// Display entry for `language`, else the English one.
pub fn get_display_object_for_language<'a>(
    display: &'a [IssuerDisplay],
    language: &str,
) -> Option<&'a IssuerDisplay> {
    display
        .iter()
        .find(|entry| entry.language() == Some(language))
        .or_else(|| {
            display
                .iter()
                .find(|entry| entry.language() == Some(FALLBACK_LANGUAGE))
        })
}

pub fn update_credential_information(
    issuer: &IssuerDescriptor,
    mut credential: VerifiableCredential,
    language: &str,
    generated_on: OffsetDateTime,
) -> CredentialWrapper {
    let identifier = get_identifier(issuer, &credential);

    credential.issuer_logo = get_display_object_for_language(&issuer.display, language)
        .and_then(|display| display.logo.clone());

    CredentialWrapper {
        verifiable_credential: credential,
        identifier,
        generated_on,
    }
}

pub fn construct_authorization_configuration(
    issuer: &IssuerDescriptor,
) -> Result<AuthorizationConfigurationDTO, ConfigurationError> {
    let client_id = required_field(issuer.client_id.as_deref(), "client_id")?;
    let authorization_endpoint = required_endpoint(
        issuer.authorization_endpoint.as_deref(),
        "authorization_endpoint",
    )?;
    let token_endpoint = required_endpoint(issuer.token_endpoint.as_deref(), "token_endpoint")?;

    Ok(AuthorizationConfigurationDTO {
        client_id,
        scopes: issuer.scopes_supported.clone(),
        additional_headers: issuer.additional_headers.clone(),
        well_known_endpoint: issuer.well_known.clone(),
        redirect_url: issuer.redirect_uri.clone(),
        service_configuration: ServiceConfigurationDTO {
            authorization_endpoint,
            token_endpoint,
        },
    })
}

pub(super) fn required_field(
    value: Option<&str>,
    field: &'static str,
) -> Result<String, ConfigurationError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .ok_or(ConfigurationError::MissingField(field))
}

fn required_endpoint(
    value: Option<&str>,
    field: &'static str,
) -> Result<String, ConfigurationError> {
    let endpoint = required_field(value, field)?;

    Url::parse(&endpoint).map_err(|e| ConfigurationError::InvalidEndpoint {
        field,
        reason: e.to_string(),
    })?;

    Ok(endpoint)
}

pub fn credential_request_body(
    proof_jwt: String,
    credential_type: &CredentialTypeDescriptor,
) -> OpenID4VCICredentialRequestDTO {
    OpenID4VCICredentialRequestDTO {
        format: credential_type.format.clone(),
        credential_definition: OpenID4VCICredentialDefinitionRequestDTO {
            context: credential_type.context.clone(),
            r#type: credential_type.r#type.clone(),
        },
        proof: OpenID4VCIProofRequestDTO {
            proof_type: PROOF_TYPE_JWT.to_string(),
            jwt: proof_jwt,
        },
    }
}
