use rstest::rstest;
use serde_json::json;
use similar_asserts::assert_eq;
use time::macros::datetime;

use super::mapper::*;
use crate::model::credential::{CredentialDocument, CredentialSubject, VcMetadata, VerifiableCredential};
use crate::model::issuer::{IssuerDescriptor, IssuerDisplay, IssuerLogo, Protocol};
use crate::provider::issuance_protocol::error::ConfigurationError;

fn display(language: &str, name: &str) -> IssuerDisplay {
    IssuerDisplay {
        name: Some(name.to_string()),
        language: Some(language.to_string()),
        logo: Some(IssuerLogo {
            url: format!("https://issuer.example.com/{language}.png"),
            alt_text: None,
        }),
        ..Default::default()
    }
}

fn issuer() -> IssuerDescriptor {
    IssuerDescriptor {
        credential_issuer: "https://issuer.example.com".to_string(),
        client_id: Some("wallet-client".to_string()),
        scopes_supported: vec!["mosip_identity_vc_ldp".to_string()],
        redirect_uri: Some("io.wallet://oauthredirect".to_string()),
        authorization_endpoint: Some("https://esignet.example.com/authorize".to_string()),
        token_endpoint: Some("https://proxy.example.com/v1/token".to_string()),
        display: vec![display("en", "Issuer"), display("fr", "Émetteur")],
        ..Default::default()
    }
}

fn credential(subject: CredentialSubject) -> VerifiableCredential {
    VerifiableCredential {
        credential: CredentialDocument {
            id: "https://issuer.example.com/credentials/2a4c9e71".to_string(),
            credential_subject: subject,
            other: Default::default(),
        },
        format: Some("ldp_vc".to_string()),
        issuer_logo: None,
    }
}

fn subject(uin: Option<&str>, vid: Option<&str>) -> CredentialSubject {
    CredentialSubject {
        uin: uin.map(ToOwned::to_owned),
        vid: vid.map(ToOwned::to_owned),
        ..Default::default()
    }
}

#[rstest]
#[case::requested("fr", Some("Émetteur"))]
#[case::fallback("de", Some("Issuer"))]
#[case::english("en", Some("Issuer"))]
fn test_display_for_language(#[case] language: &str, #[case] expected: Option<&str>) {
    let issuer = issuer();

    let selected = get_display_object_for_language(&issuer.display, language);

    assert_eq!(expected, selected.and_then(|display| display.name.as_deref()));
}

#[test]
fn test_display_for_language_without_match_or_fallback() {
    let displays = vec![display("fr", "Émetteur")];

    assert_eq!(None, get_display_object_for_language(&displays, "de"));
    assert_eq!(None, get_display_object_for_language(&[], "en"));
}

#[test]
fn test_display_for_language_matches_locale() {
    let displays = vec![IssuerDisplay {
        name: Some("Aussteller".to_string()),
        locale: Some("de".to_string()),
        ..Default::default()
    }];

    assert_eq!(
        Some("Aussteller"),
        get_display_object_for_language(&displays, "de").and_then(|d| d.name.as_deref())
    );
}

#[test]
fn test_get_identifier() {
    let credential = credential(subject(Some("1234567890"), None));

    let identifier = get_identifier(&issuer(), &credential);

    assert_eq!("https://issuer.example.com:OpenId4VCI:2a4c9e71", identifier);
    assert_eq!(identifier, get_identifier(&issuer(), &credential));
}

#[test]
fn test_get_identifier_otp_protocol() {
    let issuer = IssuerDescriptor {
        credential_issuer: "Mosip".to_string(),
        protocol: Protocol::Otp,
        ..Default::default()
    };

    let identifier = get_identifier(&issuer, &credential(subject(None, None)));

    assert_eq!("Mosip:OTP:2a4c9e71", identifier);
}

#[test]
fn test_vc_metadata_round_trip() {
    let credential = credential(subject(Some("1234567890"), Some("9876")));
    let identifier = get_identifier(&issuer(), &credential);

    let metadata = get_vc_metadata(Some(&identifier), Some(&credential));

    assert_eq!(
        VcMetadata {
            request_id: Some("2a4c9e71".to_string()),
            issuer: Some("https://issuer.example.com".to_string()),
            protocol: Some("OpenId4VCI".to_string()),
            id: Some("1234567890".to_string()),
        },
        metadata
    );
}

#[rstest]
#[case::uin(subject(Some("1234"), Some("5678")), Some("1234"))]
#[case::empty_uin(subject(Some(""), Some("5678")), Some("5678"))]
#[case::vid(subject(None, Some("5678")), Some("5678"))]
#[case::none(subject(None, None), None)]
fn test_vc_metadata_subject_id(#[case] subject: CredentialSubject, #[case] expected: Option<&str>) {
    let metadata = get_vc_metadata(Some("Mosip:OTP:req"), Some(&credential(subject)));

    assert_eq!(expected, metadata.id.as_deref());
}

#[test]
fn test_vc_metadata_without_context() {
    assert_eq!(VcMetadata::default(), get_vc_metadata(None, None));
}

#[rstest]
#[case::issuer_only("Mosip", Some("Mosip"), None, None)]
#[case::no_request_id("Mosip:OTP", Some("Mosip"), Some("OTP"), None)]
#[case::empty_request_id("Mosip:OTP:", Some("Mosip"), Some("OTP"), None)]
#[case::empty("", None, None, None)]
fn test_vc_metadata_partial_identifier(
    #[case] identifier: &str,
    #[case] issuer: Option<&str>,
    #[case] protocol: Option<&str>,
    #[case] request_id: Option<&str>,
) {
    let metadata = get_vc_metadata(Some(identifier), None);

    assert_eq!(issuer, metadata.issuer.as_deref());
    assert_eq!(protocol, metadata.protocol.as_deref());
    assert_eq!(request_id, metadata.request_id.as_deref());
    assert_eq!(None, metadata.id);
}

#[test]
fn test_update_credential_information() {
    let generated_on = datetime!(2024-05-01 10:00 UTC);

    let wrapper = update_credential_information(
        &issuer(),
        credential(subject(Some("1234"), None)),
        "fr",
        generated_on,
    );

    assert_eq!("https://issuer.example.com:OpenId4VCI:2a4c9e71", wrapper.identifier);
    assert_eq!(generated_on, wrapper.generated_on);
    assert_eq!(
        Some("https://issuer.example.com/fr.png"),
        wrapper
            .verifiable_credential
            .issuer_logo
            .as_ref()
            .map(|logo| logo.url.as_str())
    );

    let value = serde_json::to_value(&wrapper).unwrap();
    assert_eq!(json!("2024-05-01T10:00:00Z"), value["generatedOn"]);
}

#[test]
fn test_construct_authorization_configuration() {
    let mut issuer = issuer();
    issuer
        .additional_headers
        .insert("x-tenant".to_string(), "wallet".to_string());

    let configuration = construct_authorization_configuration(&issuer).unwrap();

    assert_eq!(
        json!({
            "clientId": "wallet-client",
            "scopes": ["mosip_identity_vc_ldp"],
            "additionalHeaders": { "x-tenant": "wallet" },
            "redirectUrl": "io.wallet://oauthredirect",
            "serviceConfiguration": {
                "authorizationEndpoint": "https://esignet.example.com/authorize",
                "tokenEndpoint": "https://proxy.example.com/v1/token",
            },
        }),
        serde_json::to_value(&configuration).unwrap()
    );
}

#[test]
fn test_construct_authorization_configuration_missing_fields() {
    let mut issuer = issuer();
    issuer.client_id = None;
    assert_eq!(
        Err(ConfigurationError::MissingField("client_id")),
        construct_authorization_configuration(&issuer)
    );

    let mut issuer = self::issuer();
    issuer.token_endpoint = Some(String::new());
    assert_eq!(
        Err(ConfigurationError::MissingField("token_endpoint")),
        construct_authorization_configuration(&issuer)
    );
}

#[test]
fn test_construct_authorization_configuration_invalid_endpoint() {
    let mut issuer = issuer();
    issuer.authorization_endpoint = Some("not a url".to_string());

    assert!(matches!(
        construct_authorization_configuration(&issuer),
        Err(ConfigurationError::InvalidEndpoint {
            field: "authorization_endpoint",
            ..
        })
    ));
}
