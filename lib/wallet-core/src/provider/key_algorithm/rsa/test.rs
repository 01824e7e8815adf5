use rstest::rstest;
use similar_asserts::assert_eq;

use super::*;
use crate::model::key::JwkUse;

const PUBLIC_KEY_SPKI: &str = include_str!("../../../../../../test-data/keys/rsa_public_spki.pem");
const PUBLIC_KEY_PKCS1: &str =
    include_str!("../../../../../../test-data/keys/rsa_public_pkcs1.pem");
const EC_PUBLIC_KEY_SPKI: &str =
    include_str!("../../../../../../test-data/keys/ec_public_spki.pem");

const EXPECTED_N: &str = "jZPx73ZAMjx_GgpTdMvOAq53h6WzjioFwLAI6CR4liX1mt-ahZH9PhgdWIz6X_wAElkAoU22P8ckkTUd_6HZbUXGbsV5Q-RJt6CCe7WHGpkhsE7FS4NrGGmnr2EcLQKllbC4FS5NaZF0XnefEX_rjHPUA9fT5IGkiVXDH1WAm_bREAV3JX93CFGhk02CGF-XhdlORjrfy5v54ZdbHIhITmEsgsA_zmRnnad9BQpXkaK5PZnqMGa045izdb2_ICcXCLDIBDWQCmAF_ewWBPqhWErlpQpNhKaeplhfCaQy5l2WZWv-86Pl1i3Uxldrvbf-RSRkXQnO6CBMt5y1cIFgdw";

#[rstest]
#[case::spki(&SpkiPemConverter as &dyn JwkConverter, PUBLIC_KEY_SPKI)]
#[case::pkcs1(&Pkcs1PemConverter as &dyn JwkConverter, PUBLIC_KEY_PKCS1)]
fn test_to_jwk(#[case] converter: &dyn JwkConverter, #[case] pem: &str) {
    let jwk = converter.to_jwk(pem).unwrap();

    assert_eq!(
        PublicKeyJwk {
            kty: "RSA".to_string(),
            n: EXPECTED_N.to_string(),
            e: "AQAB".to_string(),
            alg: Some("RS256".to_string()),
            r#use: Some(JwkUse::Signature),
            kid: None,
        },
        jwk
    );
}

#[test]
fn test_to_jwk_serializes_signature_use() {
    let jwk = SpkiPemConverter.to_jwk(PUBLIC_KEY_SPKI).unwrap();

    let value = serde_json::to_value(&jwk).unwrap();

    assert_eq!("RS256", value["alg"]);
    assert_eq!("sig", value["use"]);
    assert_eq!("RSA", value["kty"]);
    assert!(value.get("kid").is_none());
}

#[test]
fn test_to_jwk_ignores_surrounding_whitespace() {
    let pem = format!("\n  {PUBLIC_KEY_SPKI}\n\n");

    assert!(SpkiPemConverter.to_jwk(&pem).is_ok());
}

#[rstest]
#[case::garbage("not a pem")]
#[case::empty("")]
#[case::truncated("-----BEGIN PUBLIC KEY-----\nMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA\n-----END PUBLIC KEY-----")]
#[case::wrong_label(PUBLIC_KEY_PKCS1)]
#[case::not_rsa(EC_PUBLIC_KEY_SPKI)]
fn test_spki_to_jwk_rejects_malformed_input(#[case] pem: &str) {
    let result = SpkiPemConverter.to_jwk(pem);

    assert!(matches!(result, Err(KeyConversionError::MalformedPem(_))));
}

#[test]
fn test_pkcs1_to_jwk_rejects_spki_document() {
    let result = Pkcs1PemConverter.to_jwk(PUBLIC_KEY_SPKI);

    assert!(matches!(result, Err(KeyConversionError::MalformedPem(_))));
}

#[test]
fn test_converter_selection_by_key_format() {
    use crate::config::core_config::KeyFormat;
    use crate::provider::key_algorithm::provider::jwk_converter_for;

    assert!(jwk_converter_for(KeyFormat::Spki).to_jwk(PUBLIC_KEY_SPKI).is_ok());
    assert!(jwk_converter_for(KeyFormat::Pkcs1).to_jwk(PUBLIC_KEY_PKCS1).is_ok());
    assert!(jwk_converter_for(KeyFormat::Pkcs1).to_jwk(PUBLIC_KEY_SPKI).is_err());
}
