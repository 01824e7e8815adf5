use ct_codecs::{Base64UrlSafeNoPadding, Encoder};
use rsa::RsaPublicKey;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;

use super::JwkConverter;
use super::error::KeyConversionError;
use crate::model::key::PublicKeyJwk;

#[cfg(test)]
mod test;

pub const RS256: &str = "RS256";

/// `-----BEGIN PUBLIC KEY-----` (X.509 SubjectPublicKeyInfo)
pub struct SpkiPemConverter;

/// `-----BEGIN RSA PUBLIC KEY-----` (PKCS#1 RSAPublicKey)
pub struct Pkcs1PemConverter;

impl JwkConverter for SpkiPemConverter {
    fn to_jwk(&self, public_key_pem: &str) -> Result<PublicKeyJwk, KeyConversionError> {
        let key = RsaPublicKey::from_public_key_pem(public_key_pem.trim())
            .map_err(|e| malformed(e.to_string()))?;

        rsa_public_key_to_jwk(&key)
    }
}

impl JwkConverter for Pkcs1PemConverter {
    fn to_jwk(&self, public_key_pem: &str) -> Result<PublicKeyJwk, KeyConversionError> {
        let key = RsaPublicKey::from_pkcs1_pem(public_key_pem.trim())
            .map_err(|e| malformed(e.to_string()))?;

        rsa_public_key_to_jwk(&key)
    }
}

fn malformed(reason: String) -> KeyConversionError {
    // the key itself is never logged
    tracing::warn!(%reason, "Failed to construct JWK from PEM");
    KeyConversionError::MalformedPem(reason)
}

fn rsa_public_key_to_jwk(key: &RsaPublicKey) -> Result<PublicKeyJwk, KeyConversionError> {
    let n = Base64UrlSafeNoPadding::encode_to_string(key.n().to_bytes_be())
        .map_err(|e| KeyConversionError::EncodingJwk(e.to_string()))?;
    let e = Base64UrlSafeNoPadding::encode_to_string(key.e().to_bytes_be())
        .map_err(|e| KeyConversionError::EncodingJwk(e.to_string()))?;

    Ok(PublicKeyJwk::rsa(n, e).with_signature_use(RS256))
}
