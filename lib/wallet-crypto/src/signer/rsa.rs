use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::signature::{SignatureEncoding, Signer as _, Verifier as _};
use rsa::{RsaPrivateKey, RsaPublicKey};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::{Signer, SignerError};


/// RSASSA-PKCS1-v1_5 with SHA-256 (JOSE `RS256`).
pub struct RS256Signer {}

impl RS256Signer {
    pub const JOSE_ALG: &'static str = "RS256";

    /// Accepts `PRIVATE KEY` (PKCS#8) and `RSA PRIVATE KEY` (PKCS#1) documents.
    pub fn parse_private_key(private_key_pem: &SecretString) -> Result<RsaPrivateKey, SignerError> {
        let pem = private_key_pem.expose_secret().trim();

        RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
            .map_err(|_| SignerError::CouldNotExtractKeyPair)
    }

    /// Accepts `PUBLIC KEY` (SPKI) and `RSA PUBLIC KEY` (PKCS#1) documents.
    pub fn parse_public_key(public_key_pem: &str) -> Result<RsaPublicKey, SignerError> {
        let pem = public_key_pem.trim();

        RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))
            .map_err(|e| SignerError::CouldNotExtractPublicKey(e.to_string()))
    }
}

impl Signer for RS256Signer {
    fn sign(&self, input: &[u8], private_key_pem: &SecretString) -> Result<Vec<u8>, SignerError> {
        let private_key = Self::parse_private_key(private_key_pem)?;
        let signing_key = SigningKey::<Sha256>::new(private_key);

        let signature = signing_key
            .try_sign(input)
            .map_err(|e| SignerError::CouldNotSign(e.to_string()))?;

        Ok(signature.to_vec())
    }

    fn verify(
        &self,
        input: &[u8],
        signature: &[u8],
        public_key_pem: &str,
    ) -> Result<(), SignerError> {
        let public_key = Self::parse_public_key(public_key_pem)?;
        let verifying_key = VerifyingKey::<Sha256>::new(public_key);

        let signature = Signature::try_from(signature).map_err(|_| SignerError::InvalidSignature)?;

        verifying_key
            .verify(input, &signature)
            .map_err(|e| SignerError::CouldNotVerify(e.to_string()))
    }
}
