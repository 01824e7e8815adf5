use secrecy::SecretString;
use thiserror::Error;

pub mod signer;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum SignerError {
    #[error("Could not sign: `{0}`")]
    CouldNotSign(String),
    #[error("Could not extract keypair")]
    CouldNotExtractKeyPair,
    #[error("Could not extract public key: `{0}`")]
    CouldNotExtractPublicKey(String),
    #[error("Could not verify: `{0}`")]
    CouldNotVerify(String),
    #[error("Invalid signature")]
    InvalidSignature,
    #[error("Missing key")]
    MissingKey,
}

/// Signature algorithm operating on PEM-encoded key material.
///
/// Private keys only ever cross this boundary wrapped in [`SecretString`].
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Signer: Send + Sync {
    fn sign(&self, input: &[u8], private_key_pem: &SecretString) -> Result<Vec<u8>, SignerError>;
    fn verify(
        &self,
        input: &[u8],
        signature: &[u8],
        public_key_pem: &str,
    ) -> Result<(), SignerError>;
}
