use crate::model::key::PublicKeyJwk;

pub mod error;
pub mod provider;
pub mod rsa;

use error::KeyConversionError;

/// Normalizes a PEM public key into its JWK representation.
///
/// One implementation per PEM flavour; the holder receives the one matching
/// the platform's key export format instead of branching on the platform.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait JwkConverter: Send + Sync {
    fn to_jwk(&self, public_key_pem: &str) -> Result<PublicKeyJwk, KeyConversionError>;
}
