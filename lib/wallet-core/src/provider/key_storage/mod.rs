use std::sync::Arc;

use async_trait::async_trait;
use wallet_crypto::SignerError;

use crate::proto::jwt::SignatureProvider;

pub mod internal;

/// Signing capability backed by secure key storage.
///
/// Callers pass an opaque key reference; private key bytes never leave the
/// storage implementation.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait KeyStorage: Send + Sync {
    async fn sign(&self, key_reference: &str, message: &[u8]) -> Result<Vec<u8>, SignerError>;

    /// JOSE `alg` of the signatures produced by [`KeyStorage::sign`].
    fn jose_alg(&self) -> String;
}

/// Binds a key storage to one key reference so it can sign a JWT.
pub struct KeyStorageSignatureProvider {
    storage: Arc<dyn KeyStorage>,
    key_reference: String,
}

impl KeyStorageSignatureProvider {
    pub fn new(storage: Arc<dyn KeyStorage>, key_reference: impl Into<String>) -> Self {
        Self {
            storage,
            key_reference: key_reference.into(),
        }
    }
}

#[async_trait]
impl SignatureProvider for KeyStorageSignatureProvider {
    async fn sign(&self, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        self.storage.sign(&self.key_reference, message).await
    }
}
