use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use wallet_crypto::signer::rsa::RS256Signer;
use wallet_crypto::{Signer, SignerError};

use super::KeyStorage;


/// In-memory key storage for RSA private keys supplied by the caller.
///
/// There is no default key: signing with a reference that was never inserted
/// fails with [`SignerError::MissingKey`].
pub struct InternalKeyStorage {
    signer: Arc<dyn Signer>,
    keys: HashMap<String, SecretString>,
}

impl InternalKeyStorage {
    pub fn new(signer: Arc<dyn Signer>) -> Self {
        Self {
            signer,
            keys: HashMap::new(),
        }
    }

    pub fn rs256() -> Self {
        Self::new(Arc::new(RS256Signer {}))
    }

    pub fn insert_key(&mut self, key_reference: impl Into<String>, private_key_pem: SecretString) {
        self.keys.insert(key_reference.into(), private_key_pem);
    }

    pub fn with_key(
        mut self,
        key_reference: impl Into<String>,
        private_key_pem: SecretString,
    ) -> Self {
        self.insert_key(key_reference, private_key_pem);
        self
    }
}

#[async_trait]
impl KeyStorage for InternalKeyStorage {
    async fn sign(&self, key_reference: &str, message: &[u8]) -> Result<Vec<u8>, SignerError> {
        let private_key = self.keys.get(key_reference).ok_or_else(|| {
            tracing::warn!(%key_reference, "Signing key not found in key storage");
            SignerError::MissingKey
        })?;

        self.signer.sign(message, private_key)
    }

    fn jose_alg(&self) -> String {
        RS256Signer::JOSE_ALG.to_string()
    }
}
