use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub const KEY_TYPE_RSA: &str = "RSA";

/// Key pair held by the wallet.
///
/// Only the public half is visible here; the private half stays in key storage
/// and is reached through `key_reference`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPairReference {
    pub key_reference: String,
    pub public_key_pem: String,
}

/// RSA public key in JWK form.
/// see: <https://datatracker.ietf.org/doc/html/rfc7518#section-6.3.1>
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKeyJwk {
    pub kty: String,
    pub n: String,
    pub e: String,
    pub alg: Option<String>,
    pub r#use: Option<JwkUse>,
    pub kid: Option<String>,
}

impl PublicKeyJwk {
    pub fn rsa(n: String, e: String) -> Self {
        Self {
            kty: KEY_TYPE_RSA.to_string(),
            n,
            e,
            alg: None,
            r#use: None,
            kid: None,
        }
    }

    pub fn with_signature_use(mut self, alg: &str) -> Self {
        self.alg = Some(alg.to_string());
        self.r#use = Some(JwkUse::Signature);
        self
    }
}

/// see: <https://datatracker.ietf.org/doc/html/rfc7517#section-4.2>
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum JwkUse {
    #[serde(rename = "sig")]
    Signature,
    #[serde(rename = "enc")]
    Encryption,
    #[serde(untagged)]
    Unknown(String),
}
