use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use time::OffsetDateTime;

use crate::model::key::PublicKeyJwk;

#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JWTHeader {
    #[serde(rename = "alg")]
    pub algorithm: String,
    pub jwk: Option<PublicKeyJwk>,
    #[serde(rename = "typ")]
    pub signature_type: Option<String>,
    #[serde(rename = "kid")]
    pub key_id: Option<String>,
}

/// Registered claims in the order they are written; `custom` is flattened
/// right after `iss`.
#[skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JWTPayload<CustomPayload> {
    #[serde(rename = "iss")]
    pub issuer: Option<String>,

    #[serde(flatten)]
    pub custom: CustomPayload,

    #[serde(rename = "aud")]
    pub audience: Option<String>,

    #[serde(rename = "iat", default, with = "time::serde::timestamp::option")]
    pub issued_at: Option<OffsetDateTime>,

    #[serde(rename = "exp", default, with = "time::serde::timestamp::option")]
    pub expires_at: Option<OffsetDateTime>,
}
