use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyConversionError {
    #[error("Malformed PEM public key: `{0}`")]
    MalformedPem(String),
    #[error("Could not encode JWK: `{0}`")]
    EncodingJwk(String),
}
