use ct_codecs::{Base64UrlSafeNoPadding, Decoder, Encoder};

use super::JwtError;

pub fn bin_to_b64url_string(bin: &[u8]) -> Result<String, JwtError> {
    Base64UrlSafeNoPadding::encode_to_string(bin).map_err(|e| JwtError::CouldNotFormat(e.to_string()))
}

pub fn string_to_b64url_string(string: &str) -> Result<String, JwtError> {
    bin_to_b64url_string(string.as_bytes())
}

pub fn b64url_to_bin(encoded: &str) -> Result<Vec<u8>, JwtError> {
    Base64UrlSafeNoPadding::decode_to_vec(encoded, None)
        .map_err(|e| JwtError::CouldNotExtract(e.to_string()))
}
