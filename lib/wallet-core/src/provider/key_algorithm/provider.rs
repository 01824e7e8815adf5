use std::sync::Arc;

use super::JwkConverter;
use super::rsa::{Pkcs1PemConverter, SpkiPemConverter};
use crate::config::core_config::KeyFormat;

pub fn jwk_converter_for(key_format: KeyFormat) -> Arc<dyn JwkConverter> {
    match key_format {
        KeyFormat::Spki => Arc::new(SpkiPemConverter),
        KeyFormat::Pkcs1 => Arc::new(Pkcs1PemConverter),
    }
}
