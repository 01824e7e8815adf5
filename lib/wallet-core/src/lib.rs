//! Holder-side building blocks for OpenID4VCI credential issuance.
//!
//! The crate turns a wallet-held key pair, an issuer descriptor and a token
//! endpoint response into a signed proof of possession and the credential
//! request body that carries it. Key custody, HTTP transport and the OIDC
//! authorization flow itself stay with the caller and are reached through the
//! capability traits in [`provider`].

pub mod config;
pub mod error;
pub mod model;
pub mod proto;
pub mod provider;
