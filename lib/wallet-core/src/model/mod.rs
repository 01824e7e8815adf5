pub mod credential;
pub mod issuer;
pub mod key;
