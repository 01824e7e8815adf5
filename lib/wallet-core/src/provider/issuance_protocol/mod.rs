pub mod error;
pub mod openid4vci;
