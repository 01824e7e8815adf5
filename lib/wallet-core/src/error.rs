use serde::Serialize;
use strum::{AsRefStr, Display};

use crate::provider::issuance_protocol::error::OpenID4VCIError;
use crate::provider::remote_config::RemoteConfigError;


/// Failure category presented to the wallet user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, Serialize)]
pub enum ErrorMessage {
    #[strum(serialize = "noInternetConnection")]
    #[serde(rename = "noInternetConnection")]
    NoInternet,
    #[strum(serialize = "generic")]
    #[serde(rename = "generic")]
    Generic,
    #[strum(serialize = "requestTimedOut")]
    #[serde(rename = "requestTimedOut")]
    RequestTimedOut,
}

pub trait ErrorMessageMixin {
    fn error_message(&self) -> ErrorMessage;
}

impl ErrorMessageMixin for RemoteConfigError {
    fn error_message(&self) -> ErrorMessage {
        match self {
            Self::Transport(error) if error.is_timeout() => ErrorMessage::RequestTimedOut,
            Self::Transport(error) if error.is_connect() => ErrorMessage::NoInternet,
            Self::Transport(_) | Self::MissingUrl | Self::InvalidTimeout => ErrorMessage::Generic,
        }
    }
}

impl ErrorMessageMixin for OpenID4VCIError {
    fn error_message(&self) -> ErrorMessage {
        match self {
            Self::KeyConversion(_) | Self::ProofConstruction(_) | Self::Configuration(_) => {
                ErrorMessage::Generic
            }
        }
    }
}

const OIDC_FLOW_CANCELLED_ANDROID: &str = "User cancelled flow";
const OIDC_FLOW_CANCELLED_IOS: &str = "org.openid.appauth.general error -3";
const INVALID_TOKEN_SPECIFIED: &str = "Invalid token specified";
const OIDC_CONFIG_ERROR_PREFIX: &str = "Config error";

/// Errors surfaced by the external OIDC authorization library or the issuer,
/// recognized by their message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OidcFlowError {
    Cancelled,
    InvalidToken,
    Configuration(String),
    Other(String),
}

impl OidcFlowError {
    pub fn classify(message: &str) -> Self {
        let message = message.trim();

        if message == OIDC_FLOW_CANCELLED_ANDROID || message == OIDC_FLOW_CANCELLED_IOS {
            Self::Cancelled
        } else if message.starts_with(INVALID_TOKEN_SPECIFIED) {
            Self::InvalidToken
        } else if message.starts_with(OIDC_CONFIG_ERROR_PREFIX) {
            Self::Configuration(message.to_string())
        } else {
            Self::Other(message.to_string())
        }
    }

    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl ErrorMessageMixin for OidcFlowError {
    fn error_message(&self) -> ErrorMessage {
        ErrorMessage::Generic
    }
}
