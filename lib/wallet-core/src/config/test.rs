use serde::{Deserialize, Serialize};
use similar_asserts::assert_eq;

use super::core_config::{AppConfig, KeyFormat, NoCustomConfig};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestAppConfig {
    trace_level: Option<String>,
}

#[test]
fn test_defaults_when_config_is_empty() {
    let config = AppConfig::<NoCustomConfig>::from_yaml(["{}"]).unwrap();

    let openid4vci = config.core.openid4vci;
    assert_eq!(time::Duration::hours(5), openid4vci.proof_validity);
    assert_eq!(18000, openid4vci.proof_validity.whole_seconds());
    assert_eq!(30000, openid4vci.download_timeout.whole_milliseconds());
    assert_eq!(KeyFormat::Spki, openid4vci.key_format);
    assert_eq!("ldp_vc", openid4vci.credential_format);
    assert_eq!(
        vec!["https://www.w3.org/2018/credentials/v1".to_string()],
        openid4vci.credential_context
    );
    assert_eq!(None, config.core.remote_config.url);
    assert_eq!(10, config.core.remote_config.timeout.whole_seconds());
}

#[test]
fn test_later_inputs_override_earlier_ones() {
    let base = r#"
openid4vci:
  proofValidity: 600
  keyFormat: SPKI
  credentialType: BaseCredential
"#;
    let overrides = r#"
openid4vci:
  keyFormat: PKCS1
remoteConfig:
  url: https://config.example.com/allProperties
  timeout: 3
app:
  traceLevel: debug
"#;

    let config = AppConfig::<TestAppConfig>::from_yaml([base, overrides]).unwrap();

    assert_eq!(600, config.core.openid4vci.proof_validity.whole_seconds());
    assert_eq!(KeyFormat::Pkcs1, config.core.openid4vci.key_format);
    assert_eq!("BaseCredential", config.core.openid4vci.credential_type);
    assert_eq!(
        "https://config.example.com/allProperties",
        config.core.remote_config.url.unwrap().as_str()
    );
    assert_eq!(3, config.core.remote_config.timeout.whole_seconds());
    assert_eq!(Some("debug".to_string()), config.app.trace_level);
}

#[test]
fn test_invalid_key_format_is_rejected() {
    let result = AppConfig::<NoCustomConfig>::from_yaml(["openid4vci:\n  keyFormat: DER\n"]);

    assert!(result.is_err());
}

#[test]
fn test_unsupported_file_extension() {
    let result = AppConfig::<NoCustomConfig>::from_files(&["config/config.toml"]);

    assert!(result.is_err());
}

#[cfg(feature = "config_env")]
#[test]
fn test_environment_overrides_files() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("config.yml", "openid4vci:\n  proofValidity: 600\n")?;
        jail.set_env("WALLET_openid4vci__proofValidity", "120");

        let config = AppConfig::<NoCustomConfig>::from_files(&["config.yml"]).unwrap();
        assert_eq!(120, config.core.openid4vci.proof_validity.whole_seconds());

        Ok(())
    });
}
