use std::collections::HashMap;
use std::io::Write;

use loanwise_core::config::*;
use loanwise_core::errors::ConfigError;
use loanwise_core::models::MissingPolicy;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LoanwiseConfig::from_toml("").unwrap();

    assert_eq!(config.reconcile.missing_policy, MissingPolicy::RejectIncomplete);
    assert_eq!(config.artifact.kind, "logistic");
    assert!(config.artifact.path.is_none());
    assert!(config.artifact.feature_names.is_empty());
    assert_eq!(config.artifact.intra_threads, 1);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
    config.validate().unwrap();
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[reconcile]
missing_policy = "zero_fill"

[artifact]
path = "models/loan.json"
"#;
    let config = LoanwiseConfig::from_toml(toml).unwrap();
    assert_eq!(config.reconcile.missing_policy, MissingPolicy::ZeroFill);
    assert_eq!(config.artifact.path.as_deref(), Some("models/loan.json"));
    // Non-overridden fields keep defaults
    assert_eq!(config.artifact.kind, "logistic");
}

#[test]
fn config_rejects_unknown_policy() {
    let err =
        LoanwiseConfig::from_toml("[reconcile]\nmissing_policy = \"nan_fill\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn env_overrides_apply_and_validate() {
    let mut config = LoanwiseConfig::default();
    config
        .apply_env_overrides(env(&[
            ("LOANWISE_MISSING_POLICY", "zero_fill"),
            ("LOANWISE_ARTIFACT_PATH", "/srv/model.json"),
            ("LOANWISE_LOG_LEVEL", "debug"),
        ]))
        .unwrap();
    assert_eq!(config.reconcile.missing_policy, MissingPolicy::ZeroFill);
    assert_eq!(config.artifact.path.as_deref(), Some("/srv/model.json"));
    assert_eq!(config.observability.log_level, "debug");

    let err = config
        .apply_env_overrides(env(&[("LOANWISE_MISSING_POLICY", "whatever")]))
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn cli_overrides_win() {
    let mut config =
        LoanwiseConfig::from_toml("[reconcile]\nmissing_policy = \"zero_fill\"\n").unwrap();
    config.apply_cli_overrides(&CliOverrides {
        missing_policy: Some(MissingPolicy::RejectIncomplete),
        artifact_path: None,
        log_level: None,
    });
    assert_eq!(config.reconcile.missing_policy, MissingPolicy::RejectIncomplete);
    assert!(config.artifact.path.is_none());
}

#[test]
fn onnx_requires_feature_names() {
    let config =
        LoanwiseConfig::from_toml("[artifact]\nkind = \"onnx\"\npath = \"m.onnx\"\n").unwrap();
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "artifact.feature_names"
    ));
}

#[test]
fn unknown_kind_and_level_fail_validation() {
    let config = LoanwiseConfig::from_toml("[artifact]\nkind = \"pickle\"\n").unwrap();
    assert!(config.validate().is_err());

    let config = LoanwiseConfig::from_toml("[observability]\nlog_level = \"loud\"\n").unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn load_reads_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[reconcile]\nmissing_policy = \"zero_fill\"").unwrap();
    let cli = CliOverrides {
        artifact_path: Some("cli.json".into()),
        ..Default::default()
    };
    let config = LoanwiseConfig::load(Some(file.path()), Some(&cli)).unwrap();
    assert_eq!(config.artifact.path.as_deref(), Some("cli.json"));
}

#[test]
fn load_missing_explicit_file_fails() {
    let err = LoanwiseConfig::load(Some(std::path::Path::new("/nonexistent/loanwise.toml")), None)
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = LoanwiseConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = LoanwiseConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.reconcile.missing_policy,
        config.reconcile.missing_policy
    );
    assert_eq!(roundtripped.artifact.kind, config.artifact.kind);
}
