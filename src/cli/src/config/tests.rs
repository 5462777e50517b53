use super::ConfigLoader;
use productinfo_aws::AwsConfig;
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_defaults() {
    let config = ConfigLoader::load_config(None).unwrap();

    assert_eq!(config.log_level, "info");
    assert!(config.log_file.is_none());
}

#[test]
#[serial]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
log_level = "debug"
log_file = "/tmp/productinfo.log"

[aws_init_type]
profile = "pricing"
"#,
    );

    let config = ConfigLoader::load_config(file.path().to_str()).unwrap();

    assert_eq!(config.log_level, "debug");
    assert_eq!(config.log_file.as_deref(), Some("/tmp/productinfo.log"));
    assert_eq!(config.aws_init_type, AwsConfig::Profile("pricing".into()));
}

#[test]
#[serial]
fn test_role_arn_from_file() {
    let file = write_config(
        r#"
[aws_init_type]
role_arn = "arn:aws:iam::123456789012:role/pricing-reader"
"#,
    );

    let config = ConfigLoader::load_config(file.path().to_str()).unwrap();

    assert_eq!(
        config.aws_init_type,
        AwsConfig::RoleArn("arn:aws:iam::123456789012:role/pricing-reader".into())
    );
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let file = write_config("log_level = \"debug\"\n");

    std::env::set_var("PRODUCTINFO_LOG_LEVEL", "trace");
    std::env::set_var("PRODUCTINFO_AWS_INIT_TYPE", "env");
    let config = ConfigLoader::load_config(file.path().to_str());
    std::env::remove_var("PRODUCTINFO_LOG_LEVEL");
    std::env::remove_var("PRODUCTINFO_AWS_INIT_TYPE");

    let config = config.unwrap();
    assert_eq!(config.log_level, "trace");
    assert_eq!(config.aws_init_type, AwsConfig::Env);
}

#[test]
#[serial]
fn test_missing_file_is_an_error() {
    assert!(ConfigLoader::load_config(Some("/nonexistent/productinfo.toml")).is_err());
}
