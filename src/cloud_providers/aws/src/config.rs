use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use config::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{ProductInfoError, Result};

/// The pricing endpoint is only served from this region.
pub const PRICING_API_REGION: &str = "us-east-1";

const ASSUME_ROLE_SESSION_NAME: &str = "productinfo-session";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AwsConfig {
    Profile(String),
    RoleArn(String),
    Env,
}

impl fmt::Display for AwsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwsConfig::Profile(profile) => write!(f, "profile:{}", profile),
            AwsConfig::RoleArn(role) => write!(f, "role_arn:{}", role),
            AwsConfig::Env => write!(f, "env"),
        }
    }
}

impl From<AwsConfig> for ValueKind {
    fn from(value: AwsConfig) -> Self {
        match value {
            AwsConfig::Profile(profile) => {
                let mut table = HashMap::new();
                table.insert("profile".to_string(), Value::new(None, Self::String(profile)));
                Self::Table(table)
            }
            AwsConfig::RoleArn(role) => {
                let mut table = HashMap::new();
                table.insert("role_arn".to_string(), Value::new(None, Self::String(role)));
                Self::Table(table)
            }
            AwsConfig::Env => Self::String("env".to_string()),
        }
    }
}

/// Loads an [`SdkConfig`] for `region` and checks that it can produce credentials.
// The default chain may fall back to IMDS when running inside EC2.
pub async fn get_initialized_aws_conf(
    initialization_conf: AwsConfig,
    region: impl Into<String>,
) -> Result<SdkConfig> {
    let config_loader = aws_config::defaults(BehaviorVersion::latest());
    let loader = match initialization_conf {
        AwsConfig::Profile(profile) => {
            tracing::debug!("Trying to load AWS config using profile '{}'", profile);
            config_loader.profile_name(profile)
        }
        AwsConfig::RoleArn(arn) => {
            tracing::debug!("Trying to assume role '{}'", &arn);
            let assumed_role_provider = aws_config::sts::AssumeRoleProvider::builder(&arn)
                .session_name(ASSUME_ROLE_SESSION_NAME)
                .build()
                .await;

            let assumed_credentials = assumed_role_provider
                .provide_credentials()
                .await
                .map_err(|err| {
                    ProductInfoError::Session(format!("failed to assume role '{}': {}", arn, err))
                })?;

            config_loader.credentials_provider(assumed_credentials)
        }
        AwsConfig::Env => {
            tracing::debug!("Trying to load AWS config from environment");
            aws_config::from_env()
        }
    };

    let config = loader.region(Region::new(region.into())).load().await;
    verify_credentials(&config).await?;

    tracing::debug!("Successfully retrieved AWS credentials");
    Ok(config)
}

/// Fails unless `config` carries a credentials provider that yields credentials.
pub async fn verify_credentials(config: &SdkConfig) -> Result<()> {
    let credentials_provider = config.credentials_provider().ok_or_else(|| {
        ProductInfoError::Session("no credentials provider configured".to_string())
    })?;

    credentials_provider
        .provide_credentials()
        .await
        .map_err(|err| ProductInfoError::Session(format!("failed to get AWS credentials: {}", err)))?;

    Ok(())
}

/// Tries the configured profile first, then the environment chain.
///
/// The returned config has already passed [`verify_credentials`]. When both
/// attempts fail the error carries both causes.
pub async fn resolve_available_aws_config(profile: AwsConfig, region: &str) -> Result<SdkConfig> {
    let profile_err = if matches!(profile, AwsConfig::Env) {
        None
    } else {
        match get_initialized_aws_conf(profile.clone(), region).await {
            Ok(conf) => {
                tracing::info!("Resolved AWS credentials using {}", profile);
                return Ok(conf);
            }
            Err(err) => {
                tracing::warn!("Failed to resolve credentials using {}: {}", profile, err);
                Some(err)
            }
        }
    };

    match get_initialized_aws_conf(AwsConfig::Env, region).await {
        Ok(conf) => {
            tracing::info!("Resolved AWS credentials using environment.");
            Ok(conf)
        }
        Err(env_err) => {
            tracing::warn!("Could not resolve AWS credentials from environment: {}", env_err);
            Err(match profile_err {
                Some(profile_err) => combine_session_errors(&profile, profile_err, env_err),
                None => env_err,
            })
        }
    }
}

fn session_reason(err: ProductInfoError) -> String {
    match err {
        ProductInfoError::Session(reason) => reason,
        other => other.to_string(),
    }
}

fn combine_session_errors(
    profile: &AwsConfig,
    profile_err: ProductInfoError,
    env_err: ProductInfoError,
) -> ProductInfoError {
    ProductInfoError::Session(format!(
        "{}: {}; env: {}",
        profile,
        session_reason(profile_err),
        session_reason(env_err)
    ))
}
