use anyhow::{Context, Result};
use config::{Config as RConfig, Environment, File};
use productinfo_aws::AwsConfig;
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "PRODUCTINFO";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub aws_init_type: AwsConfig,
    pub log_level: String,
    pub log_file: Option<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// A named profile when the user has shared AWS config files, otherwise the environment chain.
    fn get_aws_default_init_type() -> AwsConfig {
        let has_shared_config = dirs::home_dir().is_some_and(|home| {
            home.join(".aws/credentials").exists() || home.join(".aws/config").exists()
        });

        if has_shared_config {
            AwsConfig::Profile(std::env::var("AWS_PROFILE").unwrap_or_else(|_| "default".into()))
        } else {
            AwsConfig::Env
        }
    }

    /// Defaults, then the optional TOML file, then `PRODUCTINFO_*` environment variables.
    pub fn load_config(path: Option<&str>) -> Result<Config> {
        let mut builder = RConfig::builder()
            .set_default("aws_init_type", Self::get_aws_default_init_type())?
            .set_default("log_level", DEFAULT_LOG_LEVEL)?;

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX));

        let config: Config = builder
            .build()
            .with_context(|| format!("failed to load configuration (file: {:?})", path))?
            .try_deserialize()
            .context("failed to parse configuration")?;

        Ok(config)
    }
}
