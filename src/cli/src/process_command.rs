use anyhow::{Context, Result};
use clap::Parser;
use productinfo_aws::regions::region_map;
use productinfo_aws::{AttrValue, AttrValues, AwsInfoer, AwsPartition, Ec2Vm, ProductInfoer};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::commands::{Cli, Command};
use crate::config::{Config, ConfigLoader};
use crate::logging::setup_logging;

pub async fn process_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = ConfigLoader::load_config(cli.config.as_deref())?;
    let _guard = setup_logging(&config)?;

    tracing::debug!(aws_init_type = %config.aws_init_type, "Loaded configuration");

    match cli.command {
        // region metadata is static, no session needed
        Command::Regions => print_json(&region_map(&AwsPartition)),
        Command::Attributes { attribute } => {
            let infoer = connect(&config).await?;
            print_json(&attribute_values(&infoer, &attribute).await?)
        }
        Command::Products {
            region,
            attribute,
            value,
        } => {
            let infoer = connect(&config).await?;
            print_json(&products(&infoer, &region, &attribute, value).await?)
        }
        Command::Scan { region, attribute } => {
            let infoer = connect(&config).await?;
            print_json(&scan(&infoer, &region, &attribute).await?)
        }
    }
}

async fn connect(config: &Config) -> Result<AwsInfoer> {
    AwsInfoer::new(config.aws_init_type.clone())
        .await
        .context("failed to set up the AWS pricing client")
}

pub async fn attribute_values(infoer: &dyn ProductInfoer, attribute: &str) -> Result<AttrValues> {
    infoer
        .get_attribute_values(attribute)
        .await
        .with_context(|| format!("failed to get values of attribute '{}'", attribute))
}

/// Products of `region` whose `attribute` equals `raw_value`, parsed the way
/// attribute values from the pricing API are.
pub async fn products(
    infoer: &dyn ProductInfoer,
    region: &str,
    attribute: &str,
    raw_value: String,
) -> Result<Vec<Ec2Vm>> {
    let attr_value = AttrValue::from_raw(attribute, raw_value);
    infoer
        .get_products(region, attribute, &attr_value)
        .await
        .with_context(|| {
            format!(
                "failed to get products [region={}, {}={}]",
                region, attribute, attr_value.str_value
            )
        })
}

/// Queries the products of `region` once for every known value of `attribute`.
pub async fn scan(
    infoer: &dyn ProductInfoer,
    region: &str,
    attribute: &str,
) -> Result<BTreeMap<String, Vec<Ec2Vm>>> {
    let values = attribute_values(infoer, attribute).await?;

    let mut vms_by_value = BTreeMap::new();
    for attr_value in values {
        let vms = infoer
            .get_products(region, attribute, &attr_value)
            .await
            .with_context(|| {
                format!(
                    "failed to get products [region={}, {}={}]",
                    region, attribute, attr_value.str_value
                )
            })?;
        tracing::info!(
            "{}={}: {} instance types",
            attribute,
            attr_value.str_value,
            vms.len()
        );
        vms_by_value
            .entry(attr_value.str_value)
            .or_insert_with(Vec::new)
            .extend(vms);
    }

    Ok(vms_by_value)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
