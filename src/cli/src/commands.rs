use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[clap(
    name = "productinfo",
    about = "Lists EC2 instance types with their on-demand prices, as published by the AWS Pricing API",
    version
)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[clap(long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every known value of a pricing attribute, e.g. instanceFamily
    Attributes {
        /// Attribute name as used by the pricing API
        attribute: String,
    },

    /// List the instance types of a region matching one attribute value
    Products {
        /// Region id, e.g. us-east-1
        #[clap(long)]
        region: String,

        /// Attribute to filter on, e.g. instanceType
        #[clap(long)]
        attribute: String,

        /// Attribute value exactly as the pricing API formats it, e.g. "General purpose"
        #[clap(long)]
        value: String,
    },

    /// List the instance types of a region for every value of an attribute
    Scan {
        /// Region id, e.g. us-east-1
        #[clap(long)]
        region: String,

        /// Attribute whose values are queried one by one
        #[clap(long)]
        attribute: String,
    },

    /// List the known regions
    Regions,
}
