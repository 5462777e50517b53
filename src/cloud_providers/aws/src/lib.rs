//! EC2 instance type metadata and on-demand prices from the AWS Pricing API.
//!
//! [`AwsInfoer`] lists the known values of a pricing attribute and turns the
//! product documents matching one of those values into flat [`Ec2Vm`] records.

pub mod config;
pub mod error;
pub mod numeric;
pub mod pricing;
pub mod regions;
pub mod types;

pub use crate::config::AwsConfig;
pub use crate::error::{ProductInfoError, Result};
pub use crate::pricing::{AwsInfoer, PricingApi, ProductInfoer, SdkPricingApi};
pub use crate::regions::{AwsPartition, Partition, RegionMap};
pub use crate::types::attributes::{AttrValue, AttrValues};
pub use crate::types::pricing::Ec2Vm;
pub use crate::types::region::Region;
