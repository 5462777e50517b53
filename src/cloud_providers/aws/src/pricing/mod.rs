mod api;
mod filter_builder;
mod infoer;

pub use api::{PricingApi, SdkPricingApi};
pub use filter_builder::Ec2ProductFilterBuilder;
pub use infoer::AwsInfoer;

#[cfg(test)]
pub(crate) use api::MockPricingApi;

use async_trait::async_trait;

use crate::error::Result;
use crate::regions::RegionMap;
use crate::types::attributes::{AttrValue, AttrValues};
use crate::types::pricing::Ec2Vm;

/// Service code of the EC2 product line in the pricing API.
pub const EC2_SERVICE_CODE: &str = "AmazonEC2";

/// Operations for retrieving cloud provider product information.
#[async_trait]
pub trait ProductInfoer: Send + Sync {
    /// Gets every known value of the given pricing attribute.
    async fn get_attribute_values(&self, attribute: &str) -> Result<AttrValues>;

    /// Gets the Linux, shared tenancy, on-demand products of a region whose
    /// `attr_key` attribute equals `attr_value`.
    async fn get_products(
        &self,
        region_id: &str,
        attr_key: &str,
        attr_value: &AttrValue,
    ) -> Result<Vec<Ec2Vm>>;

    /// Retrieves the available regions.
    fn get_regions(&self) -> RegionMap;
}
