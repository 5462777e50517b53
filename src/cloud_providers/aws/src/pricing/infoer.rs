use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_pricing as pricing;
use std::sync::Arc;

use super::{Ec2ProductFilterBuilder, PricingApi, ProductInfoer, SdkPricingApi, EC2_SERVICE_CODE};
use crate::config::{resolve_available_aws_config, verify_credentials, AwsConfig, PRICING_API_REGION};
use crate::error::{ProductInfoError, Result};
use crate::regions::{region_map, AwsPartition, Partition, RegionMap};
use crate::types::attributes::{AttrValue, AttrValues};
use crate::types::pricing::Ec2Vm;
use crate::types::region::Region;

/// [`ProductInfoer`] backed by the AWS Pricing API.
#[derive(Clone)]
pub struct AwsInfoer {
    pricing_api: Arc<dyn PricingApi>,
    partition: Arc<dyn Partition>,
}

impl AwsInfoer {
    /// Resolves credentials and creates a pricing client for the pricing endpoint region.
    pub async fn new(initialization_conf: AwsConfig) -> Result<Self> {
        let conf = resolve_available_aws_config(initialization_conf, PRICING_API_REGION).await?;
        Ok(Self::from_verified_config(&conf))
    }

    /// Uses an already loaded SDK configuration; its credentials are checked first.
    pub async fn from_sdk_config(conf: &SdkConfig) -> Result<Self> {
        verify_credentials(conf).await?;
        Ok(Self::from_verified_config(conf))
    }

    fn from_verified_config(conf: &SdkConfig) -> Self {
        Self::with_api(
            Arc::new(SdkPricingApi::new(pricing::Client::new(conf))),
            Arc::new(AwsPartition),
        )
    }

    pub fn with_api(pricing_api: Arc<dyn PricingApi>, partition: Arc<dyn Partition>) -> Self {
        Self {
            pricing_api,
            partition,
        }
    }

    pub fn get_region(&self, id: &str) -> Option<Region> {
        self.partition.region(id)
    }
}

#[async_trait]
impl ProductInfoer for AwsInfoer {
    async fn get_attribute_values(&self, attribute: &str) -> Result<AttrValues> {
        let raw_values = self
            .pricing_api
            .get_attribute_values(EC2_SERVICE_CODE, attribute)
            .await
            .map_err(ProductInfoError::query("GetAttributeValues"))?;

        let values: AttrValues = raw_values
            .into_iter()
            .map(|raw| AttrValue::from_raw(attribute, raw))
            .collect();

        tracing::debug!("found {} values: {:?}", attribute, values);
        Ok(values)
    }

    async fn get_products(
        &self,
        region_id: &str,
        attr_key: &str,
        attr_value: &AttrValue,
    ) -> Result<Vec<Ec2Vm>> {
        tracing::debug!(
            "Getting available instance types from AWS API. [region={}, {}={}]",
            region_id,
            attr_key,
            attr_value.str_value
        );

        let region = self
            .get_region(region_id)
            .ok_or_else(|| ProductInfoError::UnknownRegion(region_id.to_string()))?;

        let filters = Ec2ProductFilterBuilder {
            location: region.description(),
            attr_key,
            attr_value: &attr_value.str_value,
        }
        .to_filter()?;

        let price_list = self
            .pricing_api
            .get_products(EC2_SERVICE_CODE, filters)
            .await
            .map_err(ProductInfoError::query("GetProducts"))?;

        let vms: Vec<Ec2Vm> = price_list
            .iter()
            .filter_map(|product| match Ec2Vm::from_price_list_entry(product) {
                Ok(vm) => Some(vm),
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        region = region_id,
                        "Skipping malformed product [{}={}]",
                        attr_key,
                        attr_value.str_value
                    );
                    None
                }
            })
            .collect();

        tracing::debug!("found vms [{}={}]: {:?}", attr_key, attr_value.str_value, vms);
        Ok(vms)
    }

    fn get_regions(&self) -> RegionMap {
        region_map(self.partition.as_ref())
    }
}
