use async_trait::async_trait;
use aws_sdk_pricing as pricing;
use aws_sdk_pricing::types::Filter as PricingFilters;

#[cfg(test)]
use mockall::automock;

use crate::error::BoxError;

/// Raw pricing queries: one request, one response page.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PricingApi: Send + Sync {
    /// Values of `attribute` as formatted by the provider.
    async fn get_attribute_values(
        &self,
        service_code: &str,
        attribute: &str,
    ) -> Result<Vec<String>, BoxError>;

    /// Matching products, each one a JSON document.
    async fn get_products(
        &self,
        service_code: &str,
        filters: Vec<PricingFilters>,
    ) -> Result<Vec<String>, BoxError>;
}

pub struct SdkPricingApi {
    client: pricing::Client,
}

impl SdkPricingApi {
    pub fn new(client: pricing::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PricingApi for SdkPricingApi {
    async fn get_attribute_values(
        &self,
        service_code: &str,
        attribute: &str,
    ) -> Result<Vec<String>, BoxError> {
        let output = self
            .client
            .get_attribute_values()
            .service_code(service_code)
            .attribute_name(attribute)
            .send()
            .await?;

        Ok(output
            .attribute_values()
            .iter()
            .filter_map(|value| value.value().map(str::to_string))
            .collect())
    }

    async fn get_products(
        &self,
        service_code: &str,
        filters: Vec<PricingFilters>,
    ) -> Result<Vec<String>, BoxError> {
        let output = self
            .client
            .get_products()
            .service_code(service_code)
            .set_filters(Some(filters))
            .send()
            .await?;

        Ok(output.price_list().to_vec())
    }
}
