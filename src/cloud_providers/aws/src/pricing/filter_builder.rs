//! Filter builders for AWS pricing queries

use aws_sdk_pricing::error::BuildError;
use aws_sdk_pricing::types::{Filter as PricingFilters, FilterType as PricingFilterType};

/// Filters for the Linux, shared tenancy, no pre-installed software products
/// of one location, narrowed by one more attribute.
#[derive(Debug)]
pub struct Ec2ProductFilterBuilder<'a> {
    /// Region description, e.g. `US East (N. Virginia)`. The pricing API
    /// indexes products by it, not by region code.
    pub location: &'a str,
    pub attr_key: &'a str,
    pub attr_value: &'a str,
}

impl Ec2ProductFilterBuilder<'_> {
    pub fn to_filter(&self) -> Result<Vec<PricingFilters>, BuildError> {
        Ok(vec![
            term_match("operatingSystem", "Linux")?,
            term_match("location", self.location)?,
            term_match("tenancy", "shared")?,
            term_match("preInstalledSw", "NA")?,
            term_match(self.attr_key, self.attr_value)?,
        ])
    }
}

fn term_match(field: &str, value: &str) -> Result<PricingFilters, BuildError> {
    PricingFilters::builder()
        .field(field)
        .value(value)
        .r#type(PricingFilterType::TermMatch)
        .build()
}
