use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use crate::numeric::{or_zero, parse_leading_number};

/// One product document of a `GetProducts` price list.
#[derive(Debug, Deserialize)]
pub struct PriceListEntry {
    pub product: Product,
    #[serde(default)]
    pub terms: Terms,
}

#[derive(Debug, Deserialize)]
pub struct Product {
    pub attributes: ProductAttributes,
}

#[derive(Debug, Deserialize)]
pub struct ProductAttributes {
    #[serde(rename = "instanceType")]
    pub instance_type: String,

    pub vcpu: String,

    pub memory: String,

    // Only present for GPU instance families; any non-string value counts as absent.
    #[serde(default)]
    pub gpu: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Terms {
    #[serde(rename = "OnDemand", default)]
    pub on_demand: BTreeMap<String, OnDemandTerm>,
}

/// Keyed by opaque offer term codes such as `JRTCKXETXF.JRTCKXETXF`.
#[derive(Debug, Default, Deserialize)]
pub struct OnDemandTerm {
    #[serde(rename = "priceDimensions", default)]
    pub price_dimensions: BTreeMap<String, PriceDimension>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PriceDimension {
    #[serde(rename = "pricePerUnit", default)]
    pub price_per_unit: HashMap<String, Value>,
}

impl Terms {
    /// The USD on-demand price text.
    ///
    /// The pricing API returns a single OnDemand term with a single price
    /// dimension per EC2 product. Should it ever return more, the last one
    /// in key order is used.
    pub fn on_demand_usd(&self) -> Option<&Value> {
        self.on_demand
            .values()
            .flat_map(|term| term.price_dimensions.values())
            .filter_map(|dimension| dimension.price_per_unit.get("USD"))
            .last()
    }
}

/// Flat view of an EC2 instance type as offered in one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ec2Vm {
    #[serde(rename = "type")]
    pub instance_type: String,
    pub on_demand_price: f64,
    pub cpus: f64,
    /// Memory in GiB.
    pub mem: f64,
    pub gpus: f64,
}

impl Ec2Vm {
    /// Decodes a raw price list document.
    ///
    /// Fails only when the document is not JSON or lacks one of the required
    /// attributes (`instanceType`, `vcpu`, `memory`) as a string. Numbers that
    /// don't parse, a missing GPU count and a missing price all become zero.
    pub fn from_price_list_entry(raw: &str) -> Result<Self, serde_json::Error> {
        let entry: PriceListEntry = serde_json::from_str(raw)?;
        Ok(entry.into())
    }
}

impl From<PriceListEntry> for Ec2Vm {
    fn from(entry: PriceListEntry) -> Self {
        let PriceListEntry { product, terms } = entry;
        let attributes = product.attributes;

        let gpus = match attributes.gpu.as_ref().and_then(Value::as_str) {
            Some(gpu) => or_zero("gpu", gpu, |raw| raw.parse::<f64>()),
            None => 0.0,
        };

        let on_demand_price = match terms.on_demand_usd().and_then(Value::as_str) {
            Some(price) => or_zero("on demand price", price, |raw| raw.parse::<f64>()),
            None => {
                tracing::warn!(
                    "No on demand USD price found for instance type {}",
                    attributes.instance_type
                );
                0.0
            }
        };

        Ec2Vm {
            cpus: or_zero("vcpu", &attributes.vcpu, |raw| raw.parse::<f64>()),
            mem: or_zero("memory", &attributes.memory, parse_leading_number),
            instance_type: attributes.instance_type,
            on_demand_price,
            gpus,
        }
    }
}
