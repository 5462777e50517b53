use serde::{Deserialize, Serialize};

use crate::numeric::{or_zero, parse_localized_number};

/// One known value of a pricing attribute, e.g. `"3,5 GHz"` for `clockSpeed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttrValue {
    /// Numeric magnitude, zero when the text isn't a number.
    pub value: f64,
    /// The value exactly as the pricing API formats it; used as filter value.
    pub str_value: String,
}

/// Attribute values in the order the pricing API returned them.
pub type AttrValues = Vec<AttrValue>;

impl AttrValue {
    /// Builds a value from the provider's text, reading `,` as a decimal point
    /// and ignoring any unit suffix.
    pub fn from_raw(attribute: &str, raw: impl Into<String>) -> Self {
        let str_value = raw.into();
        let value = or_zero(attribute, &str_value, parse_localized_number);
        Self { value, str_value }
    }
}
