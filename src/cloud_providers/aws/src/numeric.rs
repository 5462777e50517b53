//! Lenient number parsing for the string-typed fields of pricing documents.

use std::num::ParseFloatError;

/// Parses the first whitespace-separated token, dropping unit suffixes
/// such as `"8 GiB"` or `"3.5 GHz"`.
pub fn parse_leading_number(raw: &str) -> Result<f64, ParseFloatError> {
    raw.split_whitespace().next().unwrap_or_default().parse::<f64>()
}

/// Like [`parse_leading_number`], but reads `,` as the decimal separator too.
pub fn parse_localized_number(raw: &str) -> Result<f64, ParseFloatError> {
    parse_leading_number(&raw.replace(',', "."))
}

/// Runs `parse` on `raw`, substituting zero and logging a warning on failure.
pub(crate) fn or_zero(
    field: &str,
    raw: &str,
    parse: impl FnOnce(&str) -> Result<f64, ParseFloatError>,
) -> f64 {
    parse(raw).unwrap_or_else(|err| {
        tracing::warn!("Couldn't parse {} value [{}]: {}", field, raw, err);
        0.0
    })
}
