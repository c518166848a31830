//! Price parsing and price-range filtering

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Extract a numeric value from a loosely formatted price string.
///
/// Every character that is not an ASCII digit or `.` is dropped before
/// conversion, so `"$12.50"` yields `12.5` and `"1,234"` yields `1234`.
/// Returns `None` when the input is absent, nothing numeric remains, or the
/// remainder is not a valid number (for example `"1.2.3"`).
pub fn parse_price(input: Option<&str>) -> Option<f64> {
    let raw = input?;
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Price bucket used to narrow the visible catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceFilter {
    /// Every record
    #[default]
    #[serde(rename = "all")]
    All,

    /// Strictly below 10
    #[serde(rename = "lt10")]
    Under10,

    /// From 10 to 20, both ends inclusive
    #[serde(rename = "btw10_20")]
    Between10And20,

    /// Strictly above 20
    #[serde(rename = "gt20")]
    Over20,
}

impl PriceFilter {
    /// All filters in selector order
    pub const ALL: [PriceFilter; 4] = [
        PriceFilter::All,
        PriceFilter::Under10,
        PriceFilter::Between10And20,
        PriceFilter::Over20,
    ];

    /// Wire name used on the command line and in JSON
    pub fn as_str(self) -> &'static str {
        match self {
            PriceFilter::All => "all",
            PriceFilter::Under10 => "lt10",
            PriceFilter::Between10And20 => "btw10_20",
            PriceFilter::Over20 => "gt20",
        }
    }

    /// Human-readable selector label
    pub fn label(self) -> &'static str {
        match self {
            PriceFilter::All => "All",
            PriceFilter::Under10 => "Under $10",
            PriceFilter::Between10And20 => "$10–$20",
            PriceFilter::Over20 => "Over $20",
        }
    }

    /// Whether a record with this price belongs in the bucket.
    ///
    /// Unparsable prices match every bucket.
    pub fn matches(self, price: &str) -> bool {
        let Some(p) = parse_price(Some(price)) else {
            return true;
        };

        match self {
            PriceFilter::All => true,
            PriceFilter::Under10 => p < 10.0,
            PriceFilter::Between10And20 => (10.0..=20.0).contains(&p),
            PriceFilter::Over20 => p > 20.0,
        }
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriceFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "'{}' is not a price filter (expected one of: all, lt10, btw10_20, gt20)",
                    s
                )
            })
    }
}
