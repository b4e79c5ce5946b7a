use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchase record from the order fixture.
///
/// The fixture is schemaless: no field is guaranteed to be present on any
/// given record, so every field is an `Option`. `total_price` is derived
/// upstream and is not guaranteed to equal `quantity * unit_price`; it is
/// carried as-is and never re-validated.
///
/// `order_date` is deliberately a string in "MM/DD/YYYY" form. Every report
/// that touches it compares by exact string equality, so parsing it into a
/// calendar type would only invite normalization bugs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total_price: Option<Decimal>,
    #[serde(default)]
    pub order_date: Option<String>,
    /// Free-text region name, the grouping key for the regional reports.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Read and displayed, but never used as a filter predicate.
    #[serde(default)]
    pub premium_customer: Option<bool>,
}

impl Order {
    /// True when the record's state matches `region` exactly.
    /// A record with no state never matches any region.
    pub fn in_region(&self, region: &str) -> bool {
        self.state.as_deref() == Some(region)
    }

    /// True when the record's total price strictly exceeds `threshold`.
    /// A record with no total price never exceeds anything.
    pub fn exceeds(&self, threshold: Decimal) -> bool {
        self.total_price.is_some_and(|total| total > threshold)
    }
}
