use core_types::Order;
use serde::{Deserialize, Serialize};

/// Per-region order counts plus the grand total.
///
/// Rows are sorted ascending by count, ties broken by region name, so the
/// report is deterministic for any input. `total` is computed by summing the
/// per-region counts in a single pass, which makes the
/// `sum(per-region counts) == total` invariant hold by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotals {
    pub per_region: Vec<RegionCount>,
    pub total: usize,
}

/// One row of the region-totals report. `region` is `None` for records that
/// carry no state field; those still count toward the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: Option<String>,
    pub count: usize,
}

/// Product occurrence counts, sorted descending by frequency with ties broken
/// ascending by product id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFrequencies {
    pub products: Vec<ProductFrequency>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFrequency {
    pub product_id: Option<i64>,
    pub frequency: usize,
}

/// The full record set matched by a filter report, in fixture order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredOrders {
    pub orders: Vec<Order>,
}

impl FilteredOrders {
    pub fn count(&self) -> usize {
        self.orders.len()
    }
}

/// The ranked top-N regions by order volume above a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRegions {
    pub regions: Vec<RankedRegion>,
}

/// One ranked row. Ranks use competition semantics: regions with equal counts
/// share a rank, and the next distinct count's rank skips past the tie group
/// (1, 2, 2, 4).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRegion {
    pub rank: usize,
    pub region: Option<String>,
    pub count: usize,
}
