use crate::report::{
    FilteredOrders, ProductFrequencies, ProductFrequency, RankedRegion, RankedRegions,
    RegionCount, RegionTotals,
};
use datastore::OrderCollection;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tracing::debug;

/// A stateless runner for the fixed battery of analytical reports.
///
/// Every method is a pure function over the collection handle; nothing is
/// cached or shared between calls, and nothing is ever written back.
#[derive(Debug, Default)]
pub struct ReportEngine {}

impl ReportEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts orders per region and the grand total of all orders.
    ///
    /// One pass builds the region-to-count map; the total is the sum of the
    /// map's values. Rows come back sorted ascending by count, ties broken by
    /// region name, with the missing-region bucket (if any) first among equals.
    pub fn region_totals(&self, collection: &OrderCollection) -> RegionTotals {
        let mut counts: HashMap<Option<String>, usize> = HashMap::new();
        for order in collection {
            *counts.entry(order.state.clone()).or_default() += 1;
        }

        let total = counts.values().sum();

        let mut per_region: Vec<RegionCount> = counts
            .into_iter()
            .map(|(region, count)| RegionCount { region, count })
            .collect();
        per_region.sort_by(|a, b| a.count.cmp(&b.count).then_with(|| a.region.cmp(&b.region)));

        debug!(regions = per_region.len(), total, "region totals computed");

        RegionTotals { per_region, total }
    }

    /// Counts how often each product id occurs across all orders, most
    /// frequent first. Ties are broken by ascending product id so the report
    /// never depends on incidental iteration order.
    pub fn product_frequencies(&self, collection: &OrderCollection) -> ProductFrequencies {
        let mut counts: HashMap<Option<i64>, usize> = HashMap::new();
        for order in collection {
            *counts.entry(order.product_id).or_default() += 1;
        }

        let mut products: Vec<ProductFrequency> = counts
            .into_iter()
            .map(|(product_id, frequency)| ProductFrequency {
                product_id,
                frequency,
            })
            .collect();
        products.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });

        ProductFrequencies { products }
    }

    /// Lists orders in `region` whose total price strictly exceeds
    /// `threshold`, in fixture order.
    pub fn high_value_orders(
        &self,
        collection: &OrderCollection,
        region: &str,
        threshold: Decimal,
    ) -> FilteredOrders {
        self.filter_region_above(collection, region, threshold)
    }

    /// Lists orders in `region` above the premium threshold. Note that the
    /// `premium_customer` flag is not part of the predicate; it is carried
    /// through for display only.
    pub fn premium_orders(
        &self,
        collection: &OrderCollection,
        region: &str,
        threshold: Decimal,
    ) -> FilteredOrders {
        self.filter_region_above(collection, region, threshold)
    }

    fn filter_region_above(
        &self,
        collection: &OrderCollection,
        region: &str,
        threshold: Decimal,
    ) -> FilteredOrders {
        let orders = collection
            .iter()
            .filter(|order| order.in_region(region) && order.exceeds(threshold))
            .cloned()
            .collect();
        FilteredOrders { orders }
    }

    /// Ranks regions by how many of their orders exceed `threshold`, keeping
    /// the top `limit` rows. Regions with equal counts share a rank; the rank
    /// after a tie group skips (competition ranking: 1, 2, 2, 4).
    pub fn top_regions(
        &self,
        collection: &OrderCollection,
        threshold: Decimal,
        limit: usize,
    ) -> RankedRegions {
        let mut counts: HashMap<Option<String>, usize> = HashMap::new();
        for order in collection {
            if order.exceeds(threshold) {
                *counts.entry(order.state.clone()).or_default() += 1;
            }
        }

        let mut grouped: Vec<(Option<String>, usize)> = counts.into_iter().collect();
        grouped.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        let mut regions = Vec::new();
        let mut previous: Option<usize> = None;
        let mut rank = 0;
        for (position, (region, count)) in grouped.into_iter().enumerate() {
            if previous != Some(count) {
                rank = position + 1;
                previous = Some(count);
            }
            regions.push(RankedRegion {
                rank,
                region,
                count,
            });
        }
        regions.truncate(limit);

        RankedRegions { regions }
    }

    /// Lists orders placed in `city` on exactly `date`. Both comparisons are
    /// exact string matches; no date-range semantics apply.
    pub fn orders_by_city_and_date(
        &self,
        collection: &OrderCollection,
        city: &str,
        date: &str,
    ) -> FilteredOrders {
        let orders = collection
            .iter()
            .filter(|order| {
                order.city.as_deref() == Some(city) && order.order_date.as_deref() == Some(date)
            })
            .cloned()
            .collect();
        FilteredOrders { orders }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Order;
    use rust_decimal_macros::dec;

    fn order(state: Option<&str>, total_price: Option<Decimal>) -> Order {
        Order {
            order_id: None,
            customer_id: None,
            product_id: None,
            quantity: None,
            unit_price: None,
            total_price,
            order_date: None,
            state: state.map(str::to_string),
            city: None,
            premium_customer: None,
        }
    }

    fn collection(orders: Vec<Order>) -> OrderCollection {
        OrderCollection::from_orders(orders)
    }

    #[test]
    fn region_totals_sum_matches_total() {
        let collection = collection(vec![
            order(Some("California"), Some(dec!(100))),
            order(Some("California"), None),
            order(Some("Texas"), Some(dec!(50))),
            order(None, Some(dec!(10))),
        ]);

        let totals = ReportEngine::new().region_totals(&collection);

        let sum: usize = totals.per_region.iter().map(|row| row.count).sum();
        assert_eq!(sum, totals.total);
        assert_eq!(totals.total, collection.len());
    }

    #[test]
    fn region_totals_sorted_ascending_with_name_tiebreak() {
        let collection = collection(vec![
            order(Some("Texas"), None),
            order(Some("Ohio"), None),
            order(Some("California"), None),
            order(Some("California"), None),
        ]);

        let totals = ReportEngine::new().region_totals(&collection);

        let rows: Vec<(Option<&str>, usize)> = totals
            .per_region
            .iter()
            .map(|row| (row.region.as_deref(), row.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                (Some("Ohio"), 1),
                (Some("Texas"), 1),
                (Some("California"), 2),
            ]
        );
    }

    #[test]
    fn region_totals_of_empty_collection_is_zero() {
        let totals = ReportEngine::new().region_totals(&collection(vec![]));
        assert!(totals.per_region.is_empty());
        assert_eq!(totals.total, 0);
    }

    #[test]
    fn product_frequencies_match_occurrence_counts() {
        let mut orders = Vec::new();
        for product_id in [7, 3, 7, 7, 3, 9] {
            let mut o = order(None, None);
            o.product_id = Some(product_id);
            orders.push(o);
        }
        let collection = collection(orders);

        let report = ReportEngine::new().product_frequencies(&collection);

        let rows: Vec<(Option<i64>, usize)> = report
            .products
            .iter()
            .map(|p| (p.product_id, p.frequency))
            .collect();
        assert_eq!(rows, vec![(Some(7), 3), (Some(3), 2), (Some(9), 1)]);
    }

    #[test]
    fn product_frequency_ties_break_by_product_id() {
        let mut orders = Vec::new();
        for product_id in [9, 3, 9, 3] {
            let mut o = order(None, None);
            o.product_id = Some(product_id);
            orders.push(o);
        }
        let report = ReportEngine::new().product_frequencies(&collection(orders));

        assert_eq!(report.products[0].product_id, Some(3));
        assert_eq!(report.products[1].product_id, Some(9));
    }

    #[test]
    fn high_value_filter_is_sound_and_complete() {
        let matching = order(Some("California"), Some(dec!(1500)));
        let collection = collection(vec![
            matching.clone(),
            order(Some("California"), Some(dec!(1000))), // at threshold, excluded
            order(Some("California"), None),             // no price, excluded
            order(Some("Texas"), Some(dec!(5000))),      // wrong region
            order(None, Some(dec!(5000))),               // no region
        ]);

        let report =
            ReportEngine::new().high_value_orders(&collection, "California", dec!(1000));

        assert_eq!(report.count(), 1);
        assert_eq!(report.orders, vec![matching]);
        for returned in &report.orders {
            assert!(returned.in_region("California") && returned.exceeds(dec!(1000)));
        }
    }

    #[test]
    fn top_regions_competition_ranking() {
        let mut orders = Vec::new();
        for (state, n) in [("Texas", 3), ("California", 2), ("Ohio", 2), ("Utah", 1)] {
            for _ in 0..n {
                orders.push(order(Some(state), Some(dec!(600))));
            }
        }
        orders.push(order(Some("Nevada"), Some(dec!(100)))); // below threshold

        let report = ReportEngine::new().top_regions(&collection(orders), dec!(500), 10);

        let rows: Vec<(usize, Option<&str>, usize)> = report
            .regions
            .iter()
            .map(|r| (r.rank, r.region.as_deref(), r.count))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, Some("Texas"), 3),
                (2, Some("California"), 2),
                (2, Some("Ohio"), 2),
                (4, Some("Utah"), 1),
            ]
        );
    }

    #[test]
    fn top_regions_truncates_to_limit_with_nondecreasing_ranks() {
        let mut orders = Vec::new();
        for i in 0..15 {
            let name = format!("State{i:02}");
            for _ in 0..=i {
                orders.push(order(Some(name.as_str()), Some(dec!(600))));
            }
        }

        let report = ReportEngine::new().top_regions(&collection(orders), dec!(500), 10);

        assert_eq!(report.regions.len(), 10);
        for pair in report.regions.windows(2) {
            assert!(pair[0].rank <= pair[1].rank);
        }
    }

    #[test]
    fn city_and_date_require_exact_string_equality() {
        let mut matching = order(Some("New York"), Some(dec!(10)));
        matching.city = Some("New York City".to_string());
        matching.order_date = Some("10/21/2021".to_string());

        let mut other_date = matching.clone();
        other_date.order_date = Some("10/22/2021".to_string());
        let mut other_city = matching.clone();
        other_city.city = Some("Buffalo".to_string());

        let collection = collection(vec![matching.clone(), other_date, other_city]);
        let engine = ReportEngine::new();

        let report = engine.orders_by_city_and_date(&collection, "New York City", "10/21/2021");
        assert_eq!(report.orders, vec![matching]);

        let none = engine.orders_by_city_and_date(&collection, "New York City", "01/01/1999");
        assert_eq!(none.count(), 0);
        assert!(none.orders.is_empty());
    }

    #[test]
    fn reference_scenario_end_to_end() {
        let collection = collection(vec![
            order(Some("California"), Some(dec!(1500))),
            order(Some("California"), Some(dec!(500))),
            order(Some("Texas"), Some(dec!(2500))),
        ]);
        let engine = ReportEngine::new();

        let high_value = engine.high_value_orders(&collection, "California", dec!(1000));
        assert_eq!(high_value.count(), 1);
        assert_eq!(high_value.orders[0].total_price, Some(dec!(1500)));

        let premium = engine.premium_orders(&collection, "Texas", dec!(2000));
        assert_eq!(premium.count(), 1);
        assert_eq!(premium.orders[0].total_price, Some(dec!(2500)));

        let totals = engine.region_totals(&collection);
        assert_eq!(totals.total, 3);
        let rows: Vec<(Option<&str>, usize)> = totals
            .per_region
            .iter()
            .map(|row| (row.region.as_deref(), row.count))
            .collect();
        assert_eq!(rows, vec![(Some("Texas"), 1), (Some("California"), 2)]);
    }
}
