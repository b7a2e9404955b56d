//! Pick-list aggregation service
//!
//! Pure domain logic: turns the order feed plus the catalog into the
//! consolidated list of physical items to retrieve for one date. No I/O, no
//! shared state, no error conditions - missing catalog entries and
//! non-matching dates degrade to "contributes nothing".

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::entities::{Catalog, Order};

/// One row of the pick list: a physical item and the total units to pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickListEntry {
    pub product_name: String,
    pub quantity: u64,
}

/// The consolidated pick list for one date, plus its summary counters.
///
/// `entries` is strictly ascending by product name with each name appearing
/// at most once. `item_count` always equals the sum of entry quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickList {
    pub entries: Vec<PickListEntry>,
    pub order_count: usize,
    pub item_count: u64,
}

impl PickList {
    /// True when no order matched the target date or every matching line
    /// item resolved to nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct physical products on the list.
    pub fn unique_products(&self) -> usize {
        self.entries.len()
    }
}

/// Build the warehouse pick list for `target_date`.
///
/// Orders are filtered by exact string equality on their date - no parsing,
/// no range matching. A caller passing a differently formatted date simply
/// gets zero matches. Line items whose product id is absent from the catalog
/// are skipped silently, but their order still counts toward `order_count`.
///
/// Deterministic: the accumulator is an ordered map keyed by product name,
/// so equal inputs always produce the identical result.
pub fn build_pick_list(orders: &[Order], catalog: &Catalog, target_date: &str) -> PickList {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    let mut order_count = 0;
    let mut item_count: u64 = 0;

    for order in orders {
        if !order.is_for_date(target_date) {
            continue;
        }
        order_count += 1;

        for line_item in &order.line_items {
            let Some(items) = catalog.contents(&line_item.product_id) else {
                continue;
            };

            for item in items {
                let units = u64::from(item.quantity) * u64::from(line_item.quantity);
                *counts.entry(item.product_name.as_str()).or_insert(0) += units;
                item_count += units;
            }
        }
    }

    let entries = counts
        .into_iter()
        .map(|(product_name, quantity)| PickListEntry {
            product_name: product_name.to_string(),
            quantity,
        })
        .collect();

    PickList {
        entries,
        order_count,
        item_count,
    }
}

/// Distinct order dates present in the feed, ascending, with how many
/// orders fall on each. Navigation aid for date selection.
pub fn order_dates(orders: &[Order]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for order in orders {
        *counts.entry(order.order_date.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(date, count)| (date.to_string(), count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CatalogItem, LineItem};

    fn box1_catalog() -> Catalog {
        [(
            "BOX1".to_string(),
            vec![CatalogItem::new("Candle", 2), CatalogItem::new("Mug", 1)],
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn single_order_single_box() {
        let orders = vec![Order::new("2024-01-15", vec![LineItem::new("BOX1")])];

        let result = build_pick_list(&orders, &box1_catalog(), "2024-01-15");

        assert_eq!(result.order_count, 1);
        assert_eq!(result.item_count, 3);
        assert_eq!(
            result.entries,
            vec![
                PickListEntry {
                    product_name: "Candle".to_string(),
                    quantity: 2,
                },
                PickListEntry {
                    product_name: "Mug".to_string(),
                    quantity: 1,
                },
            ]
        );
    }

    #[test]
    fn non_matching_date_yields_empty_result() {
        let orders = vec![Order::new("2024-01-15", vec![LineItem::new("BOX1")])];

        let result = build_pick_list(&orders, &box1_catalog(), "2024-01-16");

        assert!(result.is_empty());
        assert_eq!(result.order_count, 0);
        assert_eq!(result.item_count, 0);
    }

    #[test]
    fn unknown_product_counts_the_order_but_picks_nothing() {
        let orders = vec![Order::new("2024-01-15", vec![LineItem::new("UNKNOWN")])];

        let result = build_pick_list(&orders, &Catalog::new(), "2024-01-15");

        assert!(result.entries.is_empty());
        assert_eq!(result.order_count, 1);
        assert_eq!(result.item_count, 0);
    }

    #[test]
    fn two_orders_same_date_double_the_quantities() {
        let orders = vec![
            Order::new("2024-01-15", vec![LineItem::new("BOX1")]),
            Order::new("2024-01-15", vec![LineItem::new("BOX1")]),
        ];

        let result = build_pick_list(&orders, &box1_catalog(), "2024-01-15");

        assert_eq!(result.order_count, 2);
        assert_eq!(result.item_count, 6);
        assert_eq!(
            result.entries,
            vec![
                PickListEntry {
                    product_name: "Candle".to_string(),
                    quantity: 4,
                },
                PickListEntry {
                    product_name: "Mug".to_string(),
                    quantity: 2,
                },
            ]
        );
    }

    #[test]
    fn line_item_quantity_multiplies_box_contents() {
        let orders = vec![Order::new(
            "2024-01-15",
            vec![LineItem::with_quantity("BOX1", 3)],
        )];

        let result = build_pick_list(&orders, &box1_catalog(), "2024-01-15");

        assert_eq!(result.item_count, 9);
        assert_eq!(result.entries[0].quantity, 6); // Candle
        assert_eq!(result.entries[1].quantity, 3); // Mug
    }

    #[test]
    fn shared_items_across_boxes_merge_into_one_entry() {
        let catalog: Catalog = [
            (
                "BOX1".to_string(),
                vec![CatalogItem::new("Candle", 2), CatalogItem::new("Mug", 1)],
            ),
            (
                "BOX2".to_string(),
                vec![CatalogItem::new("Candle", 1), CatalogItem::new("Socks", 2)],
            ),
        ]
        .into_iter()
        .collect();

        let orders = vec![Order::new(
            "2024-01-15",
            vec![LineItem::new("BOX1"), LineItem::new("BOX2")],
        )];

        let result = build_pick_list(&orders, &catalog, "2024-01-15");

        assert_eq!(result.order_count, 1);
        assert_eq!(result.item_count, 6);
        assert_eq!(
            result.entries,
            vec![
                PickListEntry {
                    product_name: "Candle".to_string(),
                    quantity: 3,
                },
                PickListEntry {
                    product_name: "Mug".to_string(),
                    quantity: 1,
                },
                PickListEntry {
                    product_name: "Socks".to_string(),
                    quantity: 2,
                },
            ]
        );
    }

    #[test]
    fn other_dates_contribute_nothing() {
        let orders = vec![
            Order::new("2024-01-14", vec![LineItem::new("BOX1")]),
            Order::new("2024-01-15", vec![LineItem::new("BOX1")]),
            Order::new("2024-01-16", vec![LineItem::new("BOX1")]),
        ];

        let result = build_pick_list(&orders, &box1_catalog(), "2024-01-15");

        assert_eq!(result.order_count, 1);
        assert_eq!(result.item_count, 3);
    }

    #[test]
    fn empty_orders_yield_empty_result() {
        let result = build_pick_list(&[], &box1_catalog(), "2024-01-15");
        assert!(result.is_empty());
        assert_eq!(result.order_count, 0);
        assert_eq!(result.item_count, 0);
        assert_eq!(result.unique_products(), 0);
    }

    #[test]
    fn order_dates_are_distinct_sorted_and_counted() {
        let orders = vec![
            Order::new("2024-01-15", vec![]),
            Order::new("2024-01-14", vec![]),
            Order::new("2024-01-15", vec![]),
        ];

        assert_eq!(
            order_dates(&orders),
            vec![
                ("2024-01-14".to_string(), 1),
                ("2024-01-15".to_string(), 2),
            ]
        );
    }

    #[test]
    fn order_dates_of_empty_feed_is_empty() {
        assert!(order_dates(&[]).is_empty());
    }

    #[test]
    fn inputs_are_not_mutated() {
        let orders = vec![Order::new("2024-01-15", vec![LineItem::new("BOX1")])];
        let catalog = box1_catalog();
        let orders_before = orders.clone();
        let catalog_before = catalog.clone();

        let first = build_pick_list(&orders, &catalog, "2024-01-15");
        let second = build_pick_list(&orders, &catalog, "2024-01-15");

        assert_eq!(first, second);
        assert_eq!(orders, orders_before);
        assert_eq!(catalog, catalog_before);
    }
}
