//! Property tests for pick-list aggregation.

use proptest::prelude::*;

use boxpick::{build_pick_list, order_dates, Catalog, CatalogItem, LineItem, Order};

const DATES: &[&str] = &["2024-01-15", "2024-01-16", "2024-01-17"];
const KNOWN_BOX_IDS: &[&str] = &["BOX-A", "BOX-B", "BOX-C"];
const BOX_IDS: &[&str] = &["BOX-A", "BOX-B", "BOX-C", "BOX-MISSING"];
const PRODUCTS: &[&str] = &["Blanket", "Candle", "Mug", "Socks", "Tea Tin"];

fn date() -> impl Strategy<Value = String> {
    proptest::sample::select(DATES).prop_map(str::to_string)
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (proptest::sample::select(BOX_IDS), 1u32..4)
        .prop_map(|(id, quantity)| LineItem::with_quantity(id, quantity))
}

fn order() -> impl Strategy<Value = Order> {
    (date(), proptest::collection::vec(line_item(), 0..4))
        .prop_map(|(order_date, line_items)| Order::new(order_date, line_items))
}

fn orders() -> impl Strategy<Value = Vec<Order>> {
    proptest::collection::vec(order(), 0..12)
}

fn catalog_item() -> impl Strategy<Value = CatalogItem> {
    (proptest::sample::select(PRODUCTS), 1u32..5)
        .prop_map(|(name, quantity)| CatalogItem::new(name, quantity))
}

fn catalog() -> impl Strategy<Value = Catalog> {
    proptest::collection::hash_map(
        proptest::sample::select(KNOWN_BOX_IDS).prop_map(str::to_string),
        proptest::collection::vec(catalog_item(), 1..4),
        0..=3,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Equal inputs always produce the identical pick list.
    #[test]
    fn property_build_pick_list_is_deterministic(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let first = build_pick_list(&orders, &catalog, &date);
        let second = build_pick_list(&orders, &catalog, &date);
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: `item_count` equals the sum of entry quantities.
    #[test]
    fn property_item_count_matches_entry_sum(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let pick_list = build_pick_list(&orders, &catalog, &date);
        let total: u64 = pick_list.entries.iter().map(|e| e.quantity).sum();
        prop_assert_eq!(pick_list.item_count, total);
    }

    /// PROPERTY: `order_count` counts exactly the orders whose date matches
    /// the target string.
    #[test]
    fn property_order_count_matches_date_filter(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let pick_list = build_pick_list(&orders, &catalog, &date);
        let expected = orders.iter().filter(|o| o.order_date == date).count();
        prop_assert_eq!(pick_list.order_count, expected);
    }

    /// PROPERTY: An extra order holding only an unknown box id raises the
    /// order count by one and changes nothing else.
    #[test]
    fn property_unknown_boxes_contribute_no_items(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let base = build_pick_list(&orders, &catalog, &date);

        let mut extended = orders.clone();
        extended.push(Order::new(date.clone(), vec![LineItem::new("BOX-MISSING")]));
        let with_unknown = build_pick_list(&extended, &catalog, &date);

        prop_assert_eq!(with_unknown.order_count, base.order_count + 1);
        prop_assert_eq!(with_unknown.item_count, base.item_count);
        prop_assert_eq!(with_unknown.entries, base.entries);
    }

    /// PROPERTY: Entries are strictly ascending by product name, so every
    /// name appears at most once.
    #[test]
    fn property_entries_are_strictly_sorted_and_unique(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let pick_list = build_pick_list(&orders, &catalog, &date);
        for pair in pick_list.entries.windows(2) {
            prop_assert!(pair[0].product_name < pair[1].product_name);
        }
    }

    /// PROPERTY: Every entry carries a positive quantity; zero-unit rows
    /// never appear.
    #[test]
    fn property_entries_have_positive_quantities(
        orders in orders(),
        catalog in catalog(),
        date in date(),
    ) {
        let pick_list = build_pick_list(&orders, &catalog, &date);
        for entry in &pick_list.entries {
            prop_assert!(entry.quantity > 0);
        }
    }

    /// PROPERTY: A date no order carries yields the empty pick list with
    /// zeroed counters.
    #[test]
    fn property_unmatched_date_yields_empty_result(
        orders in orders(),
        catalog in catalog(),
    ) {
        let pick_list = build_pick_list(&orders, &catalog, "1999-12-31");
        prop_assert!(pick_list.is_empty());
        prop_assert_eq!(pick_list.order_count, 0);
        prop_assert_eq!(pick_list.item_count, 0);
    }

    /// PROPERTY: `order_dates` counts every order exactly once and returns
    /// strictly ascending distinct dates.
    #[test]
    fn property_order_dates_partition_the_feed(
        orders in orders(),
    ) {
        let dates = order_dates(&orders);

        let total: usize = dates.iter().map(|(_, count)| count).sum();
        prop_assert_eq!(total, orders.len());

        for pair in dates.windows(2) {
            prop_assert!(pair[0].0 < pair[1].0);
        }
    }
}
