//! Test fixtures - reusable JSON feed constants for tests.

/// Four orders across three dates. `MYSTERY-BOX` has no catalog entry.
pub const ORDERS_JSON: &str = r#"[
  {"orderDate": "2024-01-15", "lineItems": [{"productId": "BOX1"}]},
  {"orderDate": "2024-01-15", "lineItems": [{"productId": "BOX1"}]},
  {"orderDate": "2024-01-16", "lineItems": [{"productId": "BOX2"}]},
  {"orderDate": "2024-01-17", "lineItems": [{"productId": "MYSTERY-BOX"}]}
]"#;

/// Catalog for BOX1 and BOX2 only.
pub const CATALOG_JSON: &str = r#"{
  "BOX1": [
    {"productName": "Candle", "quantity": 2},
    {"productName": "Mug", "quantity": 1}
  ],
  "BOX2": [
    {"productName": "Socks", "quantity": 2}
  ]
}"#;

/// An order feed with no orders at all.
pub const EMPTY_ORDERS_JSON: &str = "[]";

/// A catalog with no boxes.
pub const EMPTY_CATALOG_JSON: &str = "{}";

/// A feed using an explicit per-line quantity.
pub const QUANTITY_ORDERS_JSON: &str = r#"[
  {"orderDate": "2024-01-15", "lineItems": [{"productId": "BOX1", "quantity": 3}]}
]"#;

/// Config with a typoed key (for warning tests).
pub const CONFIG_WITH_TYPO: &str = r#"
[pick]
defualt_date = "2024-01-16"
"#;
