//! Order entity - one customer order with its line items
//!
//! Field names follow the upstream order feed (camelCase JSON). An order has
//! no explicit id; identity is positional within the order source.

use serde::{Deserialize, Serialize};

/// One product reference within a customer order.
///
/// The feed models a line item as a bare product id, implicitly one box per
/// line. Richer feeds may carry an explicit per-line quantity; when absent
/// it defaults to 1 and the behavior is identical to the bare form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,

    #[serde(default = "default_line_quantity")]
    pub quantity: u32,
}

fn default_line_quantity() -> u32 {
    1
}

impl LineItem {
    /// Line item for a single unit of a product.
    pub fn new(product_id: impl Into<String>) -> Self {
        Self {
            product_id: product_id.into(),
            quantity: 1,
        }
    }

    /// Line item with an explicit unit count.
    pub fn with_quantity(product_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A customer order: a calendar date plus the gift boxes purchased.
///
/// `order_date` is an opaque "YYYY-MM-DD"-like string. It is never parsed by
/// the core; pick-list filtering is exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_date: String,
    pub line_items: Vec<LineItem>,
}

impl Order {
    pub fn new(order_date: impl Into<String>, line_items: Vec<LineItem>) -> Self {
        Self {
            order_date: order_date.into(),
            line_items,
        }
    }

    /// True if this order was placed on `date` (exact string match).
    pub fn is_for_date(&self, date: &str) -> bool {
        self.order_date == date
    }
}
