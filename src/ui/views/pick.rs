use boxpick::PickList;
use chrono::NaiveDate;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

pub fn render_pick_header(
    date: &str,
    data_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Pick, "Boxpick Pick List");
    header.add("Date", pretty_date(date));
    header.add("Data", data_dir);
    header.render(supports_color, supports_unicode)
}

/// Render the pick-list table, or the explicit empty-state line when no
/// order matched the date. Never renders an empty table.
pub fn render_pick_list(
    pick_list: &PickList,
    date: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if pick_list.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim(format!("No orders found for {}", pretty_date(date)))
                .render(supports_color)
        );
    }

    let mut table = Table::new("Product Name", "Quantity");
    for entry in &pick_list.entries {
        table.add_row(entry.product_name.as_str(), entry.quantity.to_string());
    }
    table.render(supports_color, supports_unicode)
}

pub fn render_pick_summary(
    pick_list: &PickList,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if pick_list.is_empty() {
        ResultSummary::partial("No items to pick")
    } else {
        ResultSummary::success("Pick list ready")
    };

    summary.add_stat("total orders", pick_list.order_count as u64);
    summary.add_stat("total items", pick_list.item_count);
    summary.add_stat("unique products", pick_list.unique_products() as u64);

    summary.render(supports_color, supports_unicode)
}

/// "2024-01-15" -> "Jan 15, 2024"; anything unparsable passes through.
fn pretty_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %-d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
