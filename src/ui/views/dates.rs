use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::Table;

pub fn render_dates_header(
    data_dir: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Dates, "Boxpick Order Dates");
    header.add("Data", data_dir);
    header.render(supports_color, supports_unicode)
}

/// Render the distinct order dates with their order counts.
pub fn render_dates(
    dates: &[(String, usize)],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if dates.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim("No orders in the order feed").render(supports_color)
        );
    }

    let mut table = Table::new("Order Date", "Orders");
    for (date, count) in dates {
        table.add_row(date.as_str(), count.to_string());
    }
    table.render(supports_color, supports_unicode)
}
