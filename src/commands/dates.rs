//! Dates command handler
//!
//! Lists the distinct order dates present in the order feed.

use std::path::PathBuf;

use anyhow::Result;

use boxpick::{order_dates, OrderSource};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::views::dates::{render_dates, render_dates_header};

pub fn cmd_dates(
    data: Option<PathBuf>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = super::load_config(&cwd, json);
    let ui = UiContext::new(json, verbose, color, &config);

    let data_dir = super::resolve_data_dir(data, &config);
    let orders = boxpick::JsonOrderSource::in_dir(&data_dir).load()?;
    let dates = order_dates(&orders);

    if json {
        let items: Vec<serde_json::Value> = dates
            .iter()
            .map(|(date, count)| {
                serde_json::json!({
                    "date": date,
                    "orders": count,
                })
            })
            .collect();

        let out = serde_json::json!({
            "event": "dates",
            "count": dates.len(),
            "dates": items,
        });
        return crate::ui::json::emit(out);
    }

    print!(
        "{}",
        render_dates_header(&data_dir.display().to_string(), ui.color, ui.unicode)
    );
    println!();
    print!("{}", render_dates(&dates, ui.color, ui.unicode));

    Ok(())
}
