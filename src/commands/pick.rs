//! Pick command handler
//!
//! Computes and renders the warehouse pick list for one date.

use std::path::PathBuf;

use anyhow::Result;

use boxpick::build_pick_list;

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::pick::{render_pick_header, render_pick_list, render_pick_summary};

pub fn cmd_pick(
    date: Option<String>,
    data: Option<PathBuf>,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = super::load_config(&cwd, json);
    let ui = UiContext::new(json, verbose, color, &config);

    let date = date.unwrap_or_else(|| config.pick.default_date.clone());
    super::validate_date(&date)?;

    let data_dir = super::resolve_data_dir(data, &config);
    let (orders, catalog) = super::load_feed(&data_dir)?;

    let pick_list = build_pick_list(&orders, &catalog, &date);

    if json {
        let out = serde_json::json!({
            "event": "pick",
            "date": date,
            "orderCount": pick_list.order_count,
            "itemCount": pick_list.item_count,
            "uniqueProducts": pick_list.unique_products(),
            "pickList": pick_list.entries,
        });
        return crate::ui::json::emit(out);
    }

    print!(
        "{}",
        render_pick_header(&date, &data_dir.display().to_string(), ui.color, ui.unicode)
    );

    if ui.verbose > 0 {
        println!(
            "{}",
            ColoredText::dim(format!(
                "Loaded {} orders, {} catalog entries",
                orders.len(),
                catalog.len()
            ))
            .render(ui.color)
        );
    }

    println!();
    print!("{}", render_pick_list(&pick_list, &date, ui.color, ui.unicode));
    println!();
    print!("{}", render_pick_summary(&pick_list, ui.color, ui.unicode));

    Ok(())
}
