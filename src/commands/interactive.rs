//! Interactive mode - browse pick lists by date
//!
//! Entered when no subcommand is given. Presents a fuzzy-select over the
//! dates present in the order feed and recomputes the pick list once per
//! selection; Esc exits.

use anyhow::Result;
use dialoguer::FuzzySelect;
use is_terminal::IsTerminal;

use boxpick::{build_pick_list, order_dates};

use crate::cli::ColorWhen;
use crate::ui::context::UiContext;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::pick::{render_pick_list, render_pick_summary};

pub fn cmd_interactive(json: bool, verbose: u8, color: Option<ColorWhen>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = super::load_config(&cwd, json);
    let ui = UiContext::new(json, verbose, color, &config);

    if json {
        let out = serde_json::json!({
            "event": "interactive",
            "state": "noninteractive",
            "hint": "use `boxpick pick --json --date YYYY-MM-DD`",
        });
        return crate::ui::json::emit(out);
    }

    if !std::io::stdin().is_terminal() {
        println!("No command provided.");
        println!("Try: `boxpick pick --date YYYY-MM-DD` or `boxpick --help`");
        return Ok(());
    }

    let data_dir = super::resolve_data_dir(None, &config);
    let (orders, catalog) = super::load_feed(&data_dir)?;

    let dates = order_dates(&orders);
    if dates.is_empty() {
        println!(
            "{}",
            ColoredText::dim("No orders in the order feed").render(ui.color)
        );
        return Ok(());
    }

    let items: Vec<String> = dates
        .iter()
        .map(|(date, count)| format!("{} ({} orders)", date, count))
        .collect();

    let initial = dates
        .iter()
        .position(|(date, _)| *date == config.pick.default_date)
        .unwrap_or(0);

    loop {
        let Some(selection) = FuzzySelect::new()
            .with_prompt("Pick a date (Esc to quit)")
            .items(&items)
            .default(initial)
            .interact_opt()?
        else {
            break;
        };

        let (date, _) = &dates[selection];
        let pick_list = build_pick_list(&orders, &catalog, date);

        println!();
        print!("{}", render_pick_list(&pick_list, date, ui.color, ui.unicode));
        println!();
        print!("{}", render_pick_summary(&pick_list, ui.color, ui.unicode));
        println!();
    }

    Ok(())
}
