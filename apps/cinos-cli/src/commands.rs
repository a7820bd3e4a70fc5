//! # Commands
//!
//! Each command returns the text to print, so `main` stays a thin shell and
//! the output can be asserted on in tests.

use tracing::info;

use cinos_core::{Menu, MenuItem, Money, Order, PriceTable, ReceiptFormatter};

use crate::cli::{Cli, Command};
use crate::config::StandConfig;
use crate::error::CliResult;
use crate::order_file::OrderFile;

/// Loads config and runs the selected command.
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = StandConfig::load(cli.config.clone())?;
    run_with_config(&cli.command, &config)
}

/// Runs a command against an already loaded config.
pub fn run_with_config(command: &Command, config: &StandConfig) -> CliResult<String> {
    let menu = config.menu.to_menu()?;
    let formatter = config.receipt.formatter();

    match command {
        Command::Menu => Ok(render_menu(&menu)),
        Command::Receipt { order, json } => {
            let order = OrderFile::load(order)?.to_order(&menu)?;
            render_order(&order, &formatter, *json)
        }
        Command::Demo { json } => {
            let order = demo_order(&menu)?;
            render_order(&order, &formatter, *json)
        }
    }
}

/// The sample order: a dressed hotdog, a cola and a regular Ice Storm.
pub fn demo_order(menu: &Menu) -> CliResult<Order> {
    let mut hotdog = MenuItem::food(menu, "Hotdog")?;
    hotdog.add_topping(menu, "Ketchup");
    hotdog.add_topping(menu, "Mustard");

    let mut cola = MenuItem::drink("Cola", Money::from_cents(175))?;
    cola.add_topping(menu, "Cherry");
    cola.add_topping(menu, "Whipped Cream");

    let mut storm = MenuItem::ice_storm("Ice Cream", "Regular")?;
    storm.add_flavor(menu, "Chocolate");
    storm.add_flavor(menu, "Banana");
    storm.add_topping(menu, "Storios");

    let mut order = Order::new();
    order.add_item(hotdog);
    order.add_item(cola);
    order.add_item(storm);
    Ok(order)
}

fn render_order(order: &Order, formatter: &ReceiptFormatter, json: bool) -> CliResult<String> {
    info!(order = %order.id(), items = order.item_count(), total = %order.total(), "Order priced");

    if json {
        Ok(serde_json::to_string_pretty(&order.summary())?)
    } else {
        Ok(order.generate_receipt_with(formatter))
    }
}

/// Renders the three price lists, one indented entry per line.
pub fn render_menu(menu: &Menu) -> String {
    [
        render_table("Food", menu.food()),
        render_table("Toppings", menu.toppings()),
        render_table("Flavors", menu.flavors()),
    ]
    .join("\n\n")
}

fn render_table(title: &str, table: &PriceTable) -> String {
    let mut lines = vec![title.to_string()];
    lines.extend(
        table
            .iter()
            .map(|entry| format!("  {} - {}", entry.name, entry.cost)),
    );
    lines.join("\n")
}
