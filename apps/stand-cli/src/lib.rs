//! # stand-cli: Command-Line Register
//!
//! Thin front end over `stand-core`. Everything here is argument plumbing;
//! prices, totals and receipt text all come from the core crate.
//!
//! ```text
//! ┌──────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  clap    │──►│ parse_drink  │──►│ Order        │──►│ render       │──► stdout
//! │  Cli     │   │ parse_food   │   │ (stand-core) │   │ text | json  │
//! └──────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//!      ▲
//!      │ StandConfig: defaults → stand.toml → STAND_* env
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use serde::Serialize;
use tracing::info;

use stand_core::{menu, Order, OrderSummary, TaxRate};

use crate::cli::{parse_drink, parse_food, Cli, Command, OrderArgs};
use crate::config::{OutputFormat, StandConfig};
pub use crate::error::{CliError, CliResult};

// =============================================================================
// Order Building
// =============================================================================

/// Builds an order from `--drink` and `--food` arguments.
///
/// Drinks go on first, then foods, each in argument order. The first bad
/// item aborts the whole order.
pub fn build_order(args: &OrderArgs, tax_rate: TaxRate) -> CliResult<Order> {
    if args.is_empty() {
        return Err(CliError::EmptyOrder);
    }

    let mut order = Order::with_tax_rate(tax_rate);
    for item in &args.drinks {
        order.add_item(parse_drink(item)?);
    }
    for item in &args.foods {
        order.add_item(parse_food(item)?);
    }

    info!(
        order_id = %order.id(),
        items = order.item_count(),
        subtotal = %order.subtotal(),
        "Order built"
    );
    Ok(order)
}

// =============================================================================
// Rendering
// =============================================================================

#[derive(Serialize)]
struct JsonOrder {
    #[serde(flatten)]
    summary: OrderSummary,
    receipt: String,
}

/// Renders an order in the requested format.
pub fn render(order: &Order, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(order.receipt()),
        OutputFormat::Json => {
            let out = JsonOrder {
                summary: order.summary(),
                receipt: order.receipt(),
            };
            Ok(serde_json::to_string_pretty(&out)? + "\n")
        }
    }
}

/// Runs a parsed command and returns what should be printed on stdout.
pub fn run(cli: &Cli, config: &StandConfig) -> CliResult<String> {
    match &cli.command {
        Command::Menu => Ok(menu::price_list()),
        Command::Order(args) => {
            let order = build_order(args, config.tax_rate())?;
            let format = if args.json {
                OutputFormat::Json
            } else {
                config.output
            };
            render(&order, format)
        }
    }
}
