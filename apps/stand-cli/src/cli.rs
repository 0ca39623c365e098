//! # Command-Line Arguments
//!
//! ```text
//! stand [--verbose] [--config <path>] order \
//!     --drink "hill fog,medium,lemon" \
//!     --food  "french fries,nacho cheese,chili" \
//!     [--json]
//!
//! stand menu
//! ```
//!
//! Items are comma-separated. Whitespace around each token is ignored,
//! so `"hill fog, medium, lemon"` works too; menu names themselves are still
//! matched case-insensitively by `stand-core`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use stand_core::{CoreResult, Drink, Food, ValidationError};

#[derive(Debug, Parser)]
#[command(name = "stand")]
#[command(about = "Snack stand register: price an order and print its receipt")]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file (defaults to ./stand.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build an order and print its receipt
    Order(OrderArgs),
    /// Print the menu with prices
    Menu,
}

#[derive(Debug, Default, Args)]
pub struct OrderArgs {
    /// A drink as "<base>,<size>[,<flavor>...]" (repeatable)
    #[arg(long = "drink", value_name = "ITEM")]
    pub drinks: Vec<String>,

    /// A food as "<type>[,<topping>...]" (repeatable)
    #[arg(long = "food", value_name = "ITEM")]
    pub foods: Vec<String>,

    /// Print the order summary as JSON instead of the receipt
    #[arg(long)]
    pub json: bool,
}

impl OrderArgs {
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty() && self.foods.is_empty()
    }
}

// =============================================================================
// Item Parsing
// =============================================================================

fn tokens(item: &str) -> impl Iterator<Item = &str> {
    item.split(',').map(str::trim)
}

/// Parses `"<base>,<size>[,<flavor>...]"` into a [`Drink`].
///
/// Empty flavor tokens (`"water,small,"`) are skipped.
pub fn parse_drink(item: &str) -> CoreResult<Drink> {
    let mut parts = tokens(item);
    let base = parts.next().unwrap_or_default();
    let size = parts.next().ok_or_else(|| ValidationError::Required {
        field: "drink size".to_string(),
    })?;

    let mut drink = Drink::new(base, size)?;
    for flavor in parts.filter(|token| !token.is_empty()) {
        drink.add_flavor(flavor)?;
    }
    Ok(drink)
}

/// Parses `"<type>[,<topping>...]"` into a [`Food`].
pub fn parse_food(item: &str) -> CoreResult<Food> {
    let mut parts = tokens(item);
    let food_type = parts.next().unwrap_or_default();

    let mut food = Food::new(food_type)?;
    for topping in parts.filter(|token| !token.is_empty()) {
        food.add_topping(topping)?;
    }
    Ok(food)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stand_core::{Base, CoreError, Flavor, FoodType, Size, Topping};

    #[test]
    fn test_parse_drink() {
        let drink = parse_drink("Hill Fog, medium, lemon, LEMON, mint").unwrap();
        assert_eq!(drink.base(), Base::HillFog);
        assert_eq!(drink.size(), Size::Medium);
        assert_eq!(drink.flavors(), vec![Flavor::Lemon, Flavor::Mint]);
    }

    #[test]
    fn test_parse_drink_without_flavors() {
        let drink = parse_drink("water,small,").unwrap();
        assert_eq!(drink.flavor_count(), 0);
    }

    #[test]
    fn test_parse_drink_requires_size() {
        assert_eq!(
            parse_drink("water"),
            Err(CoreError::Validation(ValidationError::Required {
                field: "drink size".to_string()
            }))
        );
    }

    #[test]
    fn test_parse_drink_reports_bad_flavor() {
        assert_eq!(
            parse_drink("sbrite,large,grape"),
            Err(CoreError::InvalidFlavor("grape".to_string()))
        );
    }

    #[test]
    fn test_parse_food() {
        let food = parse_food("french fries,nacho cheese,chili").unwrap();
        assert_eq!(food.food_type(), FoodType::FrenchFries);
        assert_eq!(food.toppings(), vec![Topping::NachoCheese, Topping::Chili]);
    }

    #[test]
    fn test_parse_food_reports_bad_type() {
        assert_eq!(
            parse_food("pizza,chili"),
            Err(CoreError::InvalidFoodType("pizza".to_string()))
        );
    }

    #[test]
    fn test_cli_parses_order_command() {
        let cli = Cli::try_parse_from([
            "stand",
            "--verbose",
            "order",
            "--drink",
            "hill fog,medium,lemon",
            "--food",
            "hotdog",
            "--food",
            "corndog,ketchup",
            "--json",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Command::Order(args) => {
                assert_eq!(args.drinks, vec!["hill fog,medium,lemon"]);
                assert_eq!(args.foods, vec!["hotdog", "corndog,ketchup"]);
                assert!(args.json);
            }
            Command::Menu => panic!("expected order command"),
        }
    }

    #[test]
    fn test_cli_parses_menu_command() {
        let cli = Cli::try_parse_from(["stand", "menu", "--config", "my.toml"]).unwrap();
        assert!(matches!(cli.command, Command::Menu));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }
}
