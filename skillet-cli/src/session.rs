//! The interactive session: recipe details, the ingredient entry loop,
//! the cost summary and the optional report export.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use skillet_core::{Ingredient, Recipe};
use tracing::debug;

use crate::prompts::Prompter;
use crate::report;
use crate::table;

/// Sentinel the user types to finish entering ingredients.
const DONE: &str = "xxx";

const INSTRUCTIONS: &str = "\
This program asks you for...
  - the name of the recipe
  - the number of servings you are going to prepare
  - the name of each ingredient
  - the amount used for each ingredient
  - the amount bought for each ingredient
  - the price paid for the amount bought

Enter amounts together with their unit; bare numbers work for counted
items like eggs. All units are metric.

Available units:
  mass   - g, kg
  volume - ml, l, tsp (5ml), tbsp (15ml), cup (250ml)

The program prints a table with the cost to make for each ingredient,
the total cost to make and the cost per serving, and can record the
summary in a text file.
";

pub fn run<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    out_dir: &Path,
    no_instructions: bool,
) -> Result<()> {
    prompter.say("=== Recipe Cost Calculator ===\n")?;

    if !no_instructions && prompter.yes_no("Do you want to see the instructions? ")? {
        prompter.say(INSTRUCTIONS)?;
    }

    loop {
        let recipe = enter_recipe(prompter)?;
        let (total, per_serving) = recipe.totals()?;

        prompter.say("\n=== Recipe Cost Table ===")?;
        prompter.say(&format!("Recipe Name: {}", recipe.name))?;
        prompter.say(&format!("Servings: {}\n", recipe.servings))?;
        prompter.say(&table::render(&recipe.ingredients))?;
        prompter.say(&format!(
            "\nTotal Cost to Make: {}",
            table::currency(total)
        ))?;
        prompter.say(&format!("Per Serve: {}\n", table::currency(per_serving)))?;

        if prompter.yes_no("Do you want to record this information in a file (y/n)? ")? {
            let path = report::export(&recipe, total, per_serving, out_dir)?;
            prompter.say(&format!("Saved the report to {}.", path.display()))?;
        }

        prompter.say("\nThank you for trying out the Recipe Cost Calculator!\n")?;

        let again = prompter
            .not_blank("Enter R to return to the start of the program (any other letter to close): ")?;
        if !again.eq_ignore_ascii_case("r") {
            return Ok(());
        }
        prompter.say("")?;
    }
}

fn enter_recipe<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Recipe> {
    prompter.say("=== Recipe Details ===")?;
    let name = prompter.not_blank("Recipe Name: ")?;
    let servings = prompter.positive_int("Servings: ")?;
    prompter.say("")?;

    let mut recipe = Recipe::new(name, servings);

    prompter.say("--- Ingredient Details ---")?;
    loop {
        let name = prompter.not_blank(&format!("Ingredient Name (or '{DONE}' to finish): "))?;

        if name.eq_ignore_ascii_case(DONE) {
            if recipe.ingredients.is_empty() {
                prompter.say("You must enter at least one ingredient!")?;
                continue;
            }
            break;
        }

        let used = prompter.quantity("Amount Used: ")?;
        // The bought amount comes back unit-compatible with `used` and at
        // least as large, so costing below cannot fail.
        let bought = prompter.bought_quantity("Amount Bought: ", &used)?;
        let price = prompter.price("Price Paid: ")?;
        prompter.say("")?;

        debug!(ingredient = %name, "costed ingredient");
        recipe
            .ingredients
            .push(Ingredient::new(name, used, bought, price)?);
    }

    Ok(recipe)
}
