//! Report assembly and text-file export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use skillet_core::Recipe;
use tracing::info;

use crate::table;

const MAX_FILENAME_LEN: usize = 34;

/// Recipe name reduced to a safe filename: spaces become underscores and
/// an `_RCC` suffix is added. Falls back to a dated default when the
/// result is too long or contains anything but letters, digits and
/// underscores.
pub fn report_filename(recipe_name: &str, today: NaiveDate) -> String {
    let candidate = format!("{}_RCC", recipe_name.replace(' ', "_"));

    let safe = candidate.len() <= MAX_FILENAME_LEN
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !safe {
        return format!("Recipe_Cost_Calculator_{}", today.format("%d_%m_%Y"));
    }
    candidate
}

/// Full report text: heading, recipe details, the ingredient grid, totals.
pub fn render_report(recipe: &Recipe, total: f64, per_serving: f64, today: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Recipe Cost Calculator ({}, {}) ===\n\n",
        recipe.name,
        today.format("%d/%m/%Y")
    ));
    out.push_str(&format!("Recipe Name: {}\n", recipe.name));
    out.push_str(&format!("Amount of Servings: {}\n\n", recipe.servings));
    out.push_str("--- Ingredient Details ---\n");
    out.push_str(&table::render(&recipe.ingredients));
    out.push_str("\n\n");
    out.push_str(&format!("Total Cost to Make: {}\n", table::currency(total)));
    out.push_str(&format!(
        "Cost Per Serve: {}\n",
        table::currency(per_serving)
    ));
    out.push_str("\nThank you for trying out the Recipe Cost Calculator!\n");
    out
}

/// Write the report under `out_dir`, returning the path written.
pub fn export(recipe: &Recipe, total: f64, per_serving: f64, out_dir: &Path) -> Result<PathBuf> {
    let today = Local::now().date_naive();
    let path = out_dir.join(format!("{}.txt", report_filename(&recipe.name, today)));

    fs::write(&path, render_report(recipe, total, per_serving, today))
        .with_context(|| format!("failed to write report to {}", path.display()))?;

    info!(path = %path.display(), "report written");
    Ok(path)
}
