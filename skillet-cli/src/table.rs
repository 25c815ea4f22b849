//! Plain-text grid rendering for the recipe cost summary.

use skillet_core::Ingredient;

const HEADERS: [&str; 5] = [
    "Ingredient Name",
    "Amount Used",
    "Amount Bought",
    "Price Paid",
    "Cost to Make",
];

/// Fixed two-decimal currency, e.g. `$1.00`.
pub fn currency(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Render the ingredient table as a bordered grid with per-column widths.
pub fn render(ingredients: &[Ingredient]) -> String {
    let rows: Vec<[String; 5]> = ingredients
        .iter()
        .map(|ingredient| {
            [
                ingredient.name.clone(),
                ingredient.used.to_string(),
                ingredient.bought.to_string(),
                currency(ingredient.price),
                currency(ingredient.cost_to_make),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut border = String::from("+");
    for width in widths {
        border.push_str(&"-".repeat(width + 2));
        border.push('+');
    }

    let format_row = |cells: [&str; 5]| {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths) {
            line.push_str(&format!(" {cell:<width$} |"));
        }
        line
    };

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row(HEADERS));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row([
            &row[0], &row[1], &row[2], &row[3], &row[4],
        ]));
        out.push('\n');
    }
    out.push_str(&border);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillet_core::{Ingredient, Quantity};

    fn quantity(raw: &str) -> Quantity {
        Quantity::parse(raw).unwrap()
    }

    #[test]
    fn test_currency_formatting() {
        assert_eq!(currency(1.0), "$1.00");
        assert_eq!(currency(0.7), "$0.70");
        assert_eq!(currency(12.345), "$12.35");
    }

    #[test]
    fn test_render_grid() {
        let ingredients = vec![
            Ingredient::new("flour", quantity("200g"), quantity("1kg"), 5.0).unwrap(),
            Ingredient::new("eggs", quantity("4"), quantity("12"), 3.6).unwrap(),
        ];

        let table = render(&ingredients);
        let lines: Vec<&str> = table.lines().collect();

        // border, header, border, two rows, border
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].contains("Ingredient Name"));
        assert!(lines[3].contains("flour"));
        assert!(lines[3].contains("200g"));
        assert!(lines[3].contains("$1.00"));
        assert!(lines[4].contains("$1.20"));

        // every line is the same width
        let width = lines[0].len();
        assert!(lines.iter().all(|line| line.len() == width));
    }
}
