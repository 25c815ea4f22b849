//! End-to-end costing scenarios through the public API: parse the raw
//! amounts the way the shell would, then cost and aggregate.

use skillet_core::{
    ingredient_cost, CostingError, Dimension, Ingredient, Quantity, Recipe,
};

fn quantity(raw: &str) -> Quantity {
    Quantity::parse(raw).unwrap()
}

#[test]
fn flour_from_a_kilo_bag() {
    // used = 200 g, bought = 1 kg at $5.00 -> converted bought = 1000 g
    // -> cost = 5.00 * (200 / 1000) = $1.00
    let ingredient =
        Ingredient::new("flour", quantity("200g"), quantity("1kg"), 5.0).unwrap();
    assert!((ingredient.cost_to_make - 1.0).abs() < 1e-9);
}

#[test]
fn whole_pack_of_eggs() {
    // used = 4 (no unit), bought = 4 (no unit) at $2.00 -> full price
    let ingredient = Ingredient::new("eggs", quantity("4"), quantity("4"), 2.0).unwrap();
    assert_eq!(ingredient.cost_to_make, 2.0);
}

#[test]
fn recipe_totals_across_ingredients() {
    // costs 1.00 and 2.50 over 5 servings -> total 3.50, per serve 0.70
    let mut recipe = Recipe::new("Shortbread", 5);
    recipe
        .ingredients
        .push(Ingredient::new("flour", quantity("200g"), quantity("1kg"), 5.0).unwrap());
    recipe
        .ingredients
        .push(Ingredient::new("butter", quantity("250g"), quantity("500g"), 5.0).unwrap());

    let (total, per_serving) = recipe.totals().unwrap();
    assert!((total - 3.5).abs() < 1e-9);
    assert!((per_serving - 0.7).abs() < 1e-9);
}

#[test]
fn volume_against_mass_fails_before_conversion() {
    let result = ingredient_cost(&quantity("500ml"), &quantity("1kg"), 5.0);
    assert_eq!(
        result,
        Err(CostingError::IncompatibleUnits {
            expected: Dimension::Volume,
            found: Dimension::Mass,
        })
    );
}

#[test]
fn spoon_units_convert_through_millilitres() {
    // used = 3 tbsp (45 ml), bought = 1 cup (250 ml) at $2.00
    // -> cost = 2.00 * 45 / 250 = $0.36
    let ingredient =
        Ingredient::new("oil", quantity("3 tbsp"), quantity("1 cup"), 2.0).unwrap();
    assert!((ingredient.cost_to_make - 0.36).abs() < 1e-9);
}
