use std::collections::HashMap;

use crate::models::{Meal, ShoppingItem};

/// Merge ingredients across meals into a deduplicated shopping list.
///
/// Items are keyed by lowercased ingredient name and emitted in first-use
/// order. Cost accumulates on every occurrence, including repeats within a
/// single meal; the `meals` list records each contributing meal name once,
/// deduplicated by exact string.
pub fn build_shopping_list(meals: &[Meal]) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for meal in meals {
        for ingredient in &meal.ingredients {
            let key = ingredient.key();

            match index.get(&key) {
                Some(&i) => {
                    let item = &mut items[i];
                    item.cost += ingredient.cost;
                    if !item.meals.contains(&meal.name) {
                        item.meals.push(meal.name.clone());
                    }
                }
                None => {
                    index.insert(key, items.len());
                    items.push(ShoppingItem {
                        name: ingredient.name.clone(),
                        quantity: ingredient.quantity.clone(),
                        cost: ingredient.cost,
                        meals: vec![meal.name.clone()],
                    });
                }
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ingredient, Macros};

    fn ing(name: &str, quantity: &str, cost: f64) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity: quantity.to_string(),
            cost,
        }
    }

    fn meal(name: &str, ingredients: Vec<Ingredient>) -> Meal {
        Meal {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            ingredients,
            macros: Macros::default(),
            cost: 0.0,
            instructions: vec![],
        }
    }

    #[test]
    fn test_merges_shared_ingredient_across_meals() {
        let meals = vec![
            meal("Salad", vec![ing("Olive Oil", "15ml", 5.0)]),
            meal("Egg Bowl", vec![ing("Olive Oil", "10ml", 3.0)]),
        ];

        let list = build_shopping_list(&meals);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Olive Oil");
        assert_eq!(list[0].cost, 8.0);
        assert_eq!(list[0].meals, vec!["Salad", "Egg Bowl"]);
    }

    #[test]
    fn test_merge_is_case_insensitive_keeps_first_spelling() {
        let meals = vec![
            meal("A", vec![ing("Olive Oil", "15ml", 5.0)]),
            meal("B", vec![ing("olive oil", "10ml", 3.0)]),
        ];

        let list = build_shopping_list(&meals);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].name, "Olive Oil");
        assert_eq!(list[0].cost, 8.0);
    }

    #[test]
    fn test_repeat_within_one_meal_adds_cost_once_lists_meal_once() {
        let meals = vec![meal(
            "Double Lemon",
            vec![ing("Lemon", "1", 3.0), ing("Lemon", "1", 3.0)],
        )];

        let list = build_shopping_list(&meals);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].cost, 6.0);
        assert_eq!(list[0].meals, vec!["Double Lemon"]);
    }

    #[test]
    fn test_output_is_first_insertion_order() {
        let meals = vec![
            meal("A", vec![ing("Quinoa", "100g", 15.0), ing("Lemon", "1", 3.0)]),
            meal("B", vec![ing("Carrot", "1", 2.0), ing("Quinoa", "50g", 8.0)]),
        ];

        let list = build_shopping_list(&meals);
        let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Quinoa", "Lemon", "Carrot"]);
    }

    #[test]
    fn test_empty_meals_yield_empty_list() {
        assert!(build_shopping_list(&[]).is_empty());
    }

    #[test]
    fn test_quantity_keeps_first_occurrence() {
        let meals = vec![
            meal("A", vec![ing("Greek Yogurt", "50g", 7.0)]),
            meal("B", vec![ing("Greek Yogurt", "200g", 20.0)]),
        ];

        let list = build_shopping_list(&meals);
        assert_eq!(list[0].quantity, "50g");
        assert_eq!(list[0].cost, 27.0);
    }
}
