use crate::models::{Ingredient, Macros, Meal};

fn ing(name: &str, quantity: &str, cost: f64) -> Ingredient {
    Ingredient {
        name: name.to_string(),
        quantity: quantity.to_string(),
        cost,
    }
}

fn meal(
    id: &str,
    name: &str,
    ingredients: Vec<Ingredient>,
    macros: Macros,
    cost: f64,
    instructions: &[&str],
) -> Meal {
    Meal {
        id: id.to_string(),
        name: name.to_string(),
        ingredients,
        macros,
        cost,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn fit_templates() -> Vec<Meal> {
    vec![
        meal(
            "chicken-salad",
            "Grilled Chicken Salad",
            vec![
                ing("Chicken Breast", "200g", 35.0),
                ing("Mixed Greens", "100g", 12.0),
                ing("Cherry Tomatoes", "50g", 8.0),
                ing("Olive Oil", "15ml", 5.0),
                ing("Lemon", "1", 3.0),
            ],
            Macros::new(40.0, 10.0, 15.0, 330.0),
            63.0,
            &[
                "Season chicken breast with salt and pepper",
                "Grill for 6-8 minutes per side until cooked through",
                "Slice chicken and mix with greens, tomatoes",
                "Drizzle with olive oil and squeeze lemon juice",
            ],
        ),
        meal(
            "tuna-wrap",
            "Tuna Protein Wrap",
            vec![
                ing("Canned Tuna", "150g", 25.0),
                ing("Whole Wheat Tortilla", "1", 5.0),
                ing("Greek Yogurt", "50g", 7.0),
                ing("Cucumber", "50g", 3.0),
                ing("Red Onion", "30g", 2.0),
            ],
            Macros::new(35.0, 25.0, 8.0, 310.0),
            42.0,
            &[
                "Mix tuna with Greek yogurt",
                "Dice cucumber and red onion",
                "Spread tuna mixture on tortilla",
                "Add vegetables and roll up tightly",
            ],
        ),
        meal(
            "lentil-soup",
            "Turkish Red Lentil Soup",
            vec![
                ing("Red Lentils", "100g", 10.0),
                ing("Onion", "1", 3.0),
                ing("Carrot", "1", 2.0),
                ing("Tomato Paste", "15g", 4.0),
                ing("Cumin", "5g", 2.0),
            ],
            Macros::new(20.0, 40.0, 3.0, 270.0),
            21.0,
            &[
                "Sauté diced onion and carrot until soft",
                "Add tomato paste and cumin, stir for 1 minute",
                "Add lentils and 750ml water",
                "Simmer for 20-25 minutes until lentils are soft",
                "Blend until smooth and serve hot",
            ],
        ),
        meal(
            "egg-veg-bowl",
            "Vegetable Egg Bowl",
            vec![
                ing("Eggs", "3", 15.0),
                ing("Spinach", "100g", 12.0),
                ing("Bell Pepper", "1", 5.0),
                ing("Olive Oil", "10ml", 3.0),
                ing("Feta Cheese", "30g", 10.0),
            ],
            Macros::new(25.0, 8.0, 20.0, 310.0),
            45.0,
            &[
                "Sauté spinach and bell pepper in olive oil",
                "Scramble eggs and add to vegetables",
                "Cook until eggs are set",
                "Top with crumbled feta cheese",
            ],
        ),
    ]
}

pub fn bulk_templates() -> Vec<Meal> {
    vec![
        meal(
            "beef-rice-bowl",
            "Beef and Rice Power Bowl",
            vec![
                ing("Lean Ground Beef", "250g", 65.0),
                ing("Brown Rice", "150g", 8.0),
                ing("Bell Pepper", "1", 5.0),
                ing("Onion", "1", 3.0),
                ing("Olive Oil", "15ml", 5.0),
            ],
            Macros::new(45.0, 60.0, 25.0, 650.0),
            86.0,
            &[
                "Cook brown rice according to package instructions",
                "Brown ground beef in a pan with olive oil",
                "Add diced onion and bell pepper, sauté until soft",
                "Season with salt, pepper, and your favorite spices",
                "Serve beef mixture over brown rice",
            ],
        ),
        meal(
            "protein-oatmeal",
            "High-Protein Oatmeal",
            vec![
                ing("Oats", "100g", 7.0),
                ing("Protein Powder", "30g", 20.0),
                ing("Banana", "1", 4.0),
                ing("Peanut Butter", "30g", 8.0),
                ing("Milk", "250ml", 5.0),
            ],
            Macros::new(35.0, 70.0, 15.0, 550.0),
            44.0,
            &[
                "Cook oats with milk according to package instructions",
                "Stir in protein powder once oats are cooked",
                "Top with sliced banana and peanut butter",
                "Add honey or cinnamon if desired",
            ],
        ),
        meal(
            "chicken-pasta",
            "Chicken Pasta with Yogurt Sauce",
            vec![
                ing("Chicken Breast", "250g", 45.0),
                ing("Whole Wheat Pasta", "150g", 10.0),
                ing("Greek Yogurt", "100g", 12.0),
                ing("Garlic", "2 cloves", 2.0),
                ing("Olive Oil", "15ml", 5.0),
            ],
            Macros::new(50.0, 65.0, 15.0, 600.0),
            74.0,
            &[
                "Cook pasta according to package instructions",
                "Season and cook chicken breast in olive oil",
                "Mix Greek yogurt with minced garlic and salt",
                "Slice cooked chicken and toss with pasta",
                "Add yogurt sauce and mix well",
            ],
        ),
        meal(
            "turkish-kofte",
            "Turkish Köfte with Bulgur",
            vec![
                ing("Ground Lamb/Beef Mix", "250g", 60.0),
                ing("Bulgur", "150g", 8.0),
                ing("Onion", "1", 3.0),
                ing("Parsley", "30g", 5.0),
                ing("Tomato Paste", "30g", 6.0),
            ],
            Macros::new(48.0, 55.0, 30.0, 680.0),
            82.0,
            &[
                "Mix ground meat with grated onion, chopped parsley, and spices",
                "Form into small oval patties",
                "Grill or pan-fry köfte until cooked through",
                "Cook bulgur with tomato paste and water",
                "Serve köfte over bulgur pilaf",
            ],
        ),
    ]
}

pub fn healthy_templates() -> Vec<Meal> {
    vec![
        meal(
            "mediterranean-bowl",
            "Mediterranean Quinoa Bowl",
            vec![
                ing("Quinoa", "100g", 15.0),
                ing("Chickpeas", "150g", 8.0),
                ing("Cucumber", "1", 5.0),
                ing("Cherry Tomatoes", "100g", 12.0),
                ing("Olive Oil", "15ml", 5.0),
            ],
            Macros::new(18.0, 45.0, 12.0, 360.0),
            45.0,
            &[
                "Cook quinoa according to package instructions",
                "Rinse and drain chickpeas",
                "Dice cucumber and halve cherry tomatoes",
                "Combine all ingredients in a bowl",
                "Drizzle with olive oil and lemon juice, season with herbs",
            ],
        ),
        meal(
            "fish-veg",
            "Baked Fish with Seasonal Vegetables",
            vec![
                ing("White Fish Fillet", "200g", 40.0),
                ing("Zucchini", "1", 6.0),
                ing("Carrot", "1", 2.0),
                ing("Lemon", "1", 3.0),
                ing("Olive Oil", "15ml", 5.0),
            ],
            Macros::new(35.0, 15.0, 10.0, 290.0),
            56.0,
            &[
                "Preheat oven to 200°C",
                "Place fish fillet in the center of parchment paper",
                "Surround with sliced zucchini and carrot",
                "Drizzle with olive oil and add lemon slices",
                "Wrap parchment and bake for 15-20 minutes",
            ],
        ),
        meal(
            "lentil-salad",
            "Green Lentil and Vegetable Salad",
            vec![
                ing("Green Lentils", "100g", 10.0),
                ing("Bell Pepper", "1", 5.0),
                ing("Red Onion", "1/2", 2.0),
                ing("Parsley", "30g", 5.0),
                ing("Lemon", "1", 3.0),
            ],
            Macros::new(15.0, 35.0, 5.0, 245.0),
            25.0,
            &[
                "Cook lentils until tender but not mushy",
                "Dice bell pepper and red onion",
                "Chop parsley finely",
                "Combine all ingredients in a bowl",
                "Dress with lemon juice, olive oil, salt and pepper",
            ],
        ),
        meal(
            "yogurt-fruit-bowl",
            "Greek Yogurt and Fresh Fruit Bowl",
            vec![
                ing("Greek Yogurt", "200g", 20.0),
                ing("Mixed Berries", "100g", 20.0),
                ing("Banana", "1", 4.0),
                ing("Honey", "15g", 5.0),
                ing("Walnuts", "30g", 10.0),
            ],
            Macros::new(20.0, 45.0, 12.0, 365.0),
            59.0,
            &[
                "Add Greek yogurt to a bowl",
                "Top with mixed berries and sliced banana",
                "Drizzle with honey",
                "Sprinkle chopped walnuts on top",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_goal_has_four_templates() {
        assert_eq!(fit_templates().len(), 4);
        assert_eq!(bulk_templates().len(), 4);
        assert_eq!(healthy_templates().len(), 4);
    }

    #[test]
    fn test_template_ids_unique() {
        let mut ids: Vec<String> = fit_templates()
            .into_iter()
            .chain(bulk_templates())
            .chain(healthy_templates())
            .map(|m| m.id)
            .collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_cheapest_healthy_template() {
        let cheapest = healthy_templates()
            .into_iter()
            .min_by(|a, b| a.cost.total_cmp(&b.cost))
            .unwrap();
        assert_eq!(cheapest.id, "lentil-salad");
        assert_eq!(cheapest.cost, 25.0);
    }
}
