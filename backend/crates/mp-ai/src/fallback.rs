//! Fixed results returned when an AI call cannot complete.

use crate::{
    DayMeals, DetectedIngredient, IngredientScanResult, NutritionSummary, PlanDay,
    PlanShoppingList, PlannedMeal, RecipeRecommendation, WeeklyMealPlan,
};

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use mp_core::Difficulty;

pub const FALLBACK_SCAN_CONFIDENCE: f64 = 0.88;

pub fn ingredient_scan() -> IngredientScanResult {
    let item = |name: &str, quantity: &str, unit: &str, confidence: f64, category: &str| {
        DetectedIngredient {
            name: name.to_string(),
            quantity: Some(quantity.to_string()),
            unit: Some(unit.to_string()),
            confidence,
            category: category.to_string(),
        }
    };

    IngredientScanResult {
        ingredients: vec![
            item("Tomatoes", "3", "pieces", 0.95, "Vegetables"),
            item("Bell peppers", "2", "pieces", 0.90, "Vegetables"),
            item("Onions", "1", "piece", 0.85, "Vegetables"),
            item("Garlic", "4", "cloves", 0.80, "Aromatics"),
        ],
        total_confidence: FALLBACK_SCAN_CONFIDENCE,
        suggestions: vec![
            "The image shows fresh vegetables that would work great in a stir-fry or pasta dish"
                .to_string(),
            "Consider adding some protein like chicken or tofu to make a complete meal".to_string(),
        ],
    }
}

fn with_extras(available: &[String], take: usize, extras: &[&str]) -> Vec<String> {
    available
        .iter()
        .take(take)
        .cloned()
        .chain(extras.iter().map(|s| s.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two template recipes built around the first available ingredients
pub fn recipe_recommendations(available: &[String], family_size: u32) -> Vec<RecipeRecommendation> {
    vec![
        RecipeRecommendation {
            title: "Quick Vegetable Stir-Fry".to_string(),
            description: "A healthy and colorful stir-fry using your available vegetables"
                .to_string(),
            ingredients: with_extras(available, 5, &["soy sauce", "garlic", "ginger", "oil"]),
            instructions: strings(&[
                "Heat oil in a large pan or wok",
                "Add garlic and ginger, stir-fry for 30 seconds",
                "Add harder vegetables first, then softer ones",
                "Season with soy sauce and serve over rice",
            ]),
            cook_time: 15,
            servings: family_size,
            difficulty: Difficulty::Easy,
            cuisine: Some("Asian".to_string()),
            tags: strings(&["Quick", "Healthy", "Vegetarian"]),
        },
        RecipeRecommendation {
            title: "Simple Family Soup".to_string(),
            description: "Comforting soup made with your available ingredients".to_string(),
            ingredients: with_extras(available, 4, &["broth", "herbs", "salt", "pepper"]),
            instructions: strings(&[
                "Chop all vegetables into bite-sized pieces",
                "Heat broth in a large pot",
                "Add vegetables and simmer until tender",
                "Season with herbs, salt, and pepper to taste",
            ]),
            cook_time: 25,
            servings: family_size,
            difficulty: Difficulty::Easy,
            cuisine: Some("Comfort Food".to_string()),
            tags: strings(&["Soup", "Comfort", "Family-friendly"]),
        },
    ]
}

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

// (title, cook time, ingredients) for breakfast, lunch and dinner of each day
type MealTemplate = (&'static str, u32, &'static [&'static str]);

const WEEK_TEMPLATE: [[MealTemplate; 3]; 7] = [
    [
        ("Pancakes with Berries", 20, &["flour", "eggs", "milk", "berries"]),
        ("Chicken Caesar Wraps", 15, &["chicken breast", "lettuce", "tortillas", "parmesan"]),
        ("Roast Chicken with Vegetables", 60, &["chicken", "potatoes", "carrots", "onions"]),
    ],
    [
        ("Overnight Oats", 5, &["oats", "milk", "honey", "berries"]),
        ("Tomato Soup with Toast", 25, &["tomatoes", "onions", "bread", "broth"]),
        ("Spaghetti Bolognese", 40, &["pasta", "ground beef", "tomatoes", "garlic"]),
    ],
    [
        ("Scrambled Eggs on Toast", 10, &["eggs", "bread", "butter"]),
        ("Greek Salad", 15, &["cucumber", "tomatoes", "feta", "olives"]),
        ("Vegetable Stir-Fry with Rice", 25, &["rice", "bell peppers", "broccoli", "soy sauce"]),
    ],
    [
        ("Yogurt Parfait", 5, &["yogurt", "granola", "berries"]),
        ("Tuna Sandwiches", 10, &["tuna", "bread", "mayonnaise", "lettuce"]),
        ("Baked Salmon with Green Beans", 30, &["salmon", "green beans", "lemon", "garlic"]),
    ],
    [
        ("Banana Smoothie", 5, &["bananas", "milk", "yogurt"]),
        ("Leftover Salmon Rice Bowl", 10, &["rice", "salmon", "cucumber", "soy sauce"]),
        ("Chicken Fajitas", 30, &["chicken breast", "bell peppers", "onions", "tortillas"]),
    ],
    [
        ("Avocado Toast", 10, &["bread", "avocado", "lemon"]),
        ("Minestrone Soup", 35, &["beans", "pasta", "tomatoes", "carrots"]),
        ("Homemade Pizza", 45, &["flour", "tomatoes", "mozzarella", "basil"]),
    ],
    [
        ("French Toast", 15, &["bread", "eggs", "milk", "cinnamon"]),
        ("Quesadillas", 15, &["tortillas", "cheese", "beans"]),
        ("Beef and Vegetable Stew", 90, &["beef", "potatoes", "carrots", "broth"]),
    ],
];

fn planned(template: &MealTemplate) -> PlannedMeal {
    let (title, cook_time, ingredients) = template;
    PlannedMeal {
        title: title.to_string(),
        description: format!("{} for the whole family", title),
        cook_time: *cook_time,
        ingredients: strings(ingredients),
        instructions: Vec::new(),
        tags: Vec::new(),
    }
}

/// Fixed seven-day plan dated from `week_starting`
pub fn weekly_meal_plan(week_starting: NaiveDate) -> WeeklyMealPlan {
    let days: Vec<PlanDay> = WEEK_TEMPLATE
        .iter()
        .enumerate()
        .map(|(offset, [breakfast, lunch, dinner])| {
            let date = week_starting
                .checked_add_days(Days::new(offset as u64))
                .unwrap_or(week_starting);
            PlanDay {
                day: WEEKDAYS[offset].to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                meals: DayMeals {
                    breakfast: Some(planned(breakfast)),
                    lunch: Some(planned(lunch)),
                    dinner: Some(planned(dinner)),
                },
            }
        })
        .collect();

    let mut ingredients: Vec<String> = Vec::new();
    for day in &days {
        for meal in [&day.meals.breakfast, &day.meals.lunch, &day.meals.dinner]
            .into_iter()
            .flatten()
        {
            for ingredient in &meal.ingredients {
                if !ingredients.contains(ingredient) {
                    ingredients.push(ingredient.clone());
                }
            }
        }
    }

    let mut categories: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for ingredient in &ingredients {
        categories
            .entry(category_for(ingredient).to_string())
            .or_default()
            .push(ingredient.clone());
    }

    WeeklyMealPlan {
        days,
        shopping_list: PlanShoppingList {
            ingredients,
            categories,
        },
        nutrition_summary: Some(NutritionSummary {
            average_calories: 2000,
            protein_balance: "Balanced".to_string(),
            variety_score: 8.0,
        }),
    }
}

fn category_for(ingredient: &str) -> &'static str {
    const PRODUCE: &[&str] = &[
        "berries", "lettuce", "potatoes", "carrots", "onions", "tomatoes", "garlic", "cucumber",
        "bell peppers", "broccoli", "green beans", "lemon", "bananas", "avocado", "basil",
        "olives",
    ];
    const PROTEIN: &[&str] = &[
        "chicken", "chicken breast", "ground beef", "beef", "tuna", "salmon", "eggs", "beans",
    ];
    const DAIRY: &[&str] = &[
        "milk", "butter", "yogurt", "parmesan", "feta", "mozzarella", "cheese",
    ];

    if PRODUCE.contains(&ingredient) {
        "Produce"
    } else if PROTEIN.contains(&ingredient) {
        "Protein"
    } else if DAIRY.contains(&ingredient) {
        "Dairy"
    } else {
        "Pantry"
    }
}
