//! Demo household loaded at startup when `store.seed_demo_data` is on.

use crate::{
    FamilyMemberRepository, IngredientRepository, MemoryStore, NewRecipeIngredient,
    PantryRepository, PreferencesRepository, RecipeRepository, Result as StoreResult,
    UserRepository,
};

use mp_core::{
    Difficulty, FamilyMember, Ingredient, PantryItem, Recipe, User, UserPreferences,
};

use uuid::Uuid;

/// Identity used when no session header is present in demo mode
pub const DEMO_USER_ID: Uuid = Uuid::from_u128(1);

const PANTRY_SEED_COUNT: usize = 8;

const INGREDIENTS: [(&str, &str); 20] = [
    ("Chicken breast", "Meat"),
    ("Quinoa", "Grains"),
    ("Broccoli", "Vegetables"),
    ("Bell peppers", "Vegetables"),
    ("Carrots", "Vegetables"),
    ("Pasta", "Grains"),
    ("Tomato sauce", "Pantry"),
    ("Fresh basil", "Herbs"),
    ("Garlic", "Aromatics"),
    ("Olive oil", "Pantry"),
    ("Onions", "Vegetables"),
    ("Tomatoes", "Vegetables"),
    ("Mozzarella cheese", "Dairy"),
    ("Ground beef", "Meat"),
    ("Rice", "Grains"),
    ("Salmon", "Seafood"),
    ("Eggs", "Dairy"),
    ("Spinach", "Vegetables"),
    ("Milk", "Dairy"),
    ("Bread", "Grains"),
];

struct SeedRecipe {
    title: &'static str,
    description: &'static str,
    instructions: &'static [&'static str],
    cook_time: i32,
    servings: i32,
    difficulty: Difficulty,
    cuisine: &'static str,
    tags: &'static [&'static str],
    image_url: Option<&'static str>,
    /// (name, quantity, unit)
    ingredients: &'static [(&'static str, &'static str, &'static str)],
}

const RECIPES: [SeedRecipe; 4] = [
    SeedRecipe {
        title: "Grilled Chicken with Quinoa & Roasted Vegetables",
        description: "A healthy, balanced meal with lean protein, whole grains, and colorful vegetables.",
        instructions: &[
            "Season chicken breast with salt, pepper, and herbs",
            "Grill chicken for 6-8 minutes per side until cooked through",
            "Cook quinoa according to package instructions",
            "Roast vegetables in oven at 400°F for 20-25 minutes",
            "Serve chicken over quinoa with roasted vegetables on the side",
        ],
        cook_time: 45,
        servings: 4,
        difficulty: Difficulty::Medium,
        cuisine: "American",
        tags: &["Healthy", "High-protein", "Gluten-free", "Meal prep"],
        image_url: Some("/generated_images/Healthy_balanced_meal_plating_25acb6fe.png"),
        ingredients: &[
            ("chicken breast", "2", "lbs"),
            ("quinoa", "1", "cup"),
            ("broccoli", "1", "head"),
            ("bell peppers", "2", "pieces"),
            ("carrots", "3", "pieces"),
            ("olive oil", "2", "tbsp"),
        ],
    },
    SeedRecipe {
        title: "Classic Pasta Marinara with Fresh Basil",
        description: "Simple and delicious pasta with homemade tomato sauce and fresh herbs.",
        instructions: &[
            "Cook pasta according to package directions",
            "Heat olive oil in large pan",
            "Sauté garlic until fragrant",
            "Add tomato sauce and simmer for 10 minutes",
            "Toss pasta with sauce and fresh basil",
            "Serve with grated cheese",
        ],
        cook_time: 25,
        servings: 2,
        difficulty: Difficulty::Easy,
        cuisine: "Italian",
        tags: &["Italian", "Vegetarian", "Quick", "Comfort food"],
        image_url: Some("/generated_images/Appetizing_pasta_dish_photo_6cb6d75b.png"),
        ingredients: &[
            ("pasta", "1", "lb"),
            ("tomato sauce", "2", "cups"),
            ("fresh basil", "1/4", "cup"),
            ("garlic", "3", "cloves"),
            ("olive oil", "2", "tbsp"),
        ],
    },
    SeedRecipe {
        title: "Beef and Vegetable Stir Fry",
        description: "Quick and nutritious stir fry with tender beef and crisp vegetables.",
        instructions: &[
            "Slice beef into thin strips",
            "Heat oil in wok or large skillet",
            "Stir-fry beef until browned",
            "Add vegetables and cook until crisp-tender",
            "Season with soy sauce and garlic",
            "Serve over rice",
        ],
        cook_time: 20,
        servings: 4,
        difficulty: Difficulty::Easy,
        cuisine: "Asian",
        tags: &["Quick", "High-protein", "Gluten-free option"],
        image_url: None,
        ingredients: &[
            ("ground beef", "1", "lb"),
            ("bell peppers", "2", "pieces"),
            ("onions", "1", "piece"),
            ("carrots", "2", "pieces"),
            ("garlic", "2", "cloves"),
            ("rice", "2", "cups"),
        ],
    },
    SeedRecipe {
        title: "Baked Salmon with Herbs",
        description: "Flaky salmon baked with fresh herbs and lemon.",
        instructions: &[
            "Preheat oven to 425°F",
            "Season salmon with salt, pepper, and herbs",
            "Place on baking sheet with lemon slices",
            "Bake for 12-15 minutes until flakes easily",
            "Serve with steamed vegetables",
        ],
        cook_time: 30,
        servings: 4,
        difficulty: Difficulty::Easy,
        cuisine: "American",
        tags: &["Healthy", "Seafood", "Low-carb", "Quick"],
        image_url: None,
        ingredients: &[
            ("salmon", "1.5", "lbs"),
            ("olive oil", "1", "tbsp"),
            ("garlic", "2", "cloves"),
        ],
    },
];

/// (name, age, dietary, allergies, preferences)
type SeedMember = (
    &'static str,
    i32,
    &'static [&'static str],
    &'static [&'static str],
    &'static [&'static str],
);

const FAMILY: [SeedMember; 4] = [
    (
        "Sarah (Mom)",
        35,
        &["Vegetarian"],
        &["Nuts"],
        &["Italian", "Mexican", "Asian"],
    ),
    ("Mike (Dad)", 37, &[], &[], &["BBQ", "American", "Italian"]),
    ("Emma (8)", 8, &[], &["Dairy"], &["Simple", "Mild flavors"]),
    ("Jake (12)", 12, &[], &[], &["Pizza", "Pasta", "Chicken"]),
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_demo_data(store: &MemoryStore) -> StoreResult<()> {
    let mut user = User::new(
        DEMO_USER_ID,
        Some("sarah@example.com".to_string()),
        Some("Sarah".to_string()),
    );
    user.first_name = Some("Sarah".to_string());
    UserRepository::new(store.clone()).upsert(&user)?;

    let ingredients = IngredientRepository::new(store.clone());
    let mut seeded: Vec<Ingredient> = Vec::with_capacity(INGREDIENTS.len());
    for (name, category) in INGREDIENTS {
        let ingredient = Ingredient::new(name.to_string(), category.to_string());
        ingredients.create(&ingredient)?;
        seeded.push(ingredient);
    }

    let recipes = RecipeRepository::new(store.clone());
    for seed in &RECIPES {
        let mut recipe = Recipe::new(
            seed.title.to_string(),
            strings(seed.instructions),
            seed.cook_time,
            seed.servings,
        );
        recipe.description = Some(seed.description.to_string());
        recipe.difficulty = seed.difficulty;
        recipe.cuisine = Some(seed.cuisine.to_string());
        recipe.tags = strings(seed.tags);
        recipe.image_url = seed.image_url.map(String::from);

        let lines: Vec<NewRecipeIngredient> = seed
            .ingredients
            .iter()
            .map(|(name, quantity, unit)| NewRecipeIngredient {
                name: name.to_string(),
                quantity: quantity.to_string(),
                unit: Some(unit.to_string()),
                is_optional: false,
            })
            .collect();

        recipes.create_with_ingredients(&recipe, &lines)?;
    }

    let family = FamilyMemberRepository::new(store.clone());
    for (name, age, dietary, allergies, preferences) in FAMILY {
        let mut member = FamilyMember::new(DEMO_USER_ID, name.to_string());
        member.age = Some(age);
        member.dietary = strings(dietary);
        member.allergies = strings(allergies);
        member.preferences = strings(preferences);
        family.create(&member)?;
    }

    let mut preferences = UserPreferences::new(DEMO_USER_ID);
    preferences.family_size = 4;
    preferences.cooking_skill = "Intermediate".to_string();
    preferences.budget = "Medium".to_string();
    preferences.cooking_time = "30-45 mins".to_string();
    preferences.cuisine_preferences = strings(&["Italian", "American", "Mexican", "Asian"]);
    PreferencesRepository::new(store.clone()).upsert(&preferences)?;

    let pantry = PantryRepository::new(store.clone());
    for ingredient in seeded.iter().take(PANTRY_SEED_COUNT) {
        let mut item = PantryItem::new(DEMO_USER_ID, ingredient.id);
        item.quantity = Some("1".to_string());
        item.unit = Some("piece".to_string());
        pantry.create(&item)?;
    }

    log::info!(
        "Seeded demo data: {} ingredients, {} recipes, {} family members",
        INGREDIENTS.len(),
        RECIPES.len(),
        FAMILY.len()
    );

    Ok(())
}
