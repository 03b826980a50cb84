mod common;

use common::create_test_recipe;

use mp_core::PantryItem;
use mp_store::{
    FavoriteRepository, IngredientRepository, MemoryStore, PantryRepository, RecipeRepository,
    RecipeSearch, StoreError,
};

use googletest::prelude::*;
use uuid::Uuid;

fn stock_pantry(store: &MemoryStore, user_id: Uuid, names: &[&str]) {
    let ingredients = IngredientRepository::new(store.clone());
    let pantry = PantryRepository::new(store.clone());
    for name in names {
        let ingredient = ingredients.find_or_create(name, None).unwrap();
        pantry.create(&PantryItem::new(user_id, ingredient.id)).unwrap();
    }
}

#[test]
fn given_recipe_with_new_ingredients_when_created_then_ingredients_joined() {
    let store = MemoryStore::new();

    let created = create_test_recipe(&store, "Omelette", &["Eggs", "Milk"]);

    let found = RecipeRepository::new(store.clone())
        .find_with_ingredients(created.recipe.id)
        .unwrap()
        .unwrap();
    assert_that!(found.ingredients, len(eq(2)));
    assert_that!(found.ingredients[0].ingredient.name, eq("Eggs"));
    assert_that!(IngredientRepository::new(store).list().unwrap(), len(eq(2)));
}

#[test]
fn given_pantry_when_recommending_then_best_match_first() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    create_test_recipe(&store, "Salmon Bake", &["Salmon", "Lemon"]);
    create_test_recipe(&store, "Omelette", &["Eggs", "Milk"]);
    stock_pantry(&store, user_id, &["Eggs", "Milk", "Lemon"]);

    let ranked = RecipeRepository::new(store).recommended(user_id, 10).unwrap();

    assert_that!(ranked, len(eq(2)));
    assert_that!(ranked[0].recipe.title, eq("Omelette"));
    assert_that!(ranked[0].match_ratio, eq(1.0));
    assert_that!(ranked[1].match_ratio, eq(0.5));
}

#[test]
fn given_empty_pantry_when_recommending_then_catalog_order_with_zero_ratio() {
    let store = MemoryStore::new();
    create_test_recipe(&store, "First", &["Eggs"]);
    create_test_recipe(&store, "Second", &["Milk"]);

    let ranked = RecipeRepository::new(store)
        .recommended(Uuid::new_v4(), 10)
        .unwrap();

    assert_that!(ranked, len(eq(2)));
    assert_that!(ranked[0].recipe.title, eq("First"));
    assert_that!(ranked[0].match_ratio, eq(0.0));
}

#[test]
fn given_filters_when_searching_then_all_filters_apply() {
    let store = MemoryStore::new();
    let repo = RecipeRepository::new(store.clone());
    let quick = create_test_recipe(&store, "Quick Pasta", &["Pasta"]);
    create_test_recipe(&store, "Slow Roast", &["Beef"]);

    let mut search = RecipeSearch {
        query: Some("pasta".to_string()),
        ..Default::default()
    };
    assert_that!(repo.search(&search).unwrap(), len(eq(1)));

    search.max_cook_time = Some(10);
    assert_that!(repo.search(&search).unwrap(), is_empty());

    let all = repo.search(&RecipeSearch::default()).unwrap();
    assert_that!(all, len(eq(2)));
    assert_that!(all[0].id, eq(quick.recipe.id));
}

#[test]
fn given_list_with_offset_when_listing_then_paged() {
    let store = MemoryStore::new();
    for i in 0..5 {
        create_test_recipe(&store, &format!("Recipe {}", i), &["Eggs"]);
    }

    let page = RecipeRepository::new(store).list(2, 3).unwrap();

    assert_that!(page, len(eq(2)));
    assert_that!(page[0].title, eq("Recipe 3"));
}

#[test]
fn given_recipe_when_favorited_twice_then_single_favorite() {
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    let recipe = create_test_recipe(&store, "Pancakes", &["Flour"]);
    let favorites = FavoriteRepository::new(store);

    favorites.add(user_id, recipe.recipe.id).unwrap();
    favorites.add(user_id, recipe.recipe.id).unwrap();

    assert_that!(favorites.find_recipes(user_id).unwrap(), len(eq(1)));
    assert_that!(favorites.is_favorite(user_id, recipe.recipe.id).unwrap(), eq(true));

    assert_that!(favorites.remove(user_id, recipe.recipe.id).unwrap(), eq(true));
    assert_that!(favorites.remove(user_id, recipe.recipe.id).unwrap(), eq(false));
}

#[test]
fn given_unknown_recipe_when_favorited_then_not_found() {
    let favorites = FavoriteRepository::new(MemoryStore::new());

    let result = favorites.add(Uuid::new_v4(), Uuid::new_v4());

    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}
