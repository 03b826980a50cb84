use crate::{
    MemoryStore, PantryRepository, RecipeRepository, ShoppingListRepository, StoreError,
};

use mp_core::{Ingredient, PantryItem, Recipe, RecipeIngredient, ShoppingList, ShoppingListItem};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_pantry_row_with_missing_ingredient_when_listing_then_integrity_error() {
    // Given: A pantry row written past the repository checks
    let store = MemoryStore::new();
    let user_id = Uuid::new_v4();
    store
        .write()
        .unwrap()
        .pantry_items
        .push(PantryItem::new(user_id, Uuid::new_v4()));

    // When: Listing the pantry
    let result = PantryRepository::new(store).find_by_user(user_id);

    // Then: The join reports the broken reference
    assert!(matches!(result, Err(StoreError::Integrity { .. })));
}

#[test]
fn given_recipe_line_with_missing_ingredient_when_joining_then_integrity_error() {
    let store = MemoryStore::new();
    let recipe = Recipe::new("Toast".to_string(), Vec::new(), 5, 1);
    {
        let mut tables = store.write().unwrap();
        tables.recipes.push(recipe.clone());
        tables.recipe_ingredients.push(RecipeIngredient::new(
            recipe.id,
            Uuid::new_v4(),
            "2".to_string(),
            None,
        ));
    }

    let result = RecipeRepository::new(store).find_with_ingredients(recipe.id);

    assert!(matches!(result, Err(StoreError::Integrity { .. })));
}

#[test]
fn given_custom_item_without_ingredient_when_joining_list_then_ok() {
    let store = MemoryStore::new();
    let list = ShoppingList::new(Uuid::new_v4(), "Party".to_string(), None);
    let repo = ShoppingListRepository::new(store.clone());
    repo.create(&list).unwrap();

    let item = ShoppingListItem::new(
        list.id,
        "Balloons".to_string(),
        "Other".to_string(),
        "10".to_string(),
    );
    repo.add_item(&item).unwrap();

    let joined = repo.find_with_items(list.id).unwrap().unwrap();
    assert_that!(joined.items, len(eq(1)));
    assert_that!(joined.items[0].ingredient_id, none());
}

#[test]
fn given_removed_ingredient_when_joining_list_then_integrity_error() {
    let store = MemoryStore::new();
    let ingredient = Ingredient::new("Flour".to_string(), "Pantry".to_string());
    let list = ShoppingList::new(Uuid::new_v4(), "Baking".to_string(), None);
    let repo = ShoppingListRepository::new(store.clone());

    store.write().unwrap().ingredients.push(ingredient.clone());
    repo.create(&list).unwrap();

    let mut item = ShoppingListItem::new(
        list.id,
        "Flour".to_string(),
        "Pantry".to_string(),
        "1".to_string(),
    );
    item.ingredient_id = Some(ingredient.id);
    repo.add_item(&item).unwrap();

    store.write().unwrap().ingredients.clear();

    let result = repo.find_with_items(list.id);
    assert!(matches!(result, Err(StoreError::Integrity { .. })));
}
