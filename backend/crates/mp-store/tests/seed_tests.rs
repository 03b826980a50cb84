use mp_store::{
    DEMO_USER_ID, FamilyMemberRepository, IngredientRepository, MemoryStore, PantryRepository,
    PreferencesRepository, RecipeRepository, UserRepository,
};

use googletest::prelude::*;

#[test]
fn given_seeded_store_when_reading_then_demo_household_present() {
    let store = MemoryStore::seeded().unwrap();

    let user = UserRepository::new(store.clone())
        .find_by_id(DEMO_USER_ID)
        .unwrap();
    assert_that!(user, some(anything()));

    assert_that!(IngredientRepository::new(store.clone()).list().unwrap(), len(eq(20)));
    assert_that!(RecipeRepository::new(store.clone()).list(50, 0).unwrap(), len(eq(4)));
    assert_that!(
        FamilyMemberRepository::new(store.clone())
            .find_by_user(DEMO_USER_ID)
            .unwrap(),
        len(eq(4))
    );
    assert_that!(
        PantryRepository::new(store.clone())
            .find_by_user(DEMO_USER_ID)
            .unwrap(),
        len(eq(8))
    );

    let preferences = PreferencesRepository::new(store)
        .find_by_user(DEMO_USER_ID)
        .unwrap()
        .unwrap();
    assert_that!(preferences.family_size, eq(4));
}

#[test]
fn given_seeded_store_when_recommending_then_recipe_lines_resolve() {
    let store = MemoryStore::seeded().unwrap();
    let recipes = RecipeRepository::new(store);

    let ranked = recipes.recommended(DEMO_USER_ID, 10).unwrap();

    assert_that!(ranked, len(eq(4)));
    // Pantry holds the first eight catalog ingredients; only olive oil is missing for the chicken dish
    assert_that!(
        ranked[0].recipe.title,
        eq("Grilled Chicken with Quinoa & Roasted Vegetables")
    );
    assert_that!(ranked[0].match_ratio, near(5.0 / 6.0, 1e-9));
    assert_that!(
        ranked[1].recipe.title,
        eq("Classic Pasta Marinara with Fresh Basil")
    );
    assert_that!(ranked[3].match_ratio, eq(0.0));
}
