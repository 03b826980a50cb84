use crate::api::suggestions::suggestions as proactive_suggestions;
use crate::{
    AppState, add_favorite, add_pantry_items, add_recipe_to_plan, chat, create_family_member,
    create_meal_plan, delete_family_member, delete_meal, delete_pantry_item,
    delete_shopping_item, generate_meal_plan, generate_shopping_list, get_current_meal_plan,
    get_current_user, get_preferences, get_recipe, get_shopping_list, health, list_family_members,
    list_favorites, list_ingredients, list_pantry, list_recipes, list_shopping_lists,
    quick_generate_recipe, recipe_recommendations, recommended_recipes, remove_favorite,
    save_preferences, scan_ingredients, search_recipes, update_family_member,
    update_pantry_item, update_shopping_item,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Room for multipart boundaries and headers on top of the image itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let body_limit = state.validation.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Session
        .route("/api/auth/user", get(get_current_user))
        // Recipes
        .route("/api/recipes", get(list_recipes))
        .route("/api/recipes/search", post(search_recipes))
        .route("/api/recipes/recommended", get(recommended_recipes))
        .route("/api/recipes/recommendations", post(recipe_recommendations))
        .route("/api/recipes/quick-generate", post(quick_generate_recipe))
        .route("/api/recipes/{id}", get(get_recipe))
        .route(
            "/api/recipes/{id}/favorite",
            post(add_favorite).delete(remove_favorite),
        )
        .route("/api/favorites", get(list_favorites))
        // Ingredients and pantry
        .route("/api/ingredients", get(list_ingredients))
        .route("/api/pantry", get(list_pantry))
        .route("/api/pantry/add", post(add_pantry_items))
        .route(
            "/api/pantry/{id}",
            put(update_pantry_item).delete(delete_pantry_item),
        )
        // Only the image upload gets a raised body limit
        .route(
            "/api/scan-ingredients",
            post(scan_ingredients).layer(DefaultBodyLimit::max(body_limit)),
        )
        // Assistant
        .route("/api/chat", post(chat))
        .route(
            "/api/suggestions/proactive",
            get(proactive_suggestions::proactive),
        )
        .route(
            "/api/suggestions/generate",
            post(proactive_suggestions::generate),
        )
        .route(
            "/api/suggestions/dismiss",
            post(proactive_suggestions::dismiss),
        )
        // Meal plans
        .route("/api/meal-plans", post(create_meal_plan))
        .route("/api/meal-plans/generate", post(generate_meal_plan))
        .route("/api/meal-plans/current", get(get_current_meal_plan))
        .route("/api/meal-plans/add-recipe", post(add_recipe_to_plan))
        .route("/api/meals/{id}", delete(delete_meal))
        // Shopping lists
        .route("/api/shopping/generate", post(generate_shopping_list))
        .route("/api/shopping-lists", get(list_shopping_lists))
        .route("/api/shopping-lists/{id}", get(get_shopping_list))
        .route(
            "/api/shopping-lists/items/{id}",
            patch(update_shopping_item).delete(delete_shopping_item),
        )
        // Family and preferences
        .route(
            "/api/family",
            get(list_family_members).post(create_family_member),
        )
        .route(
            "/api/family/{id}",
            put(update_family_member).delete(delete_family_member),
        )
        .route("/api/preferences", get(get_preferences).post(save_preferences))
        // Add shared state
        .with_state(state)
        .layer(cors_layer(cors_allowed_origins))
}

/// Any origin when none are configured
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(AllowOrigin::list(origins))
    }
}
