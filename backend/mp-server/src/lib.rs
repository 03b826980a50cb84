pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{auth::get_current_user, user_dto::UserDto},
    chat::{
        chat::chat,
        chat_request::{ChatContext, ChatMessageRequest},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        api_json::ApiJson,
        api_query::ApiQuery,
        session_user::{SessionUser, USER_ID_HEADER},
    },
    family::{
        family::{
            create_family_member, delete_family_member, list_family_members,
            update_family_member,
        },
        family_member_dto::FamilyMemberDto,
        family_member_request::FamilyMemberRequest,
    },
    ingredients::{
        ingredient_dto::{IngredientDto, IngredientSearchQuery},
        ingredients::list_ingredients,
    },
    meal_plans::{
        meal_plan_dto::{MealDto, MealPlanDto},
        meal_plan_requests::{AddRecipeRequest, CurrentPlanQuery, WeekRequest},
        meal_plans::{
            add_recipe_to_plan, create_meal_plan, generate_meal_plan, get_current_meal_plan,
        },
        meals::delete_meal,
    },
    pantry::{
        add_pantry_request::{AddPantryRequest, NewPantryEntry},
        pantry::{add_pantry_items, delete_pantry_item, list_pantry, update_pantry_item},
        pantry_item_dto::PantryItemDto,
        update_pantry_item_request::UpdatePantryItemRequest,
    },
    preferences::{
        preferences::{get_preferences, save_preferences},
        preferences_dto::{PreferencesDto, UpdatePreferencesRequest},
    },
    recipes::{
        list_recipes_query::{DEFAULT_LIST_LIMIT, ListRecipesQuery, RecommendedRecipesQuery},
        recipe_dto::{RecipeDetailDto, RecipeDto, RecipeIngredientDto, ScoredRecipeDto},
        recipes::{
            add_favorite, get_recipe, list_favorites, list_recipes, recommended_recipes,
            remove_favorite, search_recipes,
        },
        recommendation_request::{QuickGenerateRequest, RecommendationRequest},
        recommendations::{quick_generate_recipe, recipe_recommendations},
        search_recipes_request::SearchRecipesRequest,
    },
    scan::scan::{IMAGE_FIELD, scan_ingredients},
    shopping::{
        shopping::{
            delete_shopping_item, generate_shopping_list, get_shopping_list,
            list_shopping_lists, update_shopping_item,
        },
        shopping_list_dto::{ShoppingListDetailDto, ShoppingListDto, ShoppingListItemDto},
        shopping_requests::{
            CURRENT_MEAL_PLAN, GenerateShoppingListRequest, UpdateShoppingItemRequest,
        },
    },
    suggestions::{
        suggestion_dto::{ProactiveSuggestion, SuggestionPriority, SuggestionType},
        suggestion_requests::{
            DismissSuggestionRequest, GenerateSuggestionsRequest, SuggestionContext,
        },
    },
};
pub use app_state::{AppState, SessionSettings};

pub use crate::routes::build_router;
