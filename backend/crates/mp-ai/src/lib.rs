pub mod circuit_breaker;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod metrics;
pub mod models;
pub mod prompts;
pub mod provider;
pub mod retry;
pub mod suggestions;

#[cfg(test)]
mod tests;

pub use circuit_breaker::{CircuitBreaker, CircuitBreakerSettings, CircuitState};
pub use error::{AiError, Result as AiResult};
pub use gateway::{AiGateway, AiModels};
pub use metrics::AiMetrics;
pub use models::chat::{ChatReply, ChatRequest, ChatRole, ChatTurn};
pub use models::ingredient_scan::{DetectedIngredient, IngredientScanResult};
pub use models::recipe_recommendation::{RecipeRecommendation, RecipeRequest};
pub use models::weekly_meal_plan::{
    DayMeals, NutritionSummary, PlanDay, PlanShoppingList, PlannedMeal, WeeklyMealPlan,
    WeeklyPlanRequest,
};
pub use provider::open_ai_provider::OpenAiProvider;
pub use provider::{
    ChatMessage, CompletionRequest, ContentPart, LlmProvider, MessageContent, ResponseFormat,
};
pub use retry::{RetrySettings, with_retry};
pub use suggestions::quick_suggestions;
