use crate::fallback;
use crate::prompts;
use crate::suggestions::{EMPTY_CHAT_REPLY, fallback_chat_reply};
use crate::{
    AiError, AiMetrics, AiResult, ChatReply, ChatRequest, CircuitBreaker, CircuitBreakerSettings,
    CompletionRequest, IngredientScanResult, LlmProvider, OpenAiProvider, RecipeRecommendation,
    RecipeRequest, ResponseFormat, RetrySettings, WeeklyMealPlan, WeeklyPlanRequest,
    quick_suggestions, with_retry,
};

use std::sync::Arc;
use std::time::{Duration, Instant};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use mp_config::{AiConfig, CircuitBreakerConfig, RetryConfig};

const OP_SCAN: &str = "identify_ingredients";
const OP_RECIPES: &str = "recommend_recipes";
const OP_WEEKLY_PLAN: &str = "weekly_meal_plan";
const OP_CHAT: &str = "chat";

/// Model names per call type
#[derive(Debug, Clone, PartialEq)]
pub struct AiModels {
    pub vision: String,
    pub text: String,
    pub chat: String,
}

impl From<&AiConfig> for AiModels {
    fn from(config: &AiConfig) -> Self {
        Self {
            vision: config.vision_model.clone(),
            text: config.text_model.clone(),
            chat: config.chat_model.clone(),
        }
    }
}

impl Default for AiModels {
    fn default() -> Self {
        Self::from(&AiConfig::default())
    }
}

/// Entry point for every AI-backed operation.
///
/// Operations never fail: when the provider is disabled, the circuit is
/// open, the call errors or the reply fails validation, a fixed fallback is
/// returned and the failure is logged and counted.
pub struct AiGateway {
    provider: Option<Arc<dyn LlmProvider>>,
    models: AiModels,
    retry: RetrySettings,
    breaker: CircuitBreaker,
    metrics: AiMetrics,
}

impl AiGateway {
    pub fn from_config(
        ai: &AiConfig,
        retry: &RetryConfig,
        circuit_breaker: &CircuitBreakerConfig,
    ) -> AiResult<Self> {
        let provider: Option<Arc<dyn LlmProvider>> = match (&ai.api_key, ai.is_active()) {
            (Some(api_key), true) => Some(Arc::new(OpenAiProvider::new(
                &ai.base_url,
                api_key,
                Duration::from_secs(ai.request_timeout_secs),
            )?)),
            _ => {
                log::warn!("AI provider not configured; all AI operations will use fallbacks");
                None
            }
        };

        Ok(Self {
            provider,
            models: AiModels::from(ai),
            retry: RetrySettings::from(retry),
            breaker: CircuitBreaker::new(CircuitBreakerSettings::from(circuit_breaker)),
            metrics: AiMetrics::new(),
        })
    }

    pub fn with_provider(
        provider: Arc<dyn LlmProvider>,
        models: AiModels,
        retry: RetrySettings,
        circuit_breaker: CircuitBreakerSettings,
    ) -> Self {
        Self {
            provider: Some(provider),
            models,
            retry,
            breaker: CircuitBreaker::new(circuit_breaker),
            metrics: AiMetrics::new(),
        }
    }

    /// Gateway that always answers with fallbacks
    pub fn disabled() -> Self {
        Self {
            provider: None,
            models: AiModels::default(),
            retry: RetrySettings::default(),
            breaker: CircuitBreaker::new(CircuitBreakerSettings::default()),
            metrics: AiMetrics::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    pub fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Identify food ingredients in a photo
    pub async fn identify_ingredients(&self, image: &[u8]) -> IngredientScanResult {
        let request = CompletionRequest {
            model: self.models.vision.clone(),
            messages: prompts::scan_messages(&BASE64.encode(image)),
            max_tokens: prompts::SCAN_MAX_TOKENS,
            temperature: None,
            response_format: Some(ResponseFormat::JSON_OBJECT),
        };

        let result = match self.complete(OP_SCAN, request).await {
            Ok(content) => IngredientScanResult::from_model_text(&content),
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            self.fall_back(OP_SCAN, &e);
            fallback::ingredient_scan()
        })
    }

    pub async fn recommend_recipes(&self, request: &RecipeRequest) -> Vec<RecipeRecommendation> {
        let completion = CompletionRequest {
            model: self.models.text.clone(),
            messages: prompts::recipe_messages(request),
            max_tokens: prompts::RECIPE_MAX_TOKENS,
            temperature: None,
            response_format: Some(ResponseFormat::JSON_OBJECT),
        };

        let result = match self.complete(OP_RECIPES, completion).await {
            Ok(content) => {
                RecipeRecommendation::list_from_model_text(&content, request.family_size)
            }
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            self.fall_back(OP_RECIPES, &e);
            fallback::recipe_recommendations(&request.available_ingredients, request.family_size)
        })
    }

    pub async fn generate_weekly_plan(&self, request: &WeeklyPlanRequest) -> WeeklyMealPlan {
        let completion = CompletionRequest {
            model: self.models.text.clone(),
            messages: prompts::weekly_plan_messages(request),
            max_tokens: prompts::WEEKLY_PLAN_MAX_TOKENS,
            temperature: None,
            response_format: Some(ResponseFormat::JSON_OBJECT),
        };

        let result = match self.complete(OP_WEEKLY_PLAN, completion).await {
            Ok(content) => WeeklyMealPlan::from_model_text(&content),
            Err(e) => Err(e),
        };

        result.unwrap_or_else(|e| {
            self.fall_back(OP_WEEKLY_PLAN, &e);
            fallback::weekly_meal_plan(request.week_starting)
        })
    }

    pub async fn chat(&self, request: &ChatRequest) -> ChatReply {
        let completion = CompletionRequest {
            model: self.models.chat.clone(),
            messages: prompts::chat_messages(request),
            max_tokens: prompts::CHAT_MAX_TOKENS,
            temperature: Some(prompts::CHAT_TEMPERATURE),
            response_format: None,
        };

        let message = match self.complete(OP_CHAT, completion).await {
            Ok(content) => content,
            Err(AiError::EmptyResponse { .. }) => EMPTY_CHAT_REPLY.to_string(),
            Err(e) => {
                self.fall_back(OP_CHAT, &e);
                fallback_chat_reply(&request.message).to_string()
            }
        };

        ChatReply {
            message,
            suggestions: quick_suggestions(&request.message, !request.pantry_items.is_empty()),
        }
    }

    async fn complete(&self, operation: &str, request: CompletionRequest) -> AiResult<String> {
        let provider = self.provider.as_deref().ok_or_else(AiError::disabled)?;
        self.breaker.allow_request()?;

        let started = Instant::now();
        let request = &request;
        let result = with_retry(&self.retry, operation, move || provider.complete(request)).await;

        match &result {
            Ok(_) => {
                self.breaker.record_success();
                self.metrics.call_succeeded(operation, started.elapsed());
            }
            Err(_) => self.breaker.record_failure(),
        }

        result
    }

    fn fall_back(&self, operation: &str, error: &AiError) {
        log::warn!("AI {} unavailable, using fallback: {}", operation, error);
        self.metrics.fallback_used(operation, error.kind());
    }
}
