//! Gateway behaviour against a mocked chat-completions endpoint

use mp_ai::{AiGateway, ChatRequest, RecipeRequest, WeeklyPlanRequest};
use mp_config::{AiConfig, CircuitBreakerConfig, RetryConfig};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, body_string_contains, header, method, path},
};

fn gateway_for(server: &MockServer) -> AiGateway {
    let ai = AiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        request_timeout_secs: 5,
        ..AiConfig::default()
    };
    let retry = RetryConfig {
        max_attempts: 2,
        initial_delay_ms: 10,
        jitter: false,
        ..RetryConfig::default()
    };

    AiGateway::from_config(&ai, &retry, &CircuitBreakerConfig::default()).unwrap()
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    }))
}

#[tokio::test]
async fn given_valid_scan_reply_when_identifying_then_normalised_result_returned() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-5",
            "max_tokens": 2048,
            "response_format": { "type": "json_object" }
        })))
        .and(body_string_contains("data:image/jpeg;base64,"))
        .respond_with(completion(
            r#"{"ingredients":[{"name":"Carrot","quantity":"2","unit":"pieces","confidence":1.4,"category":"Vegetables"}],"totalConfidence":0.7,"suggestions":["Roast them"]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);

    // When
    let result = gateway.identify_ingredients(b"fake-jpeg-bytes").await;

    // Then
    assert_eq!(result.ingredients.len(), 1);
    assert_eq!(result.ingredients[0].name, "Carrot");
    assert_eq!(result.ingredients[0].confidence, 1.0);
    assert_eq!(result.total_confidence, 0.7);
    assert_eq!(result.suggestions, vec!["Roast them".to_string()]);
}

#[tokio::test]
async fn given_provider_failure_when_identifying_then_fallback_returned_after_retry() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(2)
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);

    // When
    let result = gateway.identify_ingredients(b"fake-jpeg-bytes").await;

    // Then
    assert_eq!(result.ingredients.len(), 4);
    assert_eq!(result.total_confidence, 0.88);
}

#[tokio::test]
async fn given_unparseable_reply_when_identifying_then_fallback_returned_without_retry() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion("I think I see a tomato"))
        .expect(1)
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);

    // When
    let result = gateway.identify_ingredients(b"fake-jpeg-bytes").await;

    // Then
    assert_eq!(result.total_confidence, 0.88);
}

#[tokio::test]
async fn given_recipe_reply_when_recommending_then_difficulty_coerced() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "max_tokens": 3000 })))
        .and(body_string_contains("Family size: 2"))
        .respond_with(completion(
            r#"{"recipes":[{"title":"Fried Rice","difficulty":"Extreme","ingredients":["rice","eggs"]}]}"#,
        ))
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);
    let request = RecipeRequest {
        available_ingredients: vec!["rice".to_string(), "eggs".to_string()],
        family_size: 2,
        ..RecipeRequest::default()
    };

    // When
    let recipes = gateway.recommend_recipes(&request).await;

    // Then
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].title, "Fried Rice");
    assert_eq!(recipes[0].difficulty.as_str(), "Medium");
    assert_eq!(recipes[0].servings, 2);
}

#[tokio::test]
async fn given_plan_without_days_when_generating_then_fixed_plan_returned() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(r#"{"plan":"none"}"#))
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);
    let week_starting = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
    let request = WeeklyPlanRequest {
        family_members: Vec::new(),
        preferences: None,
        pantry_items: vec!["rice".to_string()],
        week_starting,
    };

    // When
    let plan = gateway.generate_weekly_plan(&request).await;

    // Then
    assert_eq!(plan.days.len(), 7);
    assert_eq!(plan.days[0].date, "2024-03-03");
}

#[tokio::test]
async fn given_chat_reply_when_chatting_then_reply_and_suggestions_returned() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "gpt-4", "max_tokens": 200 })))
        .respond_with(completion("Try a mushroom risotto."))
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);
    let request = ChatRequest {
        message: "What should I cook tonight?".to_string(),
        pantry_items: vec!["mushrooms".to_string()],
        ..ChatRequest::default()
    };

    // When
    let reply = gateway.chat(&request).await;

    // Then
    assert_eq!(reply.message, "Try a mushroom risotto.");
    assert_eq!(reply.suggestions[0], "Show quick recipes");
}

#[tokio::test]
async fn given_empty_chat_content_when_chatting_then_apology_returned() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(completion(""))
        .mount(&server)
        .await;
    let gateway = gateway_for(&server);
    let request = ChatRequest {
        message: "hello".to_string(),
        ..ChatRequest::default()
    };

    // When
    let reply = gateway.chat(&request).await;

    // Then
    assert_eq!(
        reply.message,
        "I'm sorry, I couldn't process that request. Please try again."
    );
}

#[tokio::test]
async fn given_disabled_gateway_when_chatting_then_keyword_fallback_returned() {
    // Given
    let gateway = AiGateway::disabled();
    let request = ChatRequest {
        message: "I need to buy groceries".to_string(),
        ..ChatRequest::default()
    };

    // When
    let reply = gateway.chat(&request).await;

    // Then
    assert!(!gateway.is_enabled());
    assert!(reply.message.contains("shopping lists"));
    assert_eq!(reply.suggestions[0], "Generate shopping list");
}

#[tokio::test]
async fn given_open_circuit_when_identifying_then_provider_not_called() {
    // Given
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;
    let ai = AiConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        ..AiConfig::default()
    };
    let retry = RetryConfig {
        max_attempts: 1,
        ..RetryConfig::default()
    };
    let breaker = CircuitBreakerConfig {
        failure_threshold: 2,
        ..CircuitBreakerConfig::default()
    };
    let gateway = AiGateway::from_config(&ai, &retry, &breaker).unwrap();

    // When
    for _ in 0..4 {
        let result = gateway.identify_ingredients(b"img").await;
        assert_eq!(result.total_confidence, 0.88);
    }

    // Then
    assert_eq!(
        gateway.circuit_breaker().state(),
        mp_ai::CircuitState::Open
    );
}
