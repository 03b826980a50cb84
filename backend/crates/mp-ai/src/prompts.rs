//! Prompt text and message assembly for each gateway operation.

use crate::{ChatMessage, ChatRequest, RecipeRequest, WeeklyPlanRequest};

use mp_core::FamilyMember;

pub const SCAN_MAX_TOKENS: u32 = 2048;
pub const RECIPE_MAX_TOKENS: u32 = 3000;
pub const WEEKLY_PLAN_MAX_TOKENS: u32 = 4000;
pub const CHAT_MAX_TOKENS: u32 = 200;
pub const CHAT_TEMPERATURE: f32 = 0.7;
/// Prior chat turns forwarded with each message
pub const CHAT_HISTORY_TURNS: usize = 4;

pub const SCAN_SYSTEM_PROMPT: &str = r#"You are an expert food ingredient identifier. Analyze the image and identify all visible food ingredients, produce items, or food products.

For each ingredient identified, provide:
- name: the specific ingredient name (e.g., "red bell pepper" not just "pepper")
- quantity: estimated quantity if visible (optional)
- unit: appropriate unit of measurement (optional)
- confidence: confidence score from 0.1 to 1.0
- category: food category (e.g., "Vegetables", "Fruits", "Meat", "Dairy", "Grains", "Pantry")

Also provide:
- totalConfidence: overall confidence in the identification (0.1 to 1.0)
- suggestions: helpful tips for the user (optional)

Respond with JSON in this exact format:
{
  "ingredients": [
    {
      "name": "ingredient name",
      "quantity": "estimated amount or null",
      "unit": "unit or null",
      "confidence": 0.9,
      "category": "category"
    }
  ],
  "totalConfidence": 0.85,
  "suggestions": ["tip1", "tip2"]
}"#;

pub const SCAN_USER_PROMPT: &str = "Please identify all the food ingredients visible in this image. Be specific about ingredient names and provide quantity estimates where possible.";

pub const RECIPE_SYSTEM_PROMPT: &str = r#"You are a professional chef and meal planning expert. Generate recipe recommendations based on available ingredients and family preferences.

Consider:
- Use primarily the available ingredients provided
- Respect dietary restrictions and allergies
- Incorporate family preferences and cuisine styles
- Scale recipes appropriately for family size
- Suggest practical, family-friendly recipes

Respond with JSON in this exact format:
{
  "recipes": [
    {
      "title": "Recipe Name",
      "description": "Brief description",
      "ingredients": ["ingredient 1", "ingredient 2"],
      "instructions": ["step 1", "step 2"],
      "cookTime": 30,
      "servings": 4,
      "difficulty": "Easy",
      "cuisine": "Italian",
      "tags": ["tag1", "tag2"]
    }
  ]
}"#;

pub const WEEKLY_PLAN_SYSTEM_PROMPT: &str = r#"You are a family meal planner and nutritionist. Build a balanced seven-day meal plan that fits the household described by the user.

Plan breakfast, lunch and dinner for each day. Reuse pantry ingredients where possible, respect every dietary restriction and allergy, and keep the variety high across the week.

Respond with JSON in this exact format:
{
  "days": [
    {
      "day": "Sunday",
      "date": "2024-01-07",
      "meals": {
        "breakfast": { "title": "Meal", "description": "Short description", "cookTime": 15, "ingredients": ["item"], "instructions": ["step"], "tags": ["tag"] },
        "lunch": { "title": "Meal", "description": "Short description", "cookTime": 20, "ingredients": ["item"] },
        "dinner": { "title": "Meal", "description": "Short description", "cookTime": 40, "ingredients": ["item"] }
      }
    }
  ],
  "shoppingList": {
    "ingredients": ["item"],
    "categories": { "Vegetables": ["item"] }
  },
  "nutritionSummary": { "averageCalories": 2000, "proteinBalance": "Good", "varietyScore": 8 }
}"#;

pub const CHAT_SYSTEM_PROMPT: &str = "You are a friendly meal planning assistant. Help the user decide what to cook, plan meals for the week and build shopping lists. Keep answers short and practical, and suggest dishes that use what is already in the pantry.";

pub fn image_data_url(base64_image: &str) -> String {
    format!("data:image/jpeg;base64,{}", base64_image)
}

pub fn scan_messages(base64_image: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SCAN_SYSTEM_PROMPT),
        ChatMessage::user_with_image(SCAN_USER_PROMPT, image_data_url(base64_image)),
    ]
}

pub fn recipe_messages(request: &RecipeRequest) -> Vec<ChatMessage> {
    let mut prompt = format!(
        "Generate 3-5 recipe recommendations using these available ingredients: {}\n\nFamily size: {}\nDietary restrictions: {}\nCuisine preferences: {}",
        request.available_ingredients.join(", "),
        request.family_size,
        join_or(&request.dietary_restrictions, "None"),
        join_or(&request.cuisine_preferences, "Any"),
    );

    if !request.family_members.is_empty() {
        prompt.push_str("\n\nFamily members:\n");
        prompt.push_str(&family_context(&request.family_members));
    }

    prompt.push_str(
        "\n\nFocus on recipes that use mostly the available ingredients, with minimal additional items needed.",
    );

    vec![
        ChatMessage::system(RECIPE_SYSTEM_PROMPT),
        ChatMessage::user(prompt),
    ]
}

pub fn weekly_plan_messages(request: &WeeklyPlanRequest) -> Vec<ChatMessage> {
    let mut prompt = format!(
        "Create a meal plan for the week starting {} (a Sunday).\n\nPantry items: {}",
        request.week_starting.format("%Y-%m-%d"),
        join_or(&request.pantry_items, "None"),
    );

    if !request.family_members.is_empty() {
        prompt.push_str("\n\nFamily members:\n");
        prompt.push_str(&family_context(&request.family_members));
    }

    if let Some(preferences) = &request.preferences {
        prompt.push_str(&format!(
            "\n\nHousehold preferences:\n- Family size: {}\n- Cooking skill: {}\n- Budget: {}\n- Cooking time: {}\n- Cuisines: {}\n- Healthy alternatives: {}\n- Seasonal ingredients: {}\n- Meal variety: {}",
            preferences.family_size,
            preferences.cooking_skill,
            preferences.budget,
            preferences.cooking_time,
            join_or(&preferences.cuisine_preferences, "Any"),
            yes_no(preferences.healthy_alternatives),
            yes_no(preferences.seasonal_ingredients),
            yes_no(preferences.meal_variety),
        ));
    }

    vec![
        ChatMessage::system(WEEKLY_PLAN_SYSTEM_PROMPT),
        ChatMessage::user(prompt),
    ]
}

pub fn chat_messages(request: &ChatRequest) -> Vec<ChatMessage> {
    let mut system = format!(
        "{}\n\nPantry items: {}",
        CHAT_SYSTEM_PROMPT,
        join_or(&request.pantry_items, "None"),
    );
    if !request.family_members.is_empty() {
        system.push_str("\n\nFamily members:\n");
        system.push_str(&family_context(&request.family_members));
    }

    let history_start = request.previous.len().saturating_sub(CHAT_HISTORY_TURNS);

    let mut messages = Vec::with_capacity(CHAT_HISTORY_TURNS + 2);
    messages.push(ChatMessage::system(system));
    messages.extend(request.previous[history_start..].iter().map(|turn| {
        ChatMessage::new(turn.role.as_str(), turn.content.clone())
    }));
    messages.push(ChatMessage::user(request.message.clone()));
    messages
}

/// One line per member
pub fn family_context(members: &[FamilyMember]) -> String {
    members
        .iter()
        .map(FamilyMember::prompt_summary)
        .collect::<Vec<_>>()
        .join("\n")
}

fn join_or(values: &[String], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
