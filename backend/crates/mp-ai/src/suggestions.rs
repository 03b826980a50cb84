//! Keyword-driven quick suggestions and canned chat replies.

pub const EMPTY_CHAT_REPLY: &str = "I'm sorry, I couldn't process that request. Please try again.";

fn mentions(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| message.contains(keyword))
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Follow-up prompts offered after a chat reply.
///
/// Rules are checked in order and the first matching one wins.
pub fn quick_suggestions(message: &str, has_pantry_items: bool) -> Vec<String> {
    let message = message.to_lowercase();

    if mentions(&message, &["recipe", "cook", "make"]) {
        return owned(&["Show quick recipes", "Find healthy options", "Use my pantry items"]);
    }

    if mentions(&message, &["plan", "week", "meal"]) {
        return owned(&["Plan this week", "Suggest breakfast", "Dinner ideas", "Prep meals"]);
    }

    if mentions(&message, &["shop", "buy", "list"]) {
        return owned(&[
            "Generate shopping list",
            "Find missing ingredients",
            "Weekly groceries",
        ]);
    }

    if mentions(&message, &["healthy", "diet", "nutrition"]) {
        return owned(&["Healthy recipes", "Low calorie options", "High protein meals"]);
    }

    if has_pantry_items {
        return owned(&[
            "What can I cook?",
            "Quick meal ideas",
            "Use expiring items",
            "Meal planning",
        ]);
    }

    owned(&[
        "Add ingredients",
        "Browse recipes",
        "Plan meals",
        "Get cooking tips",
    ])
}

/// Reply used when the chat model cannot be reached
pub fn fallback_chat_reply(message: &str) -> &'static str {
    let message = message.to_lowercase();

    if mentions(&message, &["recipe", "cook"]) {
        "I can help you find recipes! Try scanning some ingredients or browsing our curated lists to get started."
    } else if mentions(&message, &["plan", "meal"]) {
        "Great idea to plan ahead! Add some ingredients to your pantry and I'll suggest meal combinations for the week."
    } else if mentions(&message, &["shop", "buy"]) {
        "I can help generate shopping lists based on your meal plans. Start by planning some meals first!"
    } else if mentions(&message, &["healthy", "diet"]) {
        "I'd love to help with healthy eating! Share your dietary preferences and I'll suggest nutritious meal options."
    } else {
        "I'm your meal planning assistant! I can help you find recipes, plan meals, and create shopping lists. What would you like to work on?"
    }
}
