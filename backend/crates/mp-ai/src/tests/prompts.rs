use crate::prompts::{chat_messages, image_data_url, recipe_messages};
use crate::{ChatRequest, ChatRole, ChatTurn, MessageContent, RecipeRequest};

use googletest::assert_that;
use googletest::prelude::*;
use mp_core::FamilyMember;
use uuid::Uuid;

fn text_of(content: &MessageContent) -> &str {
    match content {
        MessageContent::Text(text) => text,
        MessageContent::Parts(_) => "",
    }
}

#[test]
fn given_base64_image_when_building_data_url_then_jpeg_prefix() {
    assert_that!(image_data_url("abc"), eq("data:image/jpeg;base64,abc"));
}

#[test]
fn given_empty_restrictions_when_building_recipe_prompt_then_none_and_any() {
    // Given
    let request = RecipeRequest {
        available_ingredients: vec!["rice".to_string(), "eggs".to_string()],
        family_size: 3,
        ..RecipeRequest::default()
    };

    // When
    let messages = recipe_messages(&request);

    // Then
    assert_that!(messages, len(eq(2)));
    let user = text_of(&messages[1].content);
    assert_that!(user, contains_substring("available ingredients: rice, eggs"));
    assert_that!(user, contains_substring("Family size: 3"));
    assert_that!(user, contains_substring("Dietary restrictions: None"));
    assert_that!(user, contains_substring("Cuisine preferences: Any"));
}

#[test]
fn given_family_members_when_building_recipe_prompt_then_context_lines_included() {
    // Given
    let mut member = FamilyMember::new(Uuid::new_v4(), "Sam".to_string());
    member.age = Some(8);
    member.allergies = vec!["peanuts".to_string()];
    let request = RecipeRequest {
        family_members: vec![member],
        ..RecipeRequest::default()
    };

    // When
    let messages = recipe_messages(&request);

    // Then
    assert_that!(
        text_of(&messages[1].content),
        contains_substring(
            "Sam (age 8): dietary needs: none, allergies: peanuts, preferences: none"
        )
    );
}

#[test]
fn given_long_history_when_building_chat_messages_then_last_four_turns_kept() {
    // Given
    let previous = (0..6)
        .map(|i| ChatTurn {
            role: if i % 2 == 0 {
                ChatRole::User
            } else {
                ChatRole::Assistant
            },
            content: format!("turn {}", i),
        })
        .collect();
    let request = ChatRequest {
        message: "what now?".to_string(),
        previous,
        ..ChatRequest::default()
    };

    // When
    let messages = chat_messages(&request);

    // Then
    assert_that!(messages, len(eq(6)));
    assert_that!(messages[0].role, eq("system"));
    assert_that!(text_of(&messages[1].content), eq("turn 2"));
    assert_that!(messages[1].role, eq("user"));
    assert_that!(messages[2].role, eq("assistant"));
    assert_that!(text_of(&messages[5].content), eq("what now?"));
}
