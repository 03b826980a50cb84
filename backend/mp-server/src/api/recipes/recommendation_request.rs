use serde::Deserialize;

/// Body of POST /api/recipes/recommendations. Omitted fields are filled from
/// the user's pantry and preferences.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub available_ingredients: Option<Vec<String>>,
    pub dietary_restrictions: Vec<String>,
    pub cuisine_preferences: Option<Vec<String>>,
    pub family_size: Option<u32>,
}

/// Body of POST /api/recipes/quick-generate
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuickGenerateRequest {
    pub meal_type: Option<String>,
}
