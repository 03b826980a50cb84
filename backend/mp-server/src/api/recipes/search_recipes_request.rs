use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchRecipesRequest {
    /// Matched against title and description
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Vec<String>,
    pub max_cook_time: Option<i32>,
}
