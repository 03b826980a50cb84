use serde::Serialize;

/// Response for successful delete operations
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted_id: String,
}

impl DeleteResponse {
    pub fn new(id: uuid::Uuid) -> Self {
        Self {
            deleted_id: id.to_string(),
        }
    }
}
