use crate::DEFAULT_SEED_DEMO_DATA;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the demo household at startup
    pub seed_demo_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: DEFAULT_SEED_DEMO_DATA,
        }
    }
}
