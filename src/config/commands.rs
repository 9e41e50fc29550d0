use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Treat authoring warnings as check failures
    #[serde(default)]
    pub strict: bool,
}
