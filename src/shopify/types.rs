use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of `GET /themes.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSummary {
    pub id: String,
    pub name: String,
    pub role: String,
}

impl ThemeSummary {
    /// Extract themes from a raw listing, tolerating numeric or string ids
    /// and skipping malformed entries.
    pub fn from_listing(listing: &Value) -> Vec<ThemeSummary> {
        listing["themes"]
            .as_array()
            .map(|themes| {
                themes
                    .iter()
                    .filter_map(|theme| {
                        let id = match &theme["id"] {
                            Value::Number(n) => n.to_string(),
                            Value::String(s) => s.clone(),
                            _ => return None,
                        };
                        Some(ThemeSummary {
                            id,
                            name: theme["name"].as_str().unwrap_or_default().to_string(),
                            role: theme["role"].as_str().unwrap_or_default().to_string(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The published theme has role `main`.
    pub fn is_main(&self) -> bool {
        self.role == "main"
    }
}

/// One entry of a theme's asset listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub key: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl AssetInfo {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            content_type: None,
            size: None,
            updated_at: None,
        }
    }
}
