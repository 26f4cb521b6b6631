use crate::error::{SortwindError, SortwindResult};
use crate::matcher::LangConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Sortwind settings, as persisted in a JSON file
///
/// The file should have the following structure (all keys optional):
/// ```json
/// {
///     "classRegex": {
///         "html": "class=\"([^\"]*)\"",
///         "javascript": ["className=\"([^\"]*)\"", "class=\"([^\"]*)\""]
///     },
///     "defaultSortOrder": ["container", "flex", "grid"],
///     "customTailwindPrefix": "",
///     "removeDuplicates": true,
///     "prependCustomClasses": false
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Per-language matcher configuration, keyed by language identifier
    pub class_regex: HashMap<String, LangConfig>,
    /// Canonical class order; classes not listed are left unsorted
    pub default_sort_order: Vec<String>,
    /// Prefix applied to every sort-order entry before lookup
    pub custom_tailwind_prefix: String,
    /// Drop repeated classes within one class list
    pub remove_duplicates: bool,
    /// Place unknown classes before the sorted block instead of after
    pub prepend_custom_classes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            class_regex: HashMap::new(),
            default_sort_order: Vec::new(),
            custom_tailwind_prefix: String::new(),
            remove_duplicates: true,
            prepend_custom_classes: false,
        }
    }
}

/// Parse settings from a JSON string
///
/// # Errors
/// Invalid JSON or a shape mismatch in any field
pub fn load_settings_from_str(content: &str) -> SortwindResult<Settings> {
    serde_json::from_str(content)
        .map_err(|e| SortwindError::Config(format!("Failed to parse settings: {}", e)))
}

/// Load settings from a JSON file
///
/// # Arguments
/// * `path` - Path to the JSON file
///
/// # Errors
/// - File not found
/// - Invalid JSON
/// - File read errors
pub fn load_settings_from_file(path: &Path) -> SortwindResult<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        SortwindError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        SortwindError::Config(format!(
            "Failed to parse settings from '{}': {}",
            path.display(),
            e
        ))
    })
}
