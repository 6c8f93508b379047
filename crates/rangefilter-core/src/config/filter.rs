//! Range filter configuration.

use serde::{Deserialize, Serialize};

/// Which name converter maps external parameter names to properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameConverterKind {
    /// Parameter names are property names.
    #[default]
    Identity,
    /// `snake_case` parameters map to `camelCase` properties.
    SnakeCase,
}

/// Range filter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Query parameter prefix, `range` in `range[price][gt]=10`.
    #[serde(default = "default_parameter_name")]
    pub parameter_name: String,
    /// Properties the filter is enabled for. `None` enables every mapped property.
    #[serde(default)]
    pub properties: Option<Vec<String>>,
    /// Name converter applied to incoming property names.
    #[serde(default)]
    pub name_converter: NameConverterKind,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            parameter_name: default_parameter_name(),
            properties: None,
            name_converter: NameConverterKind::default(),
        }
    }
}

fn default_parameter_name() -> String {
    "range".to_string()
}
