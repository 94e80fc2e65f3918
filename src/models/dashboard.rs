use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// A Grafana dashboard document as exported to JSON.
///
/// Every field is optional on input. Missing and `null` fields decode to their
/// zero value, so a `schemaVersion` of `0` is indistinguishable from an
/// absent one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub uid: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub panels: Vec<Panel>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub time: TimeRange,

    #[serde(default, deserialize_with = "null_as_default")]
    pub templating: Templating,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub schema_version: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Panel {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub panel_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: Vec<Target>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub grid_pos: GridPos,

    #[serde(default, deserialize_with = "null_as_default")]
    pub field_config: FieldConfig,
}

/// A query bound to a panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Target {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expr: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ref_id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub interval_factor: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub step: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridPos {
    #[serde(default, deserialize_with = "null_as_default")]
    pub h: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub w: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub x: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub y: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub defaults: FieldDefaults,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefaults {
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub display_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub custom: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeRange {
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Templating {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<TemplateVariable>,
}

/// A named, substitutable dashboard parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateVariable {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub variable_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,

    /// Plain string for older exports, an object for newer datasource queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub refresh: i64,
}

/// Read-only summary of a dashboard, independent of whether it validates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub uid: String,
    pub tags: Vec<String>,
    pub panels_count: usize,
    pub schema_version: i64,
    pub has_templating: bool,
}

impl Dashboard {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn metadata(&self) -> DashboardMetadata {
        DashboardMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            id: self.id.clone(),
            uid: self.uid.clone(),
            tags: self.tags.clone(),
            panels_count: self.panels.len(),
            schema_version: self.schema_version,
            has_templating: !self.templating.list.is_empty(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
