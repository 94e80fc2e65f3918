//! Chart configuration as read from `values.yaml`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_OPERATOR_API_VERSION: &str = "grafana.integreatly.org/v1beta1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Values {
    pub namespace: String,

    pub common_labels: BTreeMap<String, String>,

    pub common_annotations: BTreeMap<String, String>,

    pub grafana_folder: String,

    /// Folder names under `<chart>/dashboards/` that get deployed
    #[serde(rename = "dashboard_folders")]
    pub dashboard_folders: Vec<String>,

    pub dashboard_namespace: String,

    pub plugins: Vec<Plugin>,

    pub instance_selector: InstanceSelector,

    pub dashboard: DashboardConfig,

    pub resources: Resources,

    pub rbac: Rbac,

    pub grafana_operator: GrafanaOperator,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plugin {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceSelector {
    pub match_labels: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardConfig {
    pub refresh: String,
    pub time_from: String,
    pub templating: TemplatingConfig,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatingConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub limits: ResourceSpec,
    pub requests: ResourceSpec,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceSpec {
    pub cpu: String,
    pub memory: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rbac {
    pub create: bool,
    pub service_account_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrafanaOperator {
    pub enabled: bool,
    pub api_version: String,
}

impl Default for GrafanaOperator {
    fn default() -> Self {
        Self {
            enabled: false,
            api_version: DEFAULT_OPERATOR_API_VERSION.to_string(),
        }
    }
}

impl Values {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document is a chart with every option left at its default
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Namespace for generated resources when none is given explicitly
    pub fn default_namespace(&self) -> Option<&str> {
        [&self.dashboard_namespace, &self.namespace]
            .into_iter()
            .map(String::as_str)
            .find(|ns| !ns.is_empty())
    }
}
