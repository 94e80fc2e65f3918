//! Synthetic manifest listing the GrafanaDashboard resources a chart deploys

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

use crate::loader::{ChartLoader, DashboardFile};
use crate::models::{InstanceSelector, Values};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestList {
    pub api_version: String,
    pub kind: String,
    pub items: Vec<DashboardManifest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: ManifestMetadata,
    pub spec: DashboardSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestMetadata {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    pub name: String,
    pub folder: String,
    pub instance_selector: InstanceSelector,
}

/// Output encodings supported by `generate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yaml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            other => anyhow::bail!("unsupported output format: {other}"),
        }
    }
}

impl ManifestList {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        Ok(match format {
            OutputFormat::Yaml => serde_yaml::to_string(self)?,
            OutputFormat::Json => serde_json::to_string_pretty(self)? + "\n",
        })
    }
}

fn dashboard_manifest(values: &Values, file: &DashboardFile, namespace: &str) -> DashboardManifest {
    let mut labels = values.common_labels.clone();
    labels.insert(
        "app.kubernetes.io/name".to_string(),
        "grafana-dashboards".to_string(),
    );
    labels.insert("grafana-dashboard".to_string(), "true".to_string());
    labels.insert("dashboard-folder".to_string(), file.folder.clone());

    DashboardManifest {
        api_version: values.grafana_operator.api_version.clone(),
        kind: "GrafanaDashboard".to_string(),
        metadata: ManifestMetadata {
            name: format!("dashboard-{}", file.name),
            namespace: namespace.to_string(),
            labels,
            annotations: values.common_annotations.clone(),
        },
        spec: DashboardSpec {
            name: file.name.clone(),
            folder: values.grafana_folder.clone(),
            instance_selector: values.instance_selector.clone(),
        },
    }
}

/// Build the `v1/List` of dashboard resources for every dashboard in the chart
pub fn generate_manifests(loader: &ChartLoader, namespace: &str) -> Result<ManifestList> {
    let values = loader.values();
    let items = loader
        .dashboard_files()?
        .iter()
        .map(|file| {
            debug!("Adding manifest for {}", file.path.display());
            dashboard_manifest(values, file, namespace)
        })
        .collect();

    Ok(ManifestList {
        api_version: "v1".to_string(),
        kind: "List".to_string(),
        items,
    })
}
