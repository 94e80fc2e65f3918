use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::{TempDir, tempdir};

const VALID_DASHBOARD: &str = r#"{
  "title": "CPU Usage",
  "uid": "cpu-usage",
  "description": "Cluster CPU",
  "tags": ["rhoai"],
  "schemaVersion": 39,
  "panels": [
    {
      "id": 1,
      "type": "timeseries",
      "title": "CPU",
      "gridPos": {"h": 8, "w": 12, "x": 0, "y": 0},
      "targets": [{"expr": "sum(rate(container_cpu_usage_seconds_total[5m]))", "refId": "A"}]
    }
  ],
  "templating": {"list": [{"name": "namespace", "type": "query", "query": "label_values(namespace)"}]}
}"#;

const DUPLICATE_PANELS: &str = r#"{
  "title": "Broken",
  "schemaVersion": 39,
  "panels": [
    {"id": 5, "type": "text", "gridPos": {"h": 2, "w": 24}},
    {"id": 5, "type": "text", "gridPos": {"h": 2, "w": 24}}
  ]
}"#;

fn dashboard_manager() -> Command {
    let mut cmd = Command::cargo_bin("dashboard-manager").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("DASHBOARD_CHART_PATH")
        .env_remove("HELM_BIN");
    cmd
}

fn write_chart(root: &Path, dashboards: &[(&str, &str, &str)]) {
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(
        root.join("Chart.yaml"),
        "apiVersion: v2\nname: rhoai-dashboards\nversion: 0.1.0\n",
    )
    .unwrap();
    fs::write(
        root.join("values.yaml"),
        r#"
namespace: redhat-ods-monitoring
grafanaFolder: RHOAI
dashboard_folders:
  - platform
instanceSelector:
  matchLabels:
    dashboards: grafana
grafanaOperator:
  enabled: true
  apiVersion: grafana.integreatly.org/v1beta1
"#,
    )
    .unwrap();

    for (folder, name, content) in dashboards {
        let dir = root.join("dashboards").join(folder);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), content).unwrap();
    }
}

fn valid_chart() -> TempDir {
    let dir = tempdir().unwrap();
    write_chart(dir.path(), &[("platform", "cpu.json", VALID_DASHBOARD)]);
    dir
}

#[test]
fn validate_accepts_valid_chart() {
    let chart = valid_chart();

    dashboard_manager()
        .args(["validate", "--chart-path"])
        .arg(chart.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking folder: platform"))
        .stdout(predicate::str::contains("Valid dashboards: 1"))
        .stdout(predicate::str::contains("Validation errors: 0"))
        .stdout(predicate::str::contains("All dashboards are valid!"));
}

#[test]
fn validate_reports_every_invalid_dashboard() {
    let chart = tempdir().unwrap();
    write_chart(
        chart.path(),
        &[
            ("platform", "a-cpu.json", VALID_DASHBOARD),
            ("platform", "b-dupes.json", DUPLICATE_PANELS),
            ("platform", "c-broken.json", "{\"title\": "),
        ],
    );

    dashboard_manager()
        .args(["validate", "-c"])
        .arg(chart.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Valid dashboards: 1"))
        .stdout(predicate::str::contains("Validation errors: 2"))
        .stdout(predicate::str::contains(
            "validation failed: panels[1].id: duplicate panel ID: 5",
        ))
        .stdout(predicate::str::contains("invalid JSON"))
        .stderr(predicate::str::contains("validation failed with 2 errors"));
}

#[test]
fn validate_uses_chart_path_from_env() {
    let chart = valid_chart();

    dashboard_manager()
        .env("DASHBOARD_CHART_PATH", chart.path())
        .arg("validate")
        .assert()
        .success();
}

#[test]
fn validate_checks_chart_structure() {
    let chart = valid_chart();
    fs::remove_dir_all(chart.path().join("templates")).unwrap();

    dashboard_manager()
        .args(["validate", "-c"])
        .arg(chart.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required file/directory missing: templates",
        ));

    dashboard_manager()
        .args(["validate", "--skip-chart", "-c"])
        .arg(chart.path())
        .assert()
        .success();
}

#[test]
fn list_prints_inventory() {
    let chart = valid_chart();

    dashboard_manager()
        .args(["list", "-c"])
        .arg(chart.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dashboard Inventory:"))
        .stdout(predicate::str::contains("platform/"))
        .stdout(predicate::str::contains("cpu.json ("))
        .stdout(predicate::str::contains("Total dashboards: 1"));
}

#[test]
fn list_fails_for_missing_folder() {
    let chart = valid_chart();
    fs::remove_dir_all(chart.path().join("dashboards")).unwrap();

    dashboard_manager()
        .args(["list", "-c"])
        .arg(chart.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to walk folder platform"));
}

#[test]
fn generate_json_manifest_list() -> Result<(), Box<dyn std::error::Error>> {
    let chart = valid_chart();

    let output = dashboard_manager()
        .args(["generate", "-o", "json", "-c"])
        .arg(chart.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let manifests: Value = serde_json::from_slice(&output)?;
    assert_eq!(manifests["kind"], "List");
    let item = &manifests["items"][0];
    assert_eq!(item["kind"], "GrafanaDashboard");
    assert_eq!(item["metadata"]["name"], "dashboard-cpu");
    // Falls back to the namespace from values.yaml
    assert_eq!(item["metadata"]["namespace"], "redhat-ods-monitoring");
    assert_eq!(item["spec"]["folder"], "RHOAI");
    Ok(())
}

#[test]
fn generate_yaml_with_explicit_namespace() -> Result<(), Box<dyn std::error::Error>> {
    let chart = valid_chart();

    let output = dashboard_manager()
        .args(["generate", "-n", "monitoring", "-c"])
        .arg(chart.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let manifests: serde_yaml::Value = serde_yaml::from_slice(&output)?;
    assert_eq!(
        manifests["items"][0]["metadata"]["namespace"].as_str(),
        Some("monitoring")
    );
    Ok(())
}

#[test]
fn generate_rejects_unknown_format() {
    let chart = valid_chart();

    dashboard_manager()
        .args(["generate", "-o", "xml", "-c"])
        .arg(chart.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format: xml"));
}

#[test]
fn inspect_prints_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let chart = valid_chart();
    let file = chart.path().join("dashboards/platform/cpu.json");

    let output = dashboard_manager()
        .args(["inspect", "-o", "json"])
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let metadata: Value = serde_json::from_slice(&output)?;
    assert_eq!(metadata["title"], "CPU Usage");
    assert_eq!(metadata["uid"], "cpu-usage");
    assert_eq!(metadata["panels_count"], 1);
    assert_eq!(metadata["schema_version"], 39);
    assert_eq!(metadata["has_templating"], true);
    Ok(())
}

#[test]
fn inspect_does_not_validate() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dupes.json");
    fs::write(&file, DUPLICATE_PANELS).unwrap();

    dashboard_manager()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Broken"));
}

#[test]
fn render_substitutes_placeholders() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("template.yaml");
    fs::write(&file, "ns: ${NAMESPACE}, alt: $NAMESPACE, keep: $OTHER\n").unwrap();

    dashboard_manager()
        .args(["render", "--var", "NAMESPACE=prod"])
        .arg(&file)
        .assert()
        .success()
        .stdout("ns: prod, alt: prod, keep: $OTHER\n");
}

#[test]
fn render_substitutes_non_identifier_keys() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("template.yaml");
    fs::write(&file, "ns: ${my-ns}\n").unwrap();

    dashboard_manager()
        .args(["render", "--var", "my-ns=prod"])
        .arg(&file)
        .assert()
        .success()
        .stdout("ns: prod\n");
}

#[test]
fn render_reads_environment_variables() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("template.yaml");
    fs::write(&file, "cluster: $CLUSTER\n").unwrap();

    dashboard_manager()
        .env("DASHBOARD_VAR_CLUSTER", "east")
        .arg("render")
        .arg(&file)
        .assert()
        .success()
        .stdout("cluster: east\n");

    dashboard_manager()
        .env("DASHBOARD_VAR_CLUSTER", "east")
        .args(["render", "--no-env"])
        .arg(&file)
        .assert()
        .success()
        .stdout("cluster: $CLUSTER\n");
}

#[test]
fn render_rejects_malformed_var() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("template.yaml");
    fs::write(&file, "x").unwrap();

    dashboard_manager()
        .args(["render", "--var", "NAMESPACE"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected NAME=VALUE"));
}

#[cfg(unix)]
#[test]
fn template_invokes_helm() {
    use std::os::unix::fs::PermissionsExt;

    let chart = valid_chart();
    let bin_dir = tempdir().unwrap();
    let helm = bin_dir.path().join("helm");
    fs::write(&helm, "#!/bin/sh\necho \"rendered: $*\"\n").unwrap();
    fs::set_permissions(&helm, fs::Permissions::from_mode(0o755)).unwrap();

    dashboard_manager()
        .args(["template", "-r", "rhoai", "-n", "obs", "--helm-bin"])
        .arg(&helm)
        .arg("-c")
        .arg(chart.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rendered: template rhoai "))
        .stdout(predicate::str::contains("--namespace obs"));
}

#[test]
fn template_reports_missing_helm() {
    let chart = valid_chart();

    dashboard_manager()
        .args(["template", "--helm-bin", "no-such-helm-binary-here", "-c"])
        .arg(chart.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}
