//! Local rendering of chart templates through the `helm` binary

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};
use which::which;

pub const DEFAULT_HELM_BIN: &str = "helm";

/// Arguments for one `helm template` invocation
#[derive(Debug, Clone)]
pub struct RenderRequest<'a> {
    pub chart_path: &'a Path,
    pub release_name: &'a str,
    pub namespace: &'a str,
    pub values_file: Option<&'a Path>,
}

impl RenderRequest<'_> {
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "template".into(),
            self.release_name.into(),
            self.chart_path.into(),
            "--namespace".into(),
            self.namespace.into(),
        ];
        if let Some(values_file) = self.values_file {
            args.push("--values".into());
            args.push(values_file.into());
        }
        args
    }
}

pub struct HelmRenderer {
    binary: PathBuf,
}

impl HelmRenderer {
    /// Locate the helm binary, either a path or a name looked up on PATH
    pub fn new(helm_bin: &str) -> Result<Self> {
        let binary = which(helm_bin).with_context(|| {
            format!(
                "helm binary '{helm_bin}' not found. Install Helm from https://helm.sh/docs/intro/install/ or pass --helm-bin"
            )
        })?;
        debug!("Using helm binary at {}", binary.display());
        Ok(Self { binary })
    }

    /// Run `helm template` and return the rendered manifests
    pub fn render(&self, request: &RenderRequest<'_>) -> Result<String> {
        let args = request.args();
        debug!("Running {} {:?}", self.binary.display(), args);

        let output = Command::new(&self.binary)
            .args(&args)
            .output()
            .with_context(|| format!("failed to run {}", self.binary.display()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            anyhow::bail!(
                "helm template failed: {}\nOutput: {}{}",
                output.status,
                stdout,
                stderr
            );
        }

        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            warn!("helm: {line}");
        }

        Ok(stdout.into_owned())
    }
}
