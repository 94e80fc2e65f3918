//! File scanning utilities for discovering dashboard JSON files

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A dashboard file found in one of the chart's dashboard folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardFile {
    pub path: PathBuf,
    /// Configured folder the file was found under
    pub folder: String,
    /// File name without the `.json` extension
    pub name: String,
    pub size: u64,
}

impl DashboardFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub struct DashboardScanner;

impl DashboardScanner {
    /// Check if a file name ends in `.json`
    pub fn is_dashboard_file(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(".json"))
    }

    /// Recursively scan a folder for dashboard files, in lexical order
    pub fn scan_folder(dir: &Path, folder: &str) -> Result<Vec<DashboardFile>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk folder {folder}"))?;
            if !entry.file_type().is_file() || !Self::is_dashboard_file(entry.path()) {
                continue;
            }

            let metadata = entry
                .metadata()
                .with_context(|| format!("failed to stat {}", entry.path().display()))?;
            let name = {
                let file_name = entry.file_name().to_string_lossy();
                file_name
                    .strip_suffix(".json")
                    .unwrap_or(&file_name)
                    .to_string()
            };

            files.push(DashboardFile {
                path: entry.into_path(),
                folder: folder.to_string(),
                name,
                size: metadata.len(),
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_folder_recurses_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("nested")).unwrap();
        fs::write(root.join("b.json"), "{}").unwrap();
        fs::write(root.join("a.json"), "{}").unwrap();
        fs::write(root.join("README.md"), "docs").unwrap();
        fs::write(root.join("nested").join("c.json"), "{\"x\": 1}").unwrap();

        let files = DashboardScanner::scan_folder(root, "platform").unwrap();
        let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(files.iter().all(|f| f.folder == "platform"));
        assert_eq!(files[2].size, 8);
        assert_eq!(files[0].file_name(), "a.json");
    }

    #[test]
    fn test_scan_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let error = DashboardScanner::scan_folder(&temp_dir.path().join("nope"), "nope")
            .unwrap_err()
            .to_string();
        assert_eq!(error, "failed to walk folder nope");
    }

    #[test]
    fn test_is_dashboard_file() {
        assert!(DashboardScanner::is_dashboard_file(Path::new("x/cpu.json")));
        assert!(!DashboardScanner::is_dashboard_file(Path::new("x/cpu.yaml")));
        assert!(!DashboardScanner::is_dashboard_file(Path::new("x/json")));
    }
}
