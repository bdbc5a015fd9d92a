use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Snapshot configuration file structure
///
/// ```yaml
/// snapshot_name: season-one
/// input: allocations.csv
/// output: manifests/season-one.json
/// pretty: true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Human-readable snapshot name (for logs and organization)
    pub snapshot_name: String,

    /// Allocation records, `.csv` or `.json`. Relative to the config file.
    pub input: PathBuf,

    /// Where the manifest is written. Relative to the config file.
    pub output: PathBuf,

    /// Pretty-print the manifest JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl SnapshotConfig {
    /// Load a config and resolve its relative paths against the config file's directory.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: SnapshotConfig = serde_yaml::from_str(&contents)?;

        if config.snapshot_name.trim().is_empty() {
            return Err(CliError::InvalidConfig(format!(
                "{}: snapshot_name must not be empty",
                path.display()
            )));
        }

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.input = resolve(base, &config.input);
        config.output = resolve(base, &config.output);

        Ok(config)
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("snapshot.yaml");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "snapshot_name: season-one\ninput: allocations.csv\noutput: out/manifest.json\n",
        );

        let config = SnapshotConfig::load(&path).unwrap();
        assert_eq!(config.snapshot_name, "season-one");
        assert_eq!(config.input, dir.path().join("allocations.csv"));
        assert_eq!(config.output, dir.path().join("out/manifest.json"));
        assert!(config.pretty);
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("elsewhere.json");
        let path = write_config(
            &dir,
            &format!(
                "snapshot_name: s\ninput: {}\noutput: manifest.json\npretty: false\n",
                input.display()
            ),
        );

        let config = SnapshotConfig::load(&path).unwrap();
        assert_eq!(config.input, input);
        assert!(!config.pretty);
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "snapshot_name: ''\ninput: a.csv\noutput: b.json\n");

        assert!(matches!(
            SnapshotConfig::load(&path),
            Err(CliError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_missing_field_is_yaml_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "snapshot_name: s\ninput: a.csv\n");

        assert!(matches!(SnapshotConfig::load(&path), Err(CliError::Yaml(_))));
    }
}
