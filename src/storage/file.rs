use crate::core::ProjectConfig;
use crate::error::{ConfigError, Result};
use crate::utils::{from_json_str, from_toml_str, to_json_string, to_toml_string};
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Conventional TOML project file name
pub const TOML_FILE: &str = "chainsmith.toml";

/// Conventional JSON project file name
pub const JSON_FILE: &str = "chainsmith.json";

/// On-disk format of a project file, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Determine the format from a path's extension
    pub fn from_path(path: &Path) -> Result<FileFormat> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(ConfigError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    /// Conventional file name for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            FileFormat::Toml => TOML_FILE,
            FileFormat::Json => JSON_FILE,
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Toml => write!(f, "toml"),
            FileFormat::Json => write!(f, "json"),
        }
    }
}

/// Project file persistence
///
/// Reading and writing never interpret values; a file that parses is loaded
/// as-is and defects are left to the lint pass.
pub struct ProjectFile;

impl ProjectFile {
    /// Find the project file in a directory, TOML preferred over JSON
    pub fn locate(dir: &Path) -> Option<PathBuf> {
        for name in [TOML_FILE, JSON_FILE] {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Read a project file, format chosen by extension
    pub fn read(path: &Path) -> Result<ProjectConfig> {
        let format = FileFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;
        let config = match format {
            FileFormat::Toml => from_toml_str(&text)?,
            FileFormat::Json => from_json_str(&text)?,
        };
        log::info!("Loaded project configuration from {}", path.display());
        Ok(config)
    }

    /// Write a project file, format chosen by extension
    pub fn write(path: &Path, config: &ProjectConfig) -> Result<()> {
        let format = FileFormat::from_path(path)?;
        let text = match format {
            FileFormat::Toml => to_toml_string(config)?,
            FileFormat::Json => to_json_string(config)?,
        };

        let file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        log::info!("Saved project configuration to {}", path.display());
        Ok(())
    }

    /// Resolve the configuration for a directory
    ///
    /// The file wins when one exists; otherwise the built-in configuration
    /// is returned, which is how the consumer starts up in a fresh project.
    pub fn resolve(dir: &Path) -> Result<ProjectConfig> {
        match Self::locate(dir) {
            Some(path) => Self::read(&path),
            None => {
                log::info!(
                    "No project file in {}, using built-in configuration",
                    dir.display()
                );
                Ok(ProjectConfig::load())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            FileFormat::from_path(Path::new("chainsmith.toml")).unwrap(),
            FileFormat::Toml
        );
        assert_eq!(
            FileFormat::from_path(Path::new("sub/chainsmith.json")).unwrap(),
            FileFormat::Json
        );
        assert!(FileFormat::from_path(Path::new("chainsmith.yaml")).is_err());
        assert!(FileFormat::from_path(Path::new("chainsmith")).is_err());
    }

    #[test]
    fn test_toml_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TOML_FILE);

        let original = ProjectConfig::load();
        ProjectFile::write(&path, &original).unwrap();
        let loaded = ProjectFile::read(&path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_json_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(JSON_FILE);

        let original = ProjectConfig::load();
        ProjectFile::write(&path, &original).unwrap();
        let loaded = ProjectFile::read(&path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_locate_prefers_toml() {
        let dir = tempdir().unwrap();
        let config = ProjectConfig::load();
        ProjectFile::write(&dir.path().join(JSON_FILE), &config).unwrap();
        ProjectFile::write(&dir.path().join(TOML_FILE), &config).unwrap();

        let located = ProjectFile::locate(dir.path()).unwrap();
        assert_eq!(located.file_name().unwrap(), TOML_FILE);
    }

    #[test]
    fn test_locate_missing_is_none() {
        let dir = tempdir().unwrap();
        assert!(ProjectFile::locate(dir.path()).is_none());
    }

    #[test]
    fn test_resolve_falls_back_to_builtin() {
        let dir = tempdir().unwrap();
        let resolved = ProjectFile::resolve(dir.path()).unwrap();
        assert_eq!(resolved, ProjectConfig::load());
    }

    #[test]
    fn test_resolve_reads_authored_file() {
        let dir = tempdir().unwrap();
        let mut config = ProjectConfig::load();
        config.insert_network(
            "staging",
            crate::core::NetworkProfile::new("10.0.0.5", 8546, 6_000_000, "5777"),
        );
        ProjectFile::write(&dir.path().join(TOML_FILE), &config).unwrap();

        let resolved = ProjectFile::resolve(dir.path()).unwrap();
        assert_eq!(resolved, config);
        assert!(resolved.network("staging").is_some());
    }

    #[test]
    fn test_read_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(TOML_FILE);
        fs::write(&path, "networks = \"not a table\"").unwrap();
        assert!(ProjectFile::read(&path).is_err());
    }
}
