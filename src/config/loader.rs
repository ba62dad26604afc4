use crate::domain::model::{PortDocument, ProfileDocument, ServiceDocument};
use crate::domain::ports::ConfigSource;
use crate::utils::error::{ConfigError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

pub const SERVICES_FILE: &str = "services.json";
pub const PROFILES_FILE: &str = "profiles.json";
pub const PORTS_FILE: &str = "ports.json";

/// Config files on disk, resolved against a base directory.
#[derive(Debug, Clone)]
pub struct LocalDirectory {
    base_path: PathBuf,
}

impl LocalDirectory {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl ConfigSource for LocalDirectory {
    fn read_file(&self, file_name: &str) -> Result<String> {
        let full_path = self.locate(file_name);
        fs::read_to_string(&full_path).map_err(|source| ConfigError::Io {
            path: full_path,
            source,
        })
    }

    fn locate(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }
}

/// Reads and decodes the configuration documents. Every call reads the file
/// again; nothing is cached between loads.
#[derive(Debug, Clone)]
pub struct ConfigLoader<S: ConfigSource> {
    source: S,
}

impl<S: ConfigSource> ConfigLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 讀取並解析指定的 JSON 檔案
    pub fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<T> {
        let path = self.source.locate(file_name);
        tracing::debug!("Loading {}", path.display());

        let content = self.source.read_file(file_name)?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn services(&self) -> Result<ServiceDocument> {
        self.load(SERVICES_FILE)
    }

    pub fn profiles(&self) -> Result<ProfileDocument> {
        self.load(PROFILES_FILE)
    }

    pub fn ports(&self) -> Result<PortDocument> {
        self.load(PORTS_FILE)
    }
}

impl ConfigLoader<LocalDirectory> {
    /// 從目錄建立 loader
    pub fn from_dir<P: Into<PathBuf>>(base_path: P) -> Self {
        Self::new(LocalDirectory::new(base_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_load_services_from_dir() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            SERVICES_FILE,
            &json!({"services": {"api": {"dependencies": []}}}).to_string(),
        );

        let loader = ConfigLoader::from_dir(dir.path());
        let doc = loader.services().unwrap();
        assert_eq!(doc.names(), vec!["api"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::from_dir(dir.path());

        match loader.ports() {
            Err(ConfigError::Io { path, .. }) => assert!(path.ends_with(PORTS_FILE)),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, PROFILES_FILE, "{\"profiles\": {");

        let loader = ConfigLoader::from_dir(dir.path());
        match loader.profiles() {
            Err(ConfigError::Parse { path, .. }) => assert!(path.ends_with(PROFILES_FILE)),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_key_is_parse_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, PORTS_FILE, &json!({"ports": {}, "checkPorts": []}).to_string());

        let loader = ConfigLoader::from_dir(dir.path());
        let err = loader.ports().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("portRange"));
    }
}
