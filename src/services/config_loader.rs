// 設定ファイルローダー
//
// YAML形式の設定ファイルを読み込みます。

use crate::core::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// 設定ファイルローダー
pub struct ConfigLoader;

impl ConfigLoader {
    /// YAMLファイルから設定を読み込む
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = content.parse()?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {:?}", path))?;
        Ok(config)
    }

    /// 設定ファイルがあれば読み込み、なければ既定の設定を返す
    pub fn load_or_default(path: &Path) -> Result<Config> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Config::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigLoader::load_or_default(&temp_dir.path().join(".liquigen.yaml")).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".liquigen.yaml");
        fs::write(&path, "changeset_id: \"7\"\nauthor: bob\n").unwrap();

        let config = ConfigLoader::from_file(&path).unwrap();

        assert_eq!(config.changeset_id, "7");
        assert_eq!(config.author, "bob");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".liquigen.yaml");
        fs::write(&path, "output_suffix: \"\"\n").unwrap();

        assert!(ConfigLoader::from_file(&path).is_err());
    }
}
