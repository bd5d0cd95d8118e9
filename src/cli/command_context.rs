// コマンド共通コンテキスト
//
// 設定ファイル読み込みやパス解決の重複をCLI層で集約する。

use crate::core::config::Config;
use crate::services::config_loader::ConfigLoader;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLIコマンド共通の実行コンテキスト
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub project_path: PathBuf,
    pub config_path: PathBuf,
    pub config: Config,
}

impl CommandContext {
    /// カスタム設定パスを考慮してコンテキストを作成
    ///
    /// 指定がなければプロジェクトルートの既定ファイルを読み、存在しなければ既定の設定を使う。
    /// 明示的に指定された設定ファイルは存在しなければエラーになる。
    pub fn load_with_config(project_path: PathBuf, config_path: Option<PathBuf>) -> Result<Self> {
        let (config_path, config) = match config_path {
            Some(path) => {
                let path = resolve(&project_path, path);
                let config = ConfigLoader::from_file(&path)
                    .with_context(|| "Failed to read config file")?;
                (path, config)
            }
            None => {
                let path = project_path.join(Config::DEFAULT_CONFIG_PATH);
                let config = ConfigLoader::load_or_default(&path)
                    .with_context(|| "Failed to read config file")?;
                (path, config)
            }
        };

        Ok(Self {
            project_path,
            config_path,
            config,
        })
    }

    /// プロジェクトルートからの相対パスを絶対パスに解決する
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        resolve(&self.project_path, path.to_path_buf())
    }
}

fn resolve(project_path: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        project_path.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_without_config_file_uses_default() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::load_with_config(temp_dir.path().to_path_buf(), None).unwrap();

        assert_eq!(context.config, Config::default());
        assert_eq!(
            context.config_path,
            temp_dir.path().join(".liquigen.yaml")
        );
    }

    #[test]
    fn test_load_project_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(".liquigen.yaml"), "author: carol\n").unwrap();

        let context = CommandContext::load_with_config(temp_dir.path().to_path_buf(), None).unwrap();

        assert_eq!(context.config.author, "carol");
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let result = CommandContext::load_with_config(
            temp_dir.path().to_path_buf(),
            Some(PathBuf::from("custom.yaml")),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_path() {
        let temp_dir = TempDir::new().unwrap();
        let context = CommandContext::load_with_config(temp_dir.path().to_path_buf(), None).unwrap();

        assert_eq!(
            context.resolve_path(Path::new("Employee.java")),
            temp_dir.path().join("Employee.java")
        );
        assert_eq!(
            context.resolve_path(Path::new("/abs/Employee.java")),
            PathBuf::from("/abs/Employee.java")
        );
    }
}
