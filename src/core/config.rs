// 設定ファイル管理
//
// プロジェクトの設定ファイル（YAML形式）の読み込みと検証を行います。
// 設定ファイルは任意で、すべての項目に既定値があります。

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// チェンジセットID
    #[serde(default = "default_changeset_id")]
    pub changeset_id: String,

    /// チェンジセットの作成者
    #[serde(default = "default_author")]
    pub author: String,

    /// dbchangelog スキーマのバージョン（XSDの参照先を決める）
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// 出力ファイル名のサフィックス
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
}

fn default_changeset_id() -> String {
    "1".to_string()
}

fn default_author() -> String {
    "generated".to_string()
}

fn default_schema_version() -> String {
    "3.8".to_string()
}

fn default_output_suffix() -> String {
    crate::core::naming::OUTPUT_SUFFIX.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            changeset_id: default_changeset_id(),
            author: default_author(),
            schema_version: default_schema_version(),
            output_suffix: default_output_suffix(),
        }
    }
}

impl Config {
    /// デフォルトの設定ファイルパス
    pub const DEFAULT_CONFIG_PATH: &'static str = crate::core::naming::CONFIG_FILE;

    /// XSDのスキーマロケーション
    pub fn schema_location(&self) -> String {
        format!(
            "http://www.liquibase.org/xml/ns/dbchangelog/dbchangelog-{}.xsd",
            self.schema_version
        )
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.changeset_id.is_empty() {
            return Err(anyhow!("changeset_id must not be empty"));
        }

        if self.author.is_empty() {
            return Err(anyhow!("author must not be empty"));
        }

        if self.schema_version.is_empty() {
            return Err(anyhow!("schema_version must not be empty"));
        }

        if self.output_suffix.is_empty() {
            return Err(anyhow!("output_suffix must not be empty"));
        }

        Ok(())
    }
}

/// std::str::FromStrトレイトの実装
impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(yaml: &str) -> Result<Self, Self::Err> {
        serde_saphyr::from_str(yaml).with_context(|| "Failed to parse config file")
    }
}
