// チェンジログ書き出しサービス
//
// 生成されたフラグメントを固定のチェンジログ文書で包み、
// 入力ファイルから導出したパスへ書き出します。
// 名前のエスケープは行いません。

use crate::core::changeset::ChangeFragment;
use crate::core::config::Config;
use crate::core::error::IoError;
use anyhow::Result;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// チェンジログ書き出しサービス
#[derive(Debug, Clone)]
pub struct ChangelogWriterService {
    config: Config,
}

impl ChangelogWriterService {
    /// 設定を指定してChangelogWriterServiceを作成
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// フラグメントをチェンジログ文書としてレンダリング
    pub fn render(&self, fragment: &ChangeFragment) -> String {
        let mut doc = String::new();

        // Stringへの書き込みは失敗しない
        let _ = writeln!(doc, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        let _ = writeln!(
            doc,
            r#"<databaseChangeLog xmlns="http://www.liquibase.org/xml/ns/dbchangelog""#
        );
        let _ = writeln!(
            doc,
            r#"                  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#
        );
        let _ = writeln!(
            doc,
            r#"                  xsi:schemaLocation="http://www.liquibase.org/xml/ns/dbchangelog"#
        );
        let _ = writeln!(doc, r#"                  {}">"#, self.config.schema_location());
        let _ = writeln!(doc);
        let _ = writeln!(
            doc,
            r#"    <changeSet id="{}" author="{}">"#,
            self.config.changeset_id, self.config.author
        );
        let _ = writeln!(doc, "        {}", fragment.forward);
        let _ = writeln!(doc, "        <rollback>");
        let _ = writeln!(doc, "            {}", fragment.rollback);
        let _ = writeln!(doc, "        </rollback>");
        let _ = writeln!(doc, "    </changeSet>");
        let _ = writeln!(doc, "</databaseChangeLog>");

        doc
    }

    /// 入力パスから出力パスを導出
    ///
    /// ファイル名の拡張子を取り除き、設定のサフィックスを付与します。
    /// 例: `model/Employee.java` -> `model/Employee_liquibase_query.xml`
    pub fn output_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        input_path.with_file_name(format!("{}{}", stem, self.config.output_suffix))
    }

    /// 文書をファイルへ書き出す（既存ファイルは上書き）
    ///
    /// # Errors
    ///
    /// - ファイルの書き込みに失敗した場合
    pub fn write(&self, output_path: &Path, document: &str) -> Result<()> {
        debug!(path = %output_path.display(), bytes = document.len(), "Writing changelog");

        fs::write(output_path, document).map_err(|e| IoError::FileWrite {
            path: output_path.display().to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }
}

impl Default for ChangelogWriterService {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
