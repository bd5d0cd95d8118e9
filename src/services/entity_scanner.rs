// エンティティスキャナーサービス
//
// アノテーション付きエンティティクラスを行単位でスキャンし、
// テーブル名とカラム（名前と型）の並びを抽出します。
// 文法の解析は行わず、行ごとのパターンマッチのみで判定します。

use crate::core::entity::{Column, ExtractionResult};
use crate::core::error::IoError;
use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// テーブル宣言: `@Table(name = "...")`
const TABLE_PATTERN: &str = r#"@Table\(name\s*=\s*"(.*?)"\)"#;

/// カラム宣言: `@Column(name = "...")`
const COLUMN_PATTERN: &str = r#"@Column\(name\s*=\s*"(.*?)"\)"#;

/// フィールド宣言: `<visibility> <type> <identifier>;`
const FIELD_PATTERN: &str = r"(private|protected|public)\s+(\w+)\s+\w+;";

/// 引数なしのアクセサ宣言: `public <type> <identifier>()`
const ACCESSOR_PATTERN: &str = r"public\s+(\w+)\s+\w+\(\)";

/// エンティティスキャナーサービス
#[derive(Debug, Clone)]
pub struct EntityScannerService {
    table_re: Regex,
    column_re: Regex,
    field_re: Regex,
    accessor_re: Regex,
}

impl EntityScannerService {
    /// 新しいEntityScannerServiceを作成
    pub fn new() -> Result<Self> {
        Ok(Self {
            table_re: Regex::new(TABLE_PATTERN).context("Invalid table pattern")?,
            column_re: Regex::new(COLUMN_PATTERN).context("Invalid column pattern")?,
            field_re: Regex::new(FIELD_PATTERN).context("Invalid field pattern")?,
            accessor_re: Regex::new(ACCESSOR_PATTERN).context("Invalid accessor pattern")?,
        })
    }

    /// エンティティファイルを読み込んでスキャンする
    ///
    /// # Errors
    ///
    /// - ファイルが存在しない場合
    /// - ファイルの読み込みに失敗した場合
    pub fn scan_file(&self, file_path: &Path) -> Result<ExtractionResult> {
        if !file_path.exists() {
            return Err(IoError::FileNotFound {
                path: file_path.display().to_string(),
            }
            .into());
        }

        let content = fs::read_to_string(file_path).map_err(|e| IoError::FileRead {
            path: file_path.display().to_string(),
            cause: e.to_string(),
        })?;

        let result = self.scan_str(&content);
        debug!(
            file = %file_path.display(),
            table = ?result.table_name,
            columns = result.column_count(),
            "Scanned entity file"
        );

        Ok(result)
    }

    /// 文字列全体をスキャンする
    pub fn scan_str(&self, content: &str) -> ExtractionResult {
        let lines: Vec<&str> = content.lines().collect();
        self.scan_lines(&lines)
    }

    /// 行の並びをスキャンする
    ///
    /// 一致しない行は無視され、失敗することはありません。
    pub fn scan_lines(&self, lines: &[&str]) -> ExtractionResult {
        let mut result = ExtractionResult::new();

        for (i, line) in lines.iter().enumerate() {
            // 後に出現したテーブル宣言が優先される
            if let Some(name) = capture(&self.table_re, line, 1) {
                if !name.is_empty() {
                    result.table_name = Some(name.to_string());
                }
            }

            let Some(column_name) = capture(&self.column_re, line, 1) else {
                continue;
            };

            // 直後の1行だけを見る。最終行のアノテーションは捨てられる
            let Some(next_line) = lines.get(i + 1) else {
                debug!(column = column_name, "Column annotation on last line, skipped");
                continue;
            };

            match self.declared_type(next_line) {
                Some(source_type) => {
                    result.columns.push(Column::new(column_name, source_type));
                }
                None => {
                    debug!(column = column_name, "No field or accessor after annotation, skipped");
                }
            }
        }

        result
    }

    /// フィールド宣言、なければアクセサ宣言から型名を取り出す
    fn declared_type<'a>(&self, line: &'a str) -> Option<&'a str> {
        capture(&self.field_re, line, 2).or_else(|| capture(&self.accessor_re, line, 1))
    }
}

fn capture<'a>(re: &Regex, line: &'a str, group: usize) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(group))
        .map(|m| m.as_str())
}
