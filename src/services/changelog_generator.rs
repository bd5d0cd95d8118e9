// チェンジログ生成サービス
//
// 生成モードに応じて、順方向の変更フラグメントとロールバックフラグメントを
// プレーンテキストとして生成します。

use crate::adapters::type_mapping::{TypeMappingService, DEFAULT_SQL_TYPE};
use crate::core::changeset::{ChangeFragment, ChangeMode};
use crate::core::entity::{Column, ExtractionResult};
use crate::core::error::ParseError;
use tracing::debug;

/// チェンジログ生成サービス
#[derive(Debug, Clone, Default)]
pub struct ChangelogGeneratorService {
    type_mapper: TypeMappingService,
}

impl ChangelogGeneratorService {
    /// 新しいChangelogGeneratorServiceを作成
    pub fn new() -> Self {
        Self {
            type_mapper: TypeMappingService::new(),
        }
    }

    /// 抽出結果と生成モードからフラグメントを生成
    ///
    /// テーブル作成モードではテーブル名と1つ以上のカラムが必要です。
    /// それ以外のモードではテーブル名のみを使い、抽出したカラムは無視します。
    ///
    /// # Errors
    ///
    /// - テーブル作成モードでテーブル名またはカラムが無い場合
    /// - カラム単位のモードでテーブル名が無い場合
    pub fn generate(
        &self,
        mode: &ChangeMode,
        extraction: &ExtractionResult,
    ) -> Result<ChangeFragment, ParseError> {
        if mode.requires_scanned_columns() && !extraction.is_complete() {
            return Err(ParseError::MissingTableOrColumns);
        }

        let table_name = extraction
            .table_name()
            .ok_or(ParseError::MissingTableName)?;

        let fragment = match mode {
            ChangeMode::CreateTable => self.create_table(table_name, &extraction.columns),
            ChangeMode::AddColumn { column } => {
                self.add_column(table_name, &column.name, &column.source_type)
            }
            ChangeMode::DeleteColumn { column_name } => self.delete_column(table_name, column_name),
            ChangeMode::ModifyColumn { column } => {
                self.modify_column(table_name, &column.name, &column.source_type)
            }
        };

        Ok(fragment)
    }

    /// テーブル作成。ロールバックはテーブル全体を削除する
    pub fn create_table(&self, table_name: &str, columns: &[Column]) -> ChangeFragment {
        let mut lines = Vec::with_capacity(columns.len() + 2);
        lines.push(format!(r#"<createTable tableName="{}">"#, table_name));
        for column in columns {
            lines.push(format!(
                r#"    <column name="{}" type="{}"/>"#,
                column.name,
                self.sql_type(&column.source_type)
            ));
        }
        lines.push("</createTable>".to_string());

        ChangeFragment::new(lines.join("\n"), drop_table(table_name))
    }

    /// カラム追加。ロールバックは追加したカラムを削除する
    pub fn add_column(
        &self,
        table_name: &str,
        column_name: &str,
        source_type: &str,
    ) -> ChangeFragment {
        let sql_type = self.sql_type(source_type);
        ChangeFragment::new(
            add_column(table_name, column_name, sql_type),
            drop_column(table_name, column_name),
        )
    }

    /// カラム削除
    ///
    /// 元の型は参照しないため、ロールバックで再作成するカラムは常に
    /// 既定型（VARCHAR(255)）になる。
    pub fn delete_column(&self, table_name: &str, column_name: &str) -> ChangeFragment {
        ChangeFragment::new(
            drop_column(table_name, column_name),
            add_column(table_name, column_name, DEFAULT_SQL_TYPE),
        )
    }

    /// カラム型変更
    ///
    /// 変更前の型は不明なので、ロールバックは既定型（VARCHAR(255)）に戻す。
    pub fn modify_column(
        &self,
        table_name: &str,
        column_name: &str,
        source_type: &str,
    ) -> ChangeFragment {
        let sql_type = self.sql_type(source_type);
        ChangeFragment::new(
            modify_data_type(table_name, column_name, sql_type),
            modify_data_type(table_name, column_name, DEFAULT_SQL_TYPE),
        )
    }

    fn sql_type(&self, source_type: &str) -> &'static str {
        if !self.type_mapper.is_known(source_type) {
            debug!(source_type, fallback = DEFAULT_SQL_TYPE, "Unknown source type");
        }
        self.type_mapper.to_sql_type(source_type)
    }
}

fn drop_table(table_name: &str) -> String {
    format!(r#"<dropTable tableName="{}"/>"#, table_name)
}

fn add_column(table_name: &str, column_name: &str, sql_type: &str) -> String {
    format!(
        "<addColumn tableName=\"{}\">\n    <column name=\"{}\" type=\"{}\"/>\n</addColumn>",
        table_name, column_name, sql_type
    )
}

fn drop_column(table_name: &str, column_name: &str) -> String {
    format!(
        r#"<dropColumn tableName="{}" columnName="{}"/>"#,
        table_name, column_name
    )
}

fn modify_data_type(table_name: &str, column_name: &str, sql_type: &str) -> String {
    format!(
        r#"<modifyDataType tableName="{}" columnName="{}" newDataType="{}"/>"#,
        table_name, column_name, sql_type
    )
}
