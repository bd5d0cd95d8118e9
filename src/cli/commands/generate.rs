// generateコマンドハンドラー
//
// エンティティファイルからチェンジログを生成します。
// - エンティティファイルのスキャン
// - 生成モードに応じたフラグメント生成
// - チェンジログ文書の書き出し
// - 生成されたファイルパスの表示

use crate::cli::command_context::CommandContext;
use crate::cli::commands::{render_output, CommandOutput};
use crate::cli::OutputFormat;
use crate::core::changeset::{ChangeKind, ChangeMode};
use crate::core::entity::Column;
use crate::core::error::IoError;
use crate::services::changelog_generator::ChangelogGeneratorService;
use crate::services::changelog_writer::ChangelogWriterService;
use crate::services::entity_scanner::EntityScannerService;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// generateコマンドの出力構造体
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    /// 生成モード
    pub mode: ChangeKind,
    /// テーブル名
    pub table_name: String,
    /// 出力ファイルパス
    pub output_path: String,
    /// ディレクティブが対象とするカラム名（テーブル作成では出力しない）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    /// エンティティファイルからスキャンしたカラム（モードに関わらず全件）
    pub columns: Vec<Column>,
    /// Dry runモードかどうか
    pub dry_run: bool,
    /// 生成されたチェンジログ（dry-run時のみ）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
}

impl CommandOutput for GenerateOutput {
    fn to_text(&self) -> String {
        match &self.document {
            Some(document) => document.clone(),
            None => format!(
                "{} {}",
                "Liquibase XML created successfully:".green(),
                self.output_path
            ),
        }
    }
}

/// generateコマンドの入力パラメータ
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    /// プロジェクトのルートパス
    pub project_path: PathBuf,
    /// カスタム設定ファイルパス
    pub config_path: Option<PathBuf>,
    /// エンティティファイルのパス
    pub input_path: PathBuf,
    /// 出力ファイルのパス（指定されない場合は入力パスから導出）
    pub output_path: Option<PathBuf>,
    /// 生成モード
    pub mode: ChangeMode,
    /// ドライラン（チェンジログを表示するがファイルは作成しない）
    pub dry_run: bool,
    /// 出力フォーマット
    pub format: OutputFormat,
}

/// generateコマンドハンドラー
#[derive(Debug, Clone)]
pub struct GenerateCommandHandler {}

impl GenerateCommandHandler {
    /// 新しいGenerateCommandHandlerを作成
    pub fn new() -> Self {
        Self {}
    }

    /// generateコマンドを実行
    ///
    /// # Arguments
    ///
    /// * `command` - generateコマンドのパラメータ
    ///
    /// # Returns
    ///
    /// 成功時は表示用のメッセージ、失敗時はエラー。失敗時はファイルを書き出さない
    pub fn execute(&self, command: &GenerateCommand) -> Result<String> {
        let output = self.generate(command)?;
        render_output(&output, command.format)
    }

    /// チェンジログを生成し、dry-runでなければ書き出す
    pub fn generate(&self, command: &GenerateCommand) -> Result<GenerateOutput> {
        let context = CommandContext::load_with_config(
            command.project_path.clone(),
            command.config_path.clone(),
        )?;
        debug!(
            config = %context.config_path.display(),
            exists = context.config_path.exists(),
            "Resolved config path"
        );

        // 入力ファイルの存在確認（メッセージには指定されたままのパスを使う）
        let input_path = context.resolve_path(&command.input_path);
        if !input_path.exists() {
            return Err(IoError::FileNotFound {
                path: command.input_path.display().to_string(),
            }
            .into());
        }

        // エンティティをスキャン
        let scanner = EntityScannerService::new()?;
        let extraction = scanner.scan_file(&input_path)?;

        // フラグメントを生成
        debug!(mode = %command.mode.kind(), "Generating change set");
        let generator = ChangelogGeneratorService::new();
        let fragment = generator.generate(&command.mode, &extraction)?;

        let writer = ChangelogWriterService::new(context.config.clone());
        let document = writer.render(&fragment);

        let output_path = command
            .output_path
            .clone()
            .unwrap_or_else(|| writer.output_path(&command.input_path));

        if !command.dry_run {
            writer.write(&context.resolve_path(&output_path), &document)?;
            info!(path = %output_path.display(), "Changelog written");
        }

        Ok(GenerateOutput {
            mode: command.mode.kind(),
            table_name: extraction.table_name.clone().unwrap_or_default(),
            output_path: output_path.display().to_string(),
            target_column: command.mode.target_column().map(str::to_string),
            columns: extraction.columns,
            dry_run: command.dry_run,
            document: command.dry_run.then_some(document),
        })
    }
}

impl Default for GenerateCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
