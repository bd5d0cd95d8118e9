// CLI Layer
// ユーザー入力の受付とコマンドルーティング

pub mod command_context;
pub mod commands;

use crate::core::changeset::ChangeMode;
use crate::core::entity::Column;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// 出力フォーマット
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

/// Liquigen - Liquibase changelog generator
///
/// Scans an annotated entity class and generates a Liquibase XML changelog
/// together with its rollback.
#[derive(Parser, Debug)]
#[command(name = crate::core::naming::APP_NAME)]
#[command(author = "Liquigen Contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Liquibase XML scripts.")]
#[command(args_override_self = true)]
#[command(long_about = "Liquigen - Liquibase changelog generator

Scans a single entity class for @Table and @Column annotations and writes
a Liquibase changelog (with rollback) next to it.

Without a column directive a createTable change set is generated from every
annotated column. With --add-column, --delete-column or --modify-column only
that single column change is generated.")]
#[command(after_help = "EXAMPLES:
  # Create table from entity
  liquigen -f src/model/Employee.java

  # Add a column
  liquigen -f Employee.java --add-column email String

  # Delete a column
  liquigen -f Employee.java --delete-column email

  # Change a column type
  liquigen -f Employee.java --modify-column age Long")]
pub struct Cli {
    /// Path to the Java entity file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Add a column
    #[arg(
        short = 'c',
        long,
        num_args = 2,
        action = ArgAction::Set,
        value_names = ["COLUMN_NAME", "COLUMN_TYPE"]
    )]
    pub add_column: Option<Vec<String>>,

    /// Delete a column
    #[arg(short, long, value_name = "COLUMN_NAME")]
    pub delete_column: Option<String>,

    /// Modify a column type
    #[arg(
        short,
        long,
        num_args = 2,
        action = ArgAction::Set,
        value_names = ["COLUMN_NAME", "COLUMN_TYPE"]
    )]
    pub modify_column: Option<Vec<String>>,

    /// Output file (defaults to <FILE stem>_liquibase_query.xml)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Dry run - print the changelog without writing a file
    #[arg(long)]
    pub dry_run: bool,

    /// Path to configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Output format (text or json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl Cli {
    /// 指定されたディレクティブから生成モードを決定する
    ///
    /// 同じディレクティブを繰り返した場合は最後の指定が有効になる。
    /// 異なるディレクティブの競合チェックは行わず、
    /// add -> delete -> modify の順に最初に見つかったものを採用する。
    pub fn change_mode(&self) -> ChangeMode {
        if let Some([name, source_type]) = self.add_column.as_deref() {
            return ChangeMode::AddColumn {
                column: Column::new(name.as_str(), source_type.as_str()),
            };
        }

        if let Some(name) = &self.delete_column {
            return ChangeMode::DeleteColumn {
                column_name: name.clone(),
            };
        }

        if let Some([name, source_type]) = self.modify_column.as_deref() {
            return ChangeMode::ModifyColumn {
                column: Column::new(name.as_str(), source_type.as_str()),
            };
        }

        ChangeMode::CreateTable
    }
}
