// コマンドハンドラー層
// CLIコマンドの実装

pub mod generate;

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;

/// コマンド出力の共通インターフェース
pub trait CommandOutput: Serialize {
    /// テキスト形式の出力
    fn to_text(&self) -> String;
}

/// 出力フォーマットに従ってコマンド出力をレンダリング
pub fn render_output<T: CommandOutput>(output: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(output.to_text()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(output).with_context(|| "Failed to serialize output")
        }
    }
}
