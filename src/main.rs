use anyhow::Result;
use clap::Parser;
use colored::control as color_control;
use colored::Colorize;
use liquigen::cli::commands::generate::{GenerateCommand, GenerateCommandHandler};
use liquigen::cli::Cli;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    // CLIをパースして実行
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // 失敗はメッセージのみで通知し、終了コードは変えない
    match run_command(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
    }
}

/// トレーシングを初期化する
///
/// RUST_LOG が設定されていればそれを優先する。
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// コマンドを実行する
fn run_command(cli: Cli) -> Result<String> {
    // --no-color フラグの処理
    if cli.no_color {
        color_control::set_override(false);
    }

    // プロジェクトのルートパスを取得
    let project_path = env::current_dir()?;

    let handler = GenerateCommandHandler::new();
    let command = GenerateCommand {
        project_path,
        config_path: cli.config.clone(),
        input_path: cli.file.clone(),
        output_path: cli.output.clone(),
        mode: cli.change_mode(),
        dry_run: cli.dry_run,
        format: cli.format,
    };
    handler.execute(&command)
}
