// Services Layer
// スキャン、生成、書き出しのドメインロジックを実行するサービス層

pub mod changelog_generator;
pub mod changelog_writer;
pub mod config_loader;
pub mod entity_scanner;
