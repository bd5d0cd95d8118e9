// Liquigenライブラリのエントリーポイント
//
// モジュール構造:
// - cli: CLIレイヤー（ユーザー入力の受付とコマンドルーティング）
// - core: コアドメインモデル（抽出結果、チェンジセット、設定、エラー）
// - adapters: ソース型とデータベース型の対応付け
// - services: スキャン、チェンジログ生成、書き出し

pub mod adapters;
pub mod cli;
pub mod core;
pub mod services;
