// Core Domain
// エンティティ抽出結果、チェンジセット、設定、エラー型の純粋なドメインモデル

pub mod changeset;
pub mod config;
pub mod entity;
pub mod error;
pub mod naming;
