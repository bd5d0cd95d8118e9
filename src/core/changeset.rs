// チェンジセットモデル
//
// 生成モード（テーブル作成、カラム追加・削除・型変更）と、
// 生成された順方向/ロールバックのフラグメントの組を表現します。

use crate::core::entity::Column;
use serde::Serialize;
use std::fmt;

/// 生成モード
///
/// 4つのモードは互いに排他的です。テーブル作成以外のモードでは、
/// スキャン結果のカラムは使われず、呼び出し側が指定した値を使います。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeMode {
    /// スキャンしたすべてのカラムでテーブルを作成
    CreateTable,
    /// カラムを追加
    AddColumn { column: Column },
    /// カラムを削除（元の型は不明）
    DeleteColumn { column_name: String },
    /// カラムの型を変更
    ModifyColumn { column: Column },
}

impl ChangeMode {
    /// モードの識別名
    pub fn kind(&self) -> ChangeKind {
        match self {
            ChangeMode::CreateTable => ChangeKind::CreateTable,
            ChangeMode::AddColumn { .. } => ChangeKind::AddColumn,
            ChangeMode::DeleteColumn { .. } => ChangeKind::DeleteColumn,
            ChangeMode::ModifyColumn { .. } => ChangeKind::ModifyColumn,
        }
    }

    /// ディレクティブが対象とするカラム名（テーブル作成では None）
    pub fn target_column(&self) -> Option<&str> {
        match self {
            ChangeMode::CreateTable => None,
            ChangeMode::AddColumn { column } | ChangeMode::ModifyColumn { column } => {
                Some(column.name.as_str())
            }
            ChangeMode::DeleteColumn { column_name } => Some(column_name.as_str()),
        }
    }

    /// スキャン結果のカラムリストを必要とするか
    pub fn requires_scanned_columns(&self) -> bool {
        matches!(self, ChangeMode::CreateTable)
    }
}

/// 生成モードの種類（出力用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    CreateTable,
    AddColumn,
    DeleteColumn,
    ModifyColumn,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::CreateTable => write!(f, "create_table"),
            ChangeKind::AddColumn => write!(f, "add_column"),
            ChangeKind::DeleteColumn => write!(f, "delete_column"),
            ChangeKind::ModifyColumn => write!(f, "modify_column"),
        }
    }
}

/// 順方向フラグメントとロールバックフラグメントの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeFragment {
    /// 順方向の変更
    pub forward: String,
    /// ロールバック
    pub rollback: String,
}

impl ChangeFragment {
    /// 新しいフラグメントの組を作成
    pub fn new(forward: impl Into<String>, rollback: impl Into<String>) -> Self {
        Self {
            forward: forward.into(),
            rollback: rollback.into(),
        }
    }
}
