// エンティティモデル
//
// エンティティクラスから抽出したテーブル名とカラム情報を表現します。
// いずれも1回の実行の中でだけ生きる一時的な値です。

use serde::Serialize;

/// カラム定義
///
/// アノテーションから取得したカラム名と、ソース言語上の型名の組。
/// 重複はそのまま保持します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// カラム名
    pub name: String,
    /// ソース言語上の型名（例: "String", "int"）
    pub source_type: String,
}

impl Column {
    /// 新しいカラムを作成
    pub fn new(name: impl Into<String>, source_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_type: source_type.into(),
        }
    }
}

/// 抽出結果
///
/// `table_name` はテーブル宣言が見つからなかった場合に `None`。
/// `columns` はソースファイル上の出現順を保持します。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// テーブル名
    pub table_name: Option<String>,
    /// カラムのリスト
    pub columns: Vec<Column>,
}

impl ExtractionResult {
    /// 空の抽出結果を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// テーブル名を取得
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// カラム数を取得
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// テーブル作成に必要な情報（テーブル名と1つ以上のカラム）が揃っているか
    pub fn is_complete(&self) -> bool {
        self.table_name.is_some() && !self.columns.is_empty()
    }
}
