// エラー型定義
//
// アプリケーション全体で使用されるカスタムエラー型を提供します。
// thiserrorを使用して、IoError と ParseError を定義します。

use thiserror::Error;

/// I/Oエラー
///
/// ファイル操作時に発生するエラーを表現します。
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found
    #[error("File '{path}' not found.")]
    FileNotFound {
        /// ファイルパス
        path: String,
    },

    /// File read error
    #[error("Failed to read file: {path} (cause: {cause})")]
    FileRead {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },

    /// File write error
    #[error("Failed to write file: {path} (cause: {cause})")]
    FileWrite {
        /// ファイルパス
        path: String,
        /// エラー原因
        cause: String,
    },
}

/// 解析エラー
///
/// エンティティファイルから生成に必要な情報が得られなかったことを表現します。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// テーブル名が見つからない（カラム単位のモード）
    #[error("Could not parse table name.")]
    MissingTableName,

    /// テーブル名またはカラムが見つからない（テーブル作成モード）
    #[error("Could not parse table name or columns.")]
    MissingTableOrColumns,
}
