// 型マッピングサービス
//
// エンティティクラスの型名からデータベースのカラム型文字列への変換を
// 固定テーブルで一元管理します。

/// 未知の型に使用するフォールバック型
pub const DEFAULT_SQL_TYPE: &str = "VARCHAR(255)";

/// ソース型名 -> SQL型文字列 の固定テーブル
///
/// 大文字小文字を区別した完全一致のみを扱います。
const TYPE_MAPPINGS: &[(&str, &str)] = &[
    ("String", "VARCHAR(255)"),
    ("int", "INTEGER"),
    ("Integer", "INTEGER"),
    ("long", "BIGINT"),
    ("Long", "BIGINT"),
    ("boolean", "BOOLEAN"),
    ("Boolean", "BOOLEAN"),
    ("Date", "TIMESTAMP"),
    ("BigDecimal", "DECIMAL(19,2)"),
];

/// 型マッピングサービス
///
/// 変換は全域関数で、失敗しません。
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeMappingService;

impl TypeMappingService {
    /// 新しいTypeMappingServiceを作成
    pub fn new() -> Self {
        Self
    }

    /// ソース型名 -> SQL型文字列
    ///
    /// # Arguments
    /// * `source_type` - エンティティクラス上の型名（例: "String", "long"）
    ///
    /// # Returns
    /// SQL型文字列（例: "VARCHAR(255)", "BIGINT"）。未知の型は [`DEFAULT_SQL_TYPE`]
    pub fn to_sql_type(&self, source_type: &str) -> &'static str {
        TYPE_MAPPINGS
            .iter()
            .find(|(source, _)| *source == source_type)
            .map(|(_, sql)| *sql)
            .unwrap_or(DEFAULT_SQL_TYPE)
    }

    /// 既知のソース型かどうか
    pub fn is_known(&self, source_type: &str) -> bool {
        TYPE_MAPPINGS.iter().any(|(source, _)| *source == source_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types() {
        let mapper = TypeMappingService::new();

        assert_eq!(mapper.to_sql_type("String"), "VARCHAR(255)");
        assert_eq!(mapper.to_sql_type("int"), "INTEGER");
        assert_eq!(mapper.to_sql_type("Integer"), "INTEGER");
        assert_eq!(mapper.to_sql_type("long"), "BIGINT");
        assert_eq!(mapper.to_sql_type("Long"), "BIGINT");
        assert_eq!(mapper.to_sql_type("boolean"), "BOOLEAN");
        assert_eq!(mapper.to_sql_type("Boolean"), "BOOLEAN");
        assert_eq!(mapper.to_sql_type("Date"), "TIMESTAMP");
        assert_eq!(mapper.to_sql_type("BigDecimal"), "DECIMAL(19,2)");
    }

    #[test]
    fn test_unknown_type_falls_back_to_varchar() {
        let mapper = TypeMappingService::new();

        assert_eq!(mapper.to_sql_type("UUID"), DEFAULT_SQL_TYPE);
        assert_eq!(mapper.to_sql_type(""), DEFAULT_SQL_TYPE);
        assert!(!mapper.is_known("UUID"));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let mapper = TypeMappingService::new();

        assert_eq!(mapper.to_sql_type("LONG"), DEFAULT_SQL_TYPE);
        assert_eq!(mapper.to_sql_type("bigdecimal"), DEFAULT_SQL_TYPE);
    }
}
