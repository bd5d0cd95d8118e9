// 命名ポリシー
//
// アプリケーション名と関連パスの単一ソースを提供します。

/// 現行アプリケーション名
pub const APP_NAME: &str = "liquigen";

/// 既定の設定ファイル名
pub const CONFIG_FILE: &str = ".liquigen.yaml";

/// 出力ファイル名に付与する既定のサフィックス（拡張子を含む）
pub const OUTPUT_SUFFIX: &str = "_liquibase_query.xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_is_hidden_yaml() {
        assert!(CONFIG_FILE.starts_with('.'));
        assert!(CONFIG_FILE.ends_with(".yaml"));
        assert!(CONFIG_FILE.contains(APP_NAME));
    }

    #[test]
    fn test_output_suffix_is_xml() {
        assert!(OUTPUT_SUFFIX.ends_with(".xml"));
    }
}
