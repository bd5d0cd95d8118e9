/// チェンジログ生成の統合テスト
use liquigen::core::changeset::ChangeMode;
use liquigen::core::entity::{Column, ExtractionResult};
use liquigen::core::error::ParseError;
use liquigen::services::changelog_generator::ChangelogGeneratorService;

fn employee() -> ExtractionResult {
    ExtractionResult {
        table_name: Some("Employee".to_string()),
        columns: vec![
            Column::new("id", "Long"),
            Column::new("email", "String"),
            Column::new("hired_at", "Date"),
            Column::new("uuid", "UUID"),
        ],
    }
}

/// 同じ入力からは同じフラグメントが生成される
#[test]
fn test_create_table_is_deterministic() {
    let generator = ChangelogGeneratorService::new();
    let extraction = employee();

    let first = generator
        .generate(&ChangeMode::CreateTable, &extraction)
        .unwrap();
    let second = generator
        .generate(&ChangeMode::CreateTable, &extraction)
        .unwrap();

    assert_eq!(first.forward.as_bytes(), second.forward.as_bytes());
    assert_eq!(first.rollback.as_bytes(), second.rollback.as_bytes());
}

/// create_table を直接2回呼んでも同じ結果になる
#[test]
fn test_create_table_direct_calls_are_identical() {
    let generator = ChangelogGeneratorService::new();
    let extraction = employee();

    let first = generator.create_table("Employee", &extraction.columns);
    let second = generator.create_table("Employee", &extraction.columns);

    assert_eq!(first, second);
    assert_eq!(
        first,
        generator
            .generate(&ChangeMode::CreateTable, &extraction)
            .unwrap()
    );
}

/// テーブル作成はすべてのカラムを出現順に含む
#[test]
fn test_create_table_lists_every_column() {
    let generator = ChangelogGeneratorService::new();
    let fragment = generator
        .generate(&ChangeMode::CreateTable, &employee())
        .unwrap();

    let expected = [
        r#"<createTable tableName="Employee">"#,
        r#"    <column name="id" type="BIGINT"/>"#,
        r#"    <column name="email" type="VARCHAR(255)"/>"#,
        r#"    <column name="hired_at" type="TIMESTAMP"/>"#,
        r#"    <column name="uuid" type="VARCHAR(255)"/>"#,
        "</createTable>",
    ]
    .join("\n");
    assert_eq!(fragment.forward, expected);
    assert_eq!(fragment.rollback, r#"<dropTable tableName="Employee"/>"#);
}

/// カラム追加: VARCHAR(255)で追加し、ロールバックで削除する
#[test]
fn test_add_column_email() {
    let generator = ChangelogGeneratorService::new();
    let mode = ChangeMode::AddColumn {
        column: Column::new("email", "String"),
    };
    let fragment = generator.generate(&mode, &employee()).unwrap();

    assert!(fragment.forward.contains("<addColumn"));
    assert!(fragment.forward.contains(r#"type="VARCHAR(255)""#));
    assert!(fragment.rollback.contains("<dropColumn"));
    assert!(fragment.rollback.contains(r#"columnName="email""#));
}

/// カラム削除のロールバックは元の型に関わらず既定型で再作成する
#[test]
fn test_delete_column_rollback_ignores_original_type() {
    let generator = ChangelogGeneratorService::new();
    let mode = ChangeMode::DeleteColumn {
        column_name: "id".to_string(),
    };
    let fragment = generator.generate(&mode, &employee()).unwrap();

    assert!(fragment
        .rollback
        .contains(r#"<column name="id" type="VARCHAR(255)"/>"#));
    assert!(!fragment.rollback.contains("BIGINT"));
}

/// カラム型変更のロールバックは既定型に戻す
#[test]
fn test_modify_column_rollback_reverts_to_default() {
    let generator = ChangelogGeneratorService::new();
    let mode = ChangeMode::ModifyColumn {
        column: Column::new("hired_at", "Date"),
    };
    let fragment = generator.generate(&mode, &employee()).unwrap();

    assert!(fragment.forward.contains(r#"newDataType="TIMESTAMP""#));
    assert!(fragment.rollback.contains(r#"newDataType="VARCHAR(255)""#));
}

/// テーブル作成の前提条件
#[test]
fn test_create_table_preconditions() {
    let generator = ChangelogGeneratorService::new();

    let result = generator.generate(&ChangeMode::CreateTable, &ExtractionResult::new());
    assert_eq!(result.unwrap_err(), ParseError::MissingTableOrColumns);
}
