// Adapters
// ソース言語の型とデータベースの型の対応付け

pub mod type_mapping;
