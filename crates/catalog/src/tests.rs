use super::*;
use types::DataType;

fn people_schema() -> TableSchema {
    TableSchema::new(
        "people".to_string(),
        vec![
            ColumnSchema::new("Id".to_string(), DataType::Integer, false),
            ColumnSchema::new("Name".to_string(), DataType::Varchar, true),
            ColumnSchema::new("Age".to_string(), DataType::Integer, true),
        ],
    )
}

#[test]
fn test_column_lookup_by_name() {
    let schema = people_schema();
    assert_eq!(schema.get_column_index("Name"), Some(1));
    assert_eq!(schema.get_column("Age").unwrap().data_type, DataType::Integer);
    assert_eq!(schema.get_column_index("Missing"), None);
}

#[test]
fn test_column_lookup_is_case_sensitive() {
    let schema = people_schema();
    assert!(schema.has_column("Name"));
    assert!(!schema.has_column("name"));
}

#[test]
fn test_column_names_preserve_order() {
    let schema = people_schema();
    assert_eq!(schema.column_names(), vec!["Id", "Name", "Age"]);
    assert_eq!(schema.column_count(), 3);
}
