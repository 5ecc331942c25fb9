use super::{orders, people};
use crate::{join, ExecutorError, JoinType};
use catalog::{ColumnSchema, TableSchema};
use std::str::FromStr;
use storage::{Row, Table};
use types::{DataType, Value};

fn item_of(row: &Row) -> &Value {
    // Merged schema: Id, Name, Age, Item
    &row.values[3]
}

#[test]
fn test_join_type_parsing() {
    assert_eq!(JoinType::from_str("inner").unwrap(), JoinType::Inner);
    assert_eq!(JoinType::from_str("LEFT").unwrap(), JoinType::Left);
    assert_eq!(JoinType::from_str("Full").unwrap(), JoinType::Full);
    assert_eq!(
        JoinType::from_str("cross").unwrap_err(),
        ExecutorError::UnknownJoinType("cross".to_string())
    );
}

#[test]
fn test_result_schema_is_union_of_columns() {
    let result = join(&people(), &orders(), JoinType::Inner, "Id").unwrap();
    assert_eq!(result.schema.column_names(), vec!["Id", "Name", "Age", "Item"]);
}

#[test]
fn test_inner_join_pairs_equal_keys() {
    let result = join(&people(), &orders(), JoinType::Inner, "Id").unwrap();
    assert_eq!(result.row_count(), 3);
    // Every result row keeps the join value both sides agreed on
    for row in result.scan() {
        assert!(!row.values[0].is_null());
    }
    let items: Vec<String> = result.scan().iter().map(|r| item_of(r).to_string()).collect();
    assert_eq!(items, vec!["book", "pen", "mug"]);
}

#[test]
fn test_left_join_keeps_unmatched_left_rows() {
    let result = join(&people(), &orders(), JoinType::Left, "Id").unwrap();
    // Ann matches twice, Bob once, Cid not at all
    assert_eq!(result.row_count(), 4);
    assert!(result.row_count() >= people().row_count());

    let cid_row = result
        .scan()
        .iter()
        .find(|r| r.values[1] == Value::Varchar("Cid".to_string()))
        .unwrap();
    assert_eq!(*item_of(cid_row), Value::Null);
}

#[test]
fn test_right_join_keeps_unmatched_right_rows() {
    let result = join(&people(), &orders(), JoinType::Right, "Id").unwrap();
    assert_eq!(result.row_count(), 4);

    let hat_row = result
        .scan()
        .iter()
        .find(|r| *item_of(r) == Value::Varchar("hat".to_string()))
        .unwrap();
    // Unmatched right row: left columns are NULL, join column comes from
    // the right side
    assert_eq!(hat_row.values[0], Value::Integer(4));
    assert_eq!(hat_row.values[1], Value::Null);
    assert_eq!(hat_row.values[2], Value::Null);
}

#[test]
fn test_full_join_is_left_union_right_only() {
    let left = join(&people(), &orders(), JoinType::Left, "Id").unwrap();
    let full = join(&people(), &orders(), JoinType::Full, "Id").unwrap();

    // Full starts with the complete left-join result...
    assert_eq!(&full.scan()[..left.row_count()], left.scan());
    // ...and appends only the right rows the left pass never matched
    assert_eq!(full.row_count(), left.row_count() + 1);
    assert_eq!(*item_of(&full.scan()[4]), Value::Varchar("hat".to_string()));
}

#[test]
fn test_null_join_keys_never_match() {
    let mut left = people();
    left.insert(Row::new(vec![
        Value::Null,
        Value::Varchar("Nil".to_string()),
        Value::Integer(0),
    ]))
    .unwrap();
    let mut right = orders();
    right
        .insert(Row::new(vec![Value::Null, Value::Varchar("ghost".to_string())]))
        .unwrap();

    let inner = join(&left, &right, JoinType::Inner, "Id").unwrap();
    assert_eq!(inner.row_count(), 3);

    // Outer flavors still carry the NULL-keyed rows, padded:
    // left pass emits 5 rows (Nil unmatched), right-only adds hat and ghost
    let full = join(&left, &right, JoinType::Full, "Id").unwrap();
    assert_eq!(full.row_count(), 7);
}

#[test]
fn test_duplicate_keys_produce_all_pairs() {
    let mut right = orders();
    right
        .insert(Row::new(vec![Value::Integer(2), Value::Varchar("cap".to_string())]))
        .unwrap();
    let result = join(&people(), &right, JoinType::Inner, "Id").unwrap();
    // Ann x2, Bob x2
    assert_eq!(result.row_count(), 4);
}

#[test]
fn test_shared_non_join_column_takes_right_value() {
    let mut right = Table::new(TableSchema::new(
        "extra".to_string(),
        vec![
            ColumnSchema::new("Id".to_string(), DataType::Integer, false),
            ColumnSchema::new("Name".to_string(), DataType::Varchar, true),
        ],
    ));
    right
        .insert(Row::new(vec![Value::Integer(1), Value::Varchar("Annie".to_string())]))
        .unwrap();

    let result = join(&people(), &right, JoinType::Inner, "Id").unwrap();
    assert_eq!(result.schema.column_names(), vec!["Id", "Name", "Age"]);
    assert_eq!(result.scan()[0].values[1], Value::Varchar("Annie".to_string()));
}

#[test]
fn test_join_column_must_exist_in_both_tables() {
    let err = join(&people(), &orders(), JoinType::Inner, "Item").unwrap_err();
    assert_eq!(err, ExecutorError::ColumnNotFound("Item".to_string()));
    let err = join(&people(), &orders(), JoinType::Inner, "Missing").unwrap_err();
    assert_eq!(err, ExecutorError::ColumnNotFound("Missing".to_string()));
}

#[test]
fn test_join_with_empty_side() {
    let empty_orders = orders().clone_structure();
    let inner = join(&people(), &empty_orders, JoinType::Inner, "Id").unwrap();
    assert_eq!(inner.row_count(), 0);

    let left = join(&people(), &empty_orders, JoinType::Left, "Id").unwrap();
    assert_eq!(left.row_count(), people().row_count());
    for row in left.scan() {
        assert_eq!(*item_of(row), Value::Null);
    }
}
