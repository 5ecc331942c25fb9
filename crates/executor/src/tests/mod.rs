mod join_tests;
mod search_tests;

use catalog::{ColumnSchema, TableSchema};
use storage::{Row, Table};
use types::{DataType, Value};

/// People table: Id, Name, Age
pub(crate) fn people() -> Table {
    let mut table = Table::new(TableSchema::new(
        "people".to_string(),
        vec![
            ColumnSchema::new("Id".to_string(), DataType::Integer, false),
            ColumnSchema::new("Name".to_string(), DataType::Varchar, true),
            ColumnSchema::new("Age".to_string(), DataType::Integer, true),
        ],
    ));
    for (id, name, age) in [(1, "Ann", 35), (2, "Bob", 28), (3, "Cid", 52)] {
        table
            .insert(Row::new(vec![
                Value::Integer(id),
                Value::Varchar(name.to_string()),
                Value::Integer(age),
            ]))
            .unwrap();
    }
    table
}

/// Orders table: Id, Item — Id 4 has no partner in people()
pub(crate) fn orders() -> Table {
    let mut table = Table::new(TableSchema::new(
        "orders".to_string(),
        vec![
            ColumnSchema::new("Id".to_string(), DataType::Integer, false),
            ColumnSchema::new("Item".to_string(), DataType::Varchar, true),
        ],
    ));
    for (id, item) in [(1, "book"), (1, "pen"), (2, "mug"), (4, "hat")] {
        table
            .insert(Row::new(vec![Value::Integer(id), Value::Varchar(item.to_string())]))
            .unwrap();
    }
    table
}
