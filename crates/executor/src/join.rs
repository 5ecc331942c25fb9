//! Equality joins over two in-memory tables
//!
//! All four join flavors run the same hash-based equi-join: build a map
//! from join value to row indices on one side, probe with the other.
//! NULL join keys never match; rows carrying them still surface in the
//! outer flavors, padded with NULLs.

use crate::errors::ExecutorError;
use std::collections::HashMap;
use std::str::FromStr;
use storage::{Row, Table};
use types::Value;

/// Join flavor, parsed case-insensitively from the activity's string input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl FromStr for JoinType {
    type Err = ExecutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inner" => Ok(JoinType::Inner),
            "left" => Ok(JoinType::Left),
            "right" => Ok(JoinType::Right),
            "full" => Ok(JoinType::Full),
            other => Err(ExecutorError::UnknownJoinType(other.to_string())),
        }
    }
}

/// Where each merged-row cell comes from: a left column, or a right column
/// overwriting a shared name.
struct MergePlan {
    schema: catalog::TableSchema,
    left_width: usize,
    /// For each right column, its position in the merged row
    right_targets: Vec<usize>,
}

impl MergePlan {
    /// Result schema is table-1 columns followed by table-2 columns not
    /// already present by name. Shared names map onto the left position,
    /// where the right value overwrites the left one.
    fn new(left: &catalog::TableSchema, right: &catalog::TableSchema) -> Self {
        let mut columns: Vec<catalog::ColumnSchema> = left
            .columns
            .iter()
            .map(|col| {
                // Outer flavors pad missing sides with NULL
                catalog::ColumnSchema::new(col.name.clone(), col.data_type, true)
            })
            .collect();

        let mut right_targets = Vec::with_capacity(right.columns.len());
        for col in &right.columns {
            match left.get_column_index(&col.name) {
                Some(index) => right_targets.push(index),
                None => {
                    right_targets.push(columns.len());
                    columns.push(catalog::ColumnSchema::new(
                        col.name.clone(),
                        col.data_type,
                        true,
                    ));
                }
            }
        }

        let name = format!("{}_{}", left.name, right.name);
        MergePlan {
            schema: catalog::TableSchema::new(name, columns),
            left_width: left.column_count(),
            right_targets,
        }
    }

    /// Merge one row pair; either side may be absent and pads with NULL.
    fn merge(&self, left: Option<&Row>, right: Option<&Row>) -> Row {
        let mut values = vec![Value::Null; self.schema.column_count()];

        if let Some(row) = left {
            values[..self.left_width].clone_from_slice(&row.values);
        }
        if let Some(row) = right {
            for (value, &target) in row.values.iter().zip(&self.right_targets) {
                values[target] = value.clone();
            }
        }

        Row::new(values)
    }
}

/// Build a hash table from join value to row indices, skipping NULL keys.
fn build_hash_table(rows: &[Row], key_idx: usize) -> HashMap<Value, Vec<usize>> {
    let mut hash_table: HashMap<Value, Vec<usize>> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        let key = row.values[key_idx].clone();
        if key != Value::Null {
            hash_table.entry(key).or_default().push(idx);
        }
    }
    hash_table
}

/// Join two tables on equality of the named column.
pub fn join(
    left: &Table,
    right: &Table,
    join_type: JoinType,
    on: &str,
) -> Result<Table, ExecutorError> {
    let left_key = left
        .schema
        .get_column_index(on)
        .ok_or_else(|| ExecutorError::ColumnNotFound(on.to_string()))?;
    let right_key = right
        .schema
        .get_column_index(on)
        .ok_or_else(|| ExecutorError::ColumnNotFound(on.to_string()))?;

    tracing::debug!(
        join_type = ?join_type,
        on,
        left_rows = left.row_count(),
        right_rows = right.row_count(),
        "joining tables"
    );

    let plan = MergePlan::new(&left.schema, &right.schema);
    let mut result = Table::new(plan.schema.clone());

    match join_type {
        JoinType::Inner => {
            let probe = build_hash_table(right.scan(), right_key);
            for left_row in left.scan() {
                for right_row in matches_for(&probe, &left_row.values[left_key], right.scan()) {
                    result.insert(plan.merge(Some(left_row), Some(right_row)))?;
                }
            }
        }
        JoinType::Left => {
            let probe = build_hash_table(right.scan(), right_key);
            left_pass(&plan, left, &probe, left_key, right.scan(), &mut result)?;
        }
        JoinType::Right => {
            let probe = build_hash_table(left.scan(), left_key);
            for right_row in right.scan() {
                let mut matched = false;
                for left_row in matches_for(&probe, &right_row.values[right_key], left.scan()) {
                    result.insert(plan.merge(Some(left_row), Some(right_row)))?;
                    matched = true;
                }
                if !matched {
                    result.insert(plan.merge(None, Some(right_row)))?;
                }
            }
        }
        JoinType::Full => {
            // Left pass covers every matched pair; the second pass adds
            // right rows the left pass never touched.
            let probe = build_hash_table(right.scan(), right_key);
            left_pass(&plan, left, &probe, left_key, right.scan(), &mut result)?;

            let left_probe = build_hash_table(left.scan(), left_key);
            for right_row in right.scan() {
                let key = &right_row.values[right_key];
                let matched = *key != Value::Null && left_probe.contains_key(key);
                if !matched {
                    result.insert(plan.merge(None, Some(right_row)))?;
                }
            }
        }
    }

    Ok(result)
}

/// Emit every left row, merged with its matches or NULL-padded.
fn left_pass(
    plan: &MergePlan,
    left: &Table,
    probe: &HashMap<Value, Vec<usize>>,
    left_key: usize,
    right_rows: &[Row],
    result: &mut Table,
) -> Result<(), ExecutorError> {
    for left_row in left.scan() {
        let mut matched = false;
        for right_row in matches_for(probe, &left_row.values[left_key], right_rows) {
            result.insert(plan.merge(Some(left_row), Some(right_row)))?;
            matched = true;
        }
        if !matched {
            result.insert(plan.merge(Some(left_row), None))?;
        }
    }
    Ok(())
}

/// Rows on the build side matching a probe key. NULL probes match nothing.
fn matches_for<'a>(
    probe: &'a HashMap<Value, Vec<usize>>,
    key: &Value,
    rows: &'a [Row],
) -> impl Iterator<Item = &'a Row> {
    let indices: &[usize] = if *key == Value::Null {
        &[]
    } else {
        probe.get(key).map(|v| v.as_slice()).unwrap_or(&[])
    };
    indices.iter().map(move |&idx| &rows[idx])
}
