use super::people;
use crate::{search, ExecutorError, SearchMatch, SearchOptions};
use storage::Row;
use types::Value;

fn literal() -> SearchOptions {
    SearchOptions::default()
}

fn regex() -> SearchOptions {
    SearchOptions { use_regex: true, ..SearchOptions::default() }
}

#[test]
fn test_literal_substring_search() {
    let matches = search(&people(), "Bob", &literal()).unwrap();
    assert_eq!(
        matches,
        vec![SearchMatch { row: 1, column: 1, value: Value::Varchar("Bob".to_string()) }]
    );
}

#[test]
fn test_literal_wildcard_matches_prefix() {
    // "A*" matches "Ann"; numeric cells are matched via their string form
    let matches = search(&people(), "A*", &literal()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].row, 0);
    assert_eq!(matches[0].column, 1);
}

#[test]
fn test_literal_percent_wildcard() {
    let matches = search(&people(), "B%b", &literal()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, Value::Varchar("Bob".to_string()));
}

#[test]
fn test_regex_and_literal_agree_on_indices() {
    let wildcard = search(&people(), "A*", &literal()).unwrap();
    let anchored = search(&people(), "^A", &regex()).unwrap();
    assert_eq!(wildcard.len(), anchored.len());
    assert_eq!(wildcard[0].row, anchored[0].row);
    assert_eq!(wildcard[0].column, anchored[0].column);
}

#[test]
fn test_regex_search_scans_numbers_too() {
    // Ages 35, 28, 52: regex over the string form of every cell
    let matches = search(&people(), "^5", &regex()).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].value, Value::Integer(52));
}

#[test]
fn test_first_only_stops_at_first_cell() {
    let options = SearchOptions { use_regex: true, first_only: true, ..Default::default() };
    // Several cells contain a digit; only the first is reported
    let matches = search(&people(), "[0-9]", &options).unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!((matches[0].row, matches[0].column), (0, 0));
}

#[test]
fn test_search_order_is_row_major() {
    let matches = search(&people(), "[0-9]", &regex()).unwrap();
    let positions: Vec<(usize, usize)> = matches.iter().map(|m| (m.row, m.column)).collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}

#[test]
fn test_case_insensitive_flag() {
    let sensitive = search(&people(), "ann", &literal()).unwrap();
    assert!(sensitive.is_empty());

    let options = SearchOptions { ignore_case: true, ..Default::default() };
    let insensitive = search(&people(), "ann", &options).unwrap();
    assert_eq!(insensitive.len(), 1);

    let options = SearchOptions { use_regex: true, ignore_case: true, ..Default::default() };
    let regex_insensitive = search(&people(), "^ann$", &options).unwrap();
    assert_eq!(regex_insensitive.len(), 1);
}

#[test]
fn test_column_subset_limits_scan() {
    let options = SearchOptions {
        use_regex: true,
        columns: Some(vec!["Age".to_string()]),
        ..Default::default()
    };
    let matches = search(&people(), "[0-9]+", &options).unwrap();
    assert_eq!(matches.len(), 3);
    assert!(matches.iter().all(|m| m.column == 2));
}

#[test]
fn test_unknown_column_in_subset_is_an_error() {
    let options = SearchOptions { columns: Some(vec!["Nope".to_string()]), ..Default::default() };
    assert_eq!(
        search(&people(), "x", &options).unwrap_err(),
        ExecutorError::ColumnNotFound("Nope".to_string())
    );
}

#[test]
fn test_invalid_regex_is_an_error() {
    assert!(matches!(
        search(&people(), "[unclosed", &regex()).unwrap_err(),
        ExecutorError::InvalidPattern(_)
    ));
}

#[test]
fn test_null_cells_never_match() {
    let mut table = people();
    table
        .insert(Row::new(vec![Value::Integer(9), Value::Null, Value::Null]))
        .unwrap();
    // ".*" matches any string, but NULL cells are skipped entirely
    let matches = search(&table, ".*", &regex()).unwrap();
    assert_eq!(matches.iter().filter(|m| m.row == 3).count(), 1);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let matches = search(&people(), "zzz", &literal()).unwrap();
    assert!(matches.is_empty());
}
