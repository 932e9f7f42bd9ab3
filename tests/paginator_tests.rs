use std::collections::HashSet;
use std::io::Write;

use csv_pager::data::delimiter::Delimiter;
use csv_pager::data::display::project;
use csv_pager::data::error::PagerError;
use csv_pager::data::paginator::{fetch_page, Paginator};
use tempfile::NamedTempFile;

/// Write a fixture file and keep it alive for the duration of the test
fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file.flush().expect("flush fixture");
    file
}

#[test]
fn test_first_page_with_lookahead() {
    let file = write_fixture("id,name\n1,alice\n2,bob\n3,carol\n4,dave\n5,eve\n");

    let result = fetch_page(file.path(), Delimiter::Comma, 2, 0).unwrap();

    assert_eq!(result.header, vec!["id", "name"]);
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0], vec!["1", "alice"]);
    assert_eq!(result.rows[1], vec!["2", "bob"]);
    assert!(result.has_next);
}

#[test]
fn test_middle_and_last_pages() {
    let file = write_fixture("id,name\n1,alice\n2,bob\n3,carol\n4,dave\n5,eve\n");

    let middle = fetch_page(file.path(), Delimiter::Comma, 2, 1).unwrap();
    assert_eq!(middle.rows[0], vec!["3", "carol"]);
    assert_eq!(middle.rows[1], vec!["4", "dave"]);
    assert!(middle.has_next);

    // Last page is short, so the lookahead must report no next page
    let last = fetch_page(file.path(), Delimiter::Comma, 2, 2).unwrap();
    assert_eq!(last.rows.len(), 1);
    assert_eq!(last.rows[0], vec!["5", "eve"]);
    assert!(!last.has_next);
}

#[test]
fn test_exact_page_size_boundary() {
    // Exactly page_size data rows: page 0 is full but final, page 1 is
    // an empty (and valid) past-the-end query
    let file = write_fixture("a,b\n1,2\n3,4\n");

    let page0 = fetch_page(file.path(), Delimiter::Comma, 2, 0).unwrap();
    assert_eq!(page0.rows.len(), 2);
    assert!(!page0.has_next);

    let page1 = fetch_page(file.path(), Delimiter::Comma, 2, 1).unwrap();
    assert_eq!(page1.header, vec!["a", "b"]);
    assert!(page1.rows.is_empty());
    assert!(!page1.has_next);
}

#[test]
fn test_page_far_past_end_is_not_an_error() {
    let file = write_fixture("a,b\n1,2\n");

    let result = fetch_page(file.path(), Delimiter::Comma, 10, 500).unwrap();
    assert_eq!(result.header, vec!["a", "b"]);
    assert!(result.rows.is_empty());
    assert!(!result.has_next);
}

#[test]
fn test_short_rows_are_padded() {
    let file = write_fixture("a,b,c,d\n1,2\n");

    let result = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2", "", ""]);
}

#[test]
fn test_long_rows_survive_the_scan() {
    let file = write_fixture("a,b\n1,2,3,4\n");

    // Excess fields are dropped at projection time, not in the scan
    let result = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2", "3", "4"]);

    let page = project(&result, &HashSet::new());
    assert_eq!(page.rows[0].values, vec!["1", "2"]);
}

#[test]
fn test_ragged_rows_scenario() {
    // header a,b,c with one short and one long data row, page size 2
    let file = write_fixture("a,b,c\n1,2,3\n4,5\n6,7,8,9\n");

    let page0 = fetch_page(file.path(), Delimiter::Comma, 2, 0).unwrap();
    assert_eq!(page0.rows.len(), 2);
    assert_eq!(page0.rows[0], vec!["1", "2", "3"]);
    assert_eq!(page0.rows[1], vec!["4", "5", ""]);
    assert!(page0.has_next);

    let page1 = fetch_page(file.path(), Delimiter::Comma, 2, 1).unwrap();
    assert_eq!(page1.rows.len(), 1);
    assert!(!page1.has_next);

    let projected = project(&page1, &HashSet::new());
    assert_eq!(projected.rows[0].values, vec!["6", "7", "8"]);
}

#[test]
fn test_empty_file_is_a_format_error() {
    let file = write_fixture("");

    let err = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap_err();
    assert!(matches!(err, PagerError::EmptyFile));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = fetch_page(
        std::path::Path::new("/nonexistent/rows.csv"),
        Delimiter::Comma,
        10,
        0,
    )
    .unwrap_err();
    assert!(matches!(err, PagerError::Io(_)));
}

#[test]
fn test_identical_requests_are_idempotent() {
    let file = write_fixture("a,b\n1,2\n3,4\n5,6\n");

    let first = fetch_page(file.path(), Delimiter::Comma, 2, 0).unwrap();
    let second = fetch_page(file.path(), Delimiter::Comma, 2, 0).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_alternate_delimiters() {
    let semicolon = write_fixture("a;b\n1;2\n");
    let result = fetch_page(semicolon.path(), Delimiter::Semicolon, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2"]);

    let pipe = write_fixture("a|b\n1|2\n");
    let result = fetch_page(pipe.path(), Delimiter::Pipe, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2"]);

    let space = write_fixture("a b\n1 2\n");
    let result = fetch_page(space.path(), Delimiter::Space, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2"]);

    let tab = write_fixture("a\tb\n1\t2\n");
    let result = fetch_page(tab.path(), Delimiter::Tab, 10, 0).unwrap();
    assert_eq!(result.rows[0], vec!["1", "2"]);
}

#[test]
fn test_quoted_fields_contain_delimiters() {
    let file = write_fixture("name,note\n\"last, first\",\"a \"\"quoted\"\" word\"\n");

    let result = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap();
    assert_eq!(result.rows[0][0], "last, first");
    assert_eq!(result.rows[0][1], "a \"quoted\" word");
}

#[test]
fn test_quoted_fields_contain_newlines() {
    let file = write_fixture("name,note\nalice,\"line one\nline two\"\nbob,plain\n");

    // The embedded newline does not split the record, so the file holds
    // exactly two data records
    let result = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap();
    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0][1], "line one\nline two");
    assert_eq!(result.rows[1], vec!["bob", "plain"]);
}

#[test]
fn test_delimiter_switch_does_not_fracture_quoted_fields() {
    // Tab-delimited file whose first field holds a quoted comma.
    // Re-reading with the comma delimiter must keep that field whole:
    // quoting takes precedence over naive splitting.
    let file = write_fixture("col1\tcol2\n\"alpha,beta\"\tsecond\n");

    let tabbed = fetch_page(file.path(), Delimiter::Tab, 10, 0).unwrap();
    assert_eq!(tabbed.rows[0][0], "alpha,beta");

    let switched = fetch_page(file.path(), Delimiter::Comma, 10, 0).unwrap();
    assert_eq!(switched.rows[0].len(), 1);
    assert!(switched.rows[0][0].contains("alpha,beta"));
}

#[test]
fn test_skipping_counts_records_not_clean_rows() {
    // Malformed short records still advance the page offset by one each
    let file = write_fixture("a,b,c\n1\n2\n3,3,3\n4\n");

    let page1 = fetch_page(file.path(), Delimiter::Comma, 2, 1).unwrap();
    assert_eq!(page1.rows.len(), 2);
    assert_eq!(page1.rows[0], vec!["3", "3", "3"]);
    assert_eq!(page1.rows[1], vec!["4", "", ""]);
    assert!(!page1.has_next);
}

#[test]
fn test_paginator_rejects_zero_page_size() {
    let file = write_fixture("a,b\n1,2\n");
    let mut pager = Paginator::new(file.path());
    pager.set_delimiter(Delimiter::Comma);
    pager.set_page_size(5).unwrap();

    let err = pager.set_page_size(0).unwrap_err();
    assert!(matches!(err, PagerError::InvalidPageSize(_)));

    // The previous valid value is kept
    assert_eq!(pager.page_size(), 5);
}

#[test]
fn test_paginator_page_size_change_resets_page() {
    let file = write_fixture("a\n1\n2\n3\n4\n");
    let mut pager = Paginator::new(file.path());
    pager.set_delimiter(Delimiter::Comma);
    pager.set_page_size(2).unwrap();

    pager.fetch_page(1).unwrap();
    assert_eq!(pager.current_page(), 1);

    pager.set_page_size(3).unwrap();
    assert_eq!(pager.current_page(), 0);
}

#[test]
fn test_paginator_failed_fetch_keeps_current_page() {
    let file = write_fixture("a\n1\n2\n3\n");
    let mut pager = Paginator::new(file.path());
    pager.set_delimiter(Delimiter::Comma);
    pager.set_page_size(2).unwrap();
    pager.fetch_page(1).unwrap();

    pager.open("/nonexistent/rows.csv");
    assert_eq!(pager.current_page(), 0);
    assert!(pager.fetch_page(3).is_err());
    assert_eq!(pager.current_page(), 0);
}

#[test]
fn test_paginator_open_resets_session() {
    let file = write_fixture("a,b\n1,2\n3,4\n5,6\n");
    let mut pager = Paginator::new(file.path());
    pager.set_delimiter(Delimiter::Comma);
    pager.set_page_size(1).unwrap();
    pager.set_hidden_columns(HashSet::from([1]));
    pager.fetch_page(2).unwrap();

    let other = write_fixture("x,y\n7,8\n");
    pager.open(other.path());

    assert_eq!(pager.current_page(), 0);
    assert!(pager.hidden_columns().is_empty());
    let result = pager.fetch_current().unwrap();
    assert_eq!(result.header, vec!["x", "y"]);
}
