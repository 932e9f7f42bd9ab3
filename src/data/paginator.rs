//! Stateless page scans over delimited text files.
//!
//! Every page request re-opens the source and scans forward from the
//! top: read the header, skip `page_index * page_size` records, collect
//! up to `page_size` rows, then read one lookahead record to learn
//! whether a next page exists. Nothing survives between requests, so a
//! page can never go stale and there is no index to maintain. The cost
//! is O(start + page_size) per request, re-paid on every navigation.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use crate::data::delimiter::Delimiter;
use crate::data::error::{PagerError, PagerResult};

/// Rows per page when the caller has not chosen one
pub const DEFAULT_PAGE_SIZE: usize = 200;

/// One page of records plus the lookahead verdict.
///
/// The header and rows are unfiltered; column hiding is applied
/// downstream so the same result can be re-projected when visibility
/// changes without touching the file again.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult {
    /// Full header row, read from the first record of the file
    pub header: Vec<String>,
    /// Up to `page_size` rows, padded to header length but never truncated
    pub rows: Vec<Vec<String>>,
    /// True iff at least one record exists beyond this page
    pub has_next: bool,
}

/// Scan `source` and return the records belonging to `page_index`.
///
/// Records are counted, not bytes, so ragged rows still advance the
/// offset by one each. Short records are padded with empty fields up to
/// header length; long records are kept intact (the display layer drops
/// the excess). Requesting a page past the end of the data is not an
/// error: the result simply has no rows and `has_next` is false.
pub fn fetch_page(
    source: &Path,
    delimiter: Delimiter,
    page_size: usize,
    page_index: usize,
) -> PagerResult<PageResult> {
    let file = File::open(source)?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record?.iter().map(|field| field.to_string()).collect(),
        None => return Err(PagerError::EmptyFile),
    };

    // Skip to the first record of the requested page
    let start = page_index * page_size;
    for skipped in 0..start {
        match records.next() {
            Some(record) => {
                record?;
            }
            None => {
                debug!(
                    "page {} starts past end of {} ({} records skipped)",
                    page_index,
                    source.display(),
                    skipped
                );
                return Ok(PageResult {
                    header,
                    rows: Vec::new(),
                    has_next: false,
                });
            }
        }
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    while rows.len() < page_size {
        match records.next() {
            Some(record) => {
                let record = record?;
                let mut row: Vec<String> = record.iter().map(|field| field.to_string()).collect();
                if row.len() < header.len() {
                    row.resize(header.len(), String::new());
                }
                rows.push(row);
            }
            None => {
                debug!("page {}: {} rows, end of file", page_index, rows.len());
                return Ok(PageResult {
                    header,
                    rows,
                    has_next: false,
                });
            }
        }
    }

    // Lookahead: one record past the page tells us whether a next page
    // exists without counting the rest of the file
    let has_next = match records.next() {
        Some(record) => {
            record?;
            true
        }
        None => false,
    };

    debug!(
        "page {}: {} rows, has_next={}",
        page_index,
        rows.len(),
        has_next
    );

    Ok(PageResult {
        header,
        rows,
        has_next,
    })
}

/// A browsing session over one delimited file.
///
/// Holds only the caller-owned parameters: source path, delimiter, page
/// size, hidden columns and the current page index. Every fetch
/// re-derives its result from the file, so two sessions over the same
/// file never disagree.
#[derive(Debug, Clone)]
pub struct Paginator {
    source: PathBuf,
    delimiter: Delimiter,
    page_size: usize,
    current_page: usize,
    hidden_columns: HashSet<usize>,
}

impl Paginator {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            delimiter: Delimiter::default(),
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 0,
            hidden_columns: HashSet::new(),
        }
    }

    /// Point the session at a new file, resetting the page index and
    /// any column selection left over from the previous file
    pub fn open(&mut self, source: impl Into<PathBuf>) {
        self.source = source.into();
        self.current_page = 0;
        self.hidden_columns.clear();
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn hidden_columns(&self) -> &HashSet<usize> {
        &self.hidden_columns
    }

    /// Change the active delimiter. No stored state depends on it; the
    /// next fetch simply parses with the new character.
    pub fn set_delimiter(&mut self, delimiter: Delimiter) {
        self.delimiter = delimiter;
    }

    /// Change the page size. Zero is rejected and the previous value
    /// kept; a successful change resets the session to page 0.
    pub fn set_page_size(&mut self, page_size: usize) -> PagerResult<()> {
        if page_size == 0 {
            return Err(PagerError::InvalidPageSize(
                "page size must be a positive integer".to_string(),
            ));
        }
        self.page_size = page_size;
        self.current_page = 0;
        Ok(())
    }

    pub fn set_hidden_columns(&mut self, hidden_columns: HashSet<usize>) {
        self.hidden_columns = hidden_columns;
    }

    /// Fetch an arbitrary page and remember it as the current one.
    /// A failed fetch leaves the current page index untouched.
    pub fn fetch_page(&mut self, page_index: usize) -> PagerResult<PageResult> {
        let result = fetch_page(&self.source, self.delimiter, self.page_size, page_index)?;
        self.current_page = page_index;
        Ok(result)
    }

    /// Re-fetch the current page (after a delimiter or page-size change)
    pub fn fetch_current(&mut self) -> PagerResult<PageResult> {
        self.fetch_page(self.current_page)
    }
}
