//! Projection of raw page results into display form.
//!
//! Column hiding happens here rather than in the scan so a `PageResult`
//! stays reusable when the caller toggles visibility without reloading.

use std::collections::HashSet;

use crate::data::paginator::PageResult;

/// Alternating presentation tag, assigned by in-page row parity.
/// Purely cosmetic; carries no data meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Stripe::Even
        } else {
            Stripe::Odd
        }
    }
}

/// A row reshaped for rendering: visible fields only, plus its stripe
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub values: Vec<String>,
    pub stripe: Stripe,
}

/// A page reshaped for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPage {
    pub columns: Vec<String>,
    pub rows: Vec<DisplayRow>,
}

/// Apply column visibility to a page result.
///
/// Visible indices preserve the original column order. Hidden indices
/// outside the header range are ignored, so a selection left over from
/// a wider file cannot break projection of a narrower one. Hiding every
/// column is legal and yields empty rows. Fields beyond the header
/// length are dropped here; short rows were already padded by the scan.
pub fn project(result: &PageResult, hidden_columns: &HashSet<usize>) -> DisplayPage {
    let visible: Vec<usize> = (0..result.header.len())
        .filter(|index| !hidden_columns.contains(index))
        .collect();

    let columns = visible
        .iter()
        .map(|&index| result.header[index].clone())
        .collect();

    let rows = result
        .rows
        .iter()
        .enumerate()
        .map(|(row_index, row)| DisplayRow {
            values: visible
                .iter()
                .map(|&index| row.get(index).cloned().unwrap_or_default())
                .collect(),
            stripe: Stripe::for_index(row_index),
        })
        .collect();

    DisplayPage { columns, rows }
}

/// 1-based label for a 0-based page index, e.g. "Page 3"
pub fn page_label(page_index: usize) -> String {
    format!("Page {}", page_index + 1)
}
