use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use csv_pager::config::config::DisplayConfig;
use csv_pager::data::display::{page_label, DisplayPage, Stripe};

/// Render one projected page to stdout.
///
/// `page_index` and `page_size` locate the page within the file so row
/// numbers can be absolute rather than per-page.
pub fn display_page(
    page: &DisplayPage,
    page_index: usize,
    page_size: usize,
    has_next: bool,
    display: &DisplayConfig,
) {
    if page.rows.is_empty() {
        println!(
            "{}",
            format!("{} - no rows (end of file)", page_label(page_index)).yellow()
        );
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Set headers
    let mut headers: Vec<Cell> = Vec::new();
    if display.show_row_numbers {
        headers.push(Cell::new("#").add_attribute(Attribute::Bold));
    }
    headers.extend(
        page.columns
            .iter()
            .map(|name| Cell::new(name).add_attribute(Attribute::Bold)),
    );
    table.set_header(headers);

    // Add rows, dimming the odd stripe when striping is enabled
    let first_row_number = page_index * page_size + 1;
    for (offset, row) in page.rows.iter().enumerate() {
        let mut cells: Vec<Cell> = Vec::new();
        if display.show_row_numbers {
            cells.push(Cell::new(first_row_number + offset));
        }
        for value in &row.values {
            let cell = if display.stripe_rows && row.stripe == Stripe::Odd {
                Cell::new(value).add_attribute(Attribute::Dim)
            } else {
                Cell::new(value)
            };
            cells.push(cell);
        }
        table.add_row(cells);
    }

    println!("{table}");

    let boundary = if has_next {
        "more rows follow"
    } else {
        "end of file"
    };
    println!(
        "{}",
        format!(
            "{} - {} rows ({})",
            page_label(page_index),
            page.rows.len(),
            boundary
        )
        .green()
    );
}
