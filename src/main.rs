use crossterm::style::Stylize;
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Result;
use csv_pager::config::config::Config;
use csv_pager::data::delimiter::Delimiter;
use csv_pager::data::display::project;
use csv_pager::data::error::PagerError;
use csv_pager::data::paginator::{PageResult, Paginator, DEFAULT_PAGE_SIZE};
use csv_pager::logging;

mod table_display;

use table_display::display_page;

struct PagerPrompt {
    label: String,
}

impl Prompt for PagerPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("> ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

fn print_help() {
    println!("{}", "csv-pager - page through large delimited files".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  csv-pager [OPTIONS] FILE");
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {}  - Field delimiter (default from config)",
        "--delimiter <d>".green()
    );
    println!(
        "  {}  - Rows per page (default {})",
        "--page-size <n>".green(),
        DEFAULT_PAGE_SIZE
    );
    println!("  {}         - Show this help", "--help".green());
    println!();
    println!("{}", "Delimiters:".yellow());
    for delimiter in Delimiter::ALL {
        println!("  {}", delimiter.label());
    }
    println!();
    println!("{}", "Commands:".yellow());
    println!("  {}             - Next page", "n".green());
    println!("  {}             - Previous page", "p".green());
    println!("  {}      - Jump to page (1-based)", "g <page>".green());
    println!("  {}     - Switch delimiter", "d <delim>".green());
    println!("  {}         - Change page size", "s <n>".green());
    println!("  {}  - Hide columns by index", "hide <i,j,..>".green());
    println!("  {}          - Unhide all columns", "show".green());
    println!("  {}          - List columns with indices", "cols".green());
    println!("  {}             - Reload the current page", "r".green());
    println!("  {}             - Quit", "q".green());
}

fn render(pager: &Paginator, current: &PageResult, config: &Config) {
    let page = project(current, pager.hidden_columns());
    display_page(
        &page,
        pager.current_page(),
        pager.page_size(),
        current.has_next,
        &config.display,
    );
}

/// Handle one command line. Returns false when the session should end.
/// A failed fetch reports the error and keeps the current page intact.
fn run_command(
    pager: &mut Paginator,
    current: &mut PageResult,
    config: &Config,
    line: &str,
) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default();
    let rest: Vec<&str> = parts.collect();

    match command {
        "q" | "quit" | "exit" => return Ok(false),
        "help" | "?" => print_help(),
        "n" | "next" => {
            if current.has_next {
                *current = pager.fetch_page(pager.current_page() + 1)?;
                render(pager, current, config);
            } else {
                println!("{}", "You are at the end of the file.".yellow());
            }
        }
        "p" | "prev" => {
            if pager.current_page() > 0 {
                *current = pager.fetch_page(pager.current_page() - 1)?;
                render(pager, current, config);
            } else {
                println!("{}", "You are at the start of the file.".yellow());
            }
        }
        "g" | "goto" => {
            let page: usize = rest
                .first()
                .ok_or_else(|| anyhow::anyhow!("usage: g <page>"))?
                .parse()?;
            *current = pager.fetch_page(page.saturating_sub(1))?;
            render(pager, current, config);
        }
        "d" | "delimiter" => {
            let delimiter: Delimiter = rest
                .first()
                .ok_or_else(|| anyhow::anyhow!("usage: d <delimiter>"))?
                .parse()?;
            pager.set_delimiter(delimiter);
            *current = pager.fetch_current()?;
            render(pager, current, config);
        }
        "s" | "pagesize" => {
            let value = rest
                .first()
                .ok_or_else(|| anyhow::anyhow!("usage: s <rows>"))?;
            let page_size = value
                .parse::<usize>()
                .map_err(|_| PagerError::InvalidPageSize(format!("not a number: {value}")))?;
            pager.set_page_size(page_size)?;
            *current = pager.fetch_current()?;
            render(pager, current, config);
        }
        "hide" => {
            let mut hidden = pager.hidden_columns().clone();
            for token in rest.iter().flat_map(|part| part.split(',')) {
                if token.is_empty() {
                    continue;
                }
                let index = token
                    .parse::<usize>()
                    .map_err(|_| anyhow::anyhow!("not a column index: {token}"))?;
                hidden.insert(index);
            }
            pager.set_hidden_columns(hidden);
            // Visibility is a projection concern; re-render without rescanning
            render(pager, current, config);
        }
        "show" | "unhide" => {
            pager.set_hidden_columns(HashSet::new());
            render(pager, current, config);
        }
        "cols" | "columns" => {
            for (index, name) in current.header.iter().enumerate() {
                if pager.hidden_columns().contains(&index) {
                    println!("  {:>3}  {} {}", index, name, "(hidden)".dark_grey());
                } else {
                    println!("  {:>3}  {}", index, name);
                }
            }
        }
        "r" | "reload" => {
            *current = pager.fetch_current()?;
            render(pager, current, config);
        }
        other => {
            println!(
                "{}",
                format!("Unknown command: {other} (try 'help')").yellow()
            );
        }
    }

    Ok(true)
}

fn main() -> Result<()> {
    logging::init_tracing();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("could not load config, using defaults: {err:#}");
        Config::default()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut source: Option<PathBuf> = None;
    let mut delimiter = config.behavior.default_delimiter;
    let mut page_size = config.behavior.default_page_size;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--delimiter" | "-d" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--delimiter needs a value"))?;
                delimiter = value.parse()?;
            }
            "--page-size" | "-p" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--page-size needs a value"))?;
                page_size = value
                    .parse::<usize>()
                    .map_err(|_| PagerError::InvalidPageSize(format!("not a number: {value}")))?;
            }
            other => source = Some(PathBuf::from(other)),
        }
        i += 1;
    }

    let Some(source) = source else {
        print_help();
        return Ok(());
    };

    let mut pager = Paginator::new(source);
    pager.set_delimiter(delimiter);
    pager.set_page_size(page_size)?;

    // Load the first page before the prompt loop starts; there is no
    // presentation surface to wait for
    let mut current = pager.fetch_current()?;
    render(&pager, &current, &config);

    let mut line_editor = Reedline::create();
    loop {
        let prompt = PagerPrompt {
            label: format!("page {} ", pager.current_page() + 1),
        };
        match line_editor.read_line(&prompt)? {
            Signal::Success(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match run_command(&mut pager, &mut current, &config, line) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => println!("{}", format!("Error: {err:#}").red()),
                }
            }
            Signal::CtrlC | Signal::CtrlD => break,
        }
    }

    Ok(())
}
