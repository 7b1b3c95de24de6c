//! # datatable
//!
//! A CLI for exploring JSON datasets as a typed, paginated table.
//!
//! ## Overview
//!
//! datatable is built on top of datatablelib. It loads a column
//! configuration and a dataset, applies a search, column filters and a sort,
//! and prints one page of the result as a table or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! # First page of the demo invoices
//! datatable demos/columns.json demos/invoices.json
//!
//! # Unpaid invoices, largest first, 10 per page
//! datatable demos/columns.json demos/invoices.json -f status=UNPAID --sort amount:desc -n 10
//!
//! # Invoices created in January, as JSON
//! datatable demos/columns.json demos/invoices.json \
//!     -f 'created_at=2024-01-01T00:00|2024-01-31T23:59' --output json
//! ```

mod render;

use std::process::ExitCode;

use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use datatablelib::{load_columns, load_rows, SortDirection, SortState, TableState};
use log::debug;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("datatable")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Search, filter, sort and page JSON datasets as a typed table")
        .arg(
            Arg::new("columns")
                .required(true)
                .help("Column configuration (JSON array or object keyed by column)"),
        )
        .arg(
            Arg::new("rows")
                .required(true)
                .help("Dataset (JSON array of objects)"),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .help("Search all columns (case-insensitive)"),
        )
        .arg(
            Arg::new("filter")
                .short('f')
                .long("filter")
                .action(ArgAction::Append)
                .value_name("KEY=VALUE")
                .help("Filter a column (can be specified multiple times); dates take FROM|TO"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .value_name("KEY[:asc|:desc]")
                .help("Sort by a column"),
        )
        .arg(
            Arg::new("page")
                .short('p')
                .long("page")
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("Page to show (1-based, clamped to the last page)"),
        )
        .arg(
            Arg::new("page-size")
                .short('n')
                .long("page-size")
                .value_parser(value_parser!(usize))
                .help("Rows per page: 5, 10, 20, 50 or 100"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("show-filters")
                .long("show-filters")
                .action(ArgAction::SetTrue)
                .help("Include the filter panel in the output"),
        )
}

/// Split `KEY=VALUE`; the value may itself contain `=`.
fn parse_filter(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| anyhow!("invalid filter '{}' (expected KEY=VALUE)", raw))
}

/// Parse `KEY`, `KEY:asc` or `KEY:desc`.
///
/// A suffix that is not a direction is part of the key, so keys may
/// contain `:`.
fn parse_sort(raw: &str) -> SortState {
    if let Some((key, suffix)) = raw.rsplit_once(':') {
        if let Ok(direction) = suffix.parse::<SortDirection>() {
            return SortState::by(key, direction);
        }
    }
    SortState::by(raw, SortDirection::Ascending)
}

fn build_table(matches: &ArgMatches) -> anyhow::Result<TableState> {
    let columns_path = matches
        .get_one::<String>("columns")
        .context("missing columns file")?;
    let rows_path = matches
        .get_one::<String>("rows")
        .context("missing rows file")?;

    let mut table = TableState::new(load_columns(columns_path)?, load_rows(rows_path)?);

    if let Some(search) = matches.get_one::<String>("search") {
        table.set_global_filter(search.as_str());
    }
    if let Some(filters) = matches.get_many::<String>("filter") {
        for raw in filters {
            let (key, value) = parse_filter(raw)?;
            table.set_column_filter(key, value)?;
        }
    }
    if let Some(sort) = matches.get_one::<String>("sort") {
        table.set_sort(parse_sort(sort))?;
    }
    if let Some(&page_size) = matches.get_one::<usize>("page-size") {
        table.set_page_size(page_size)?;
    }
    if let Some(&page) = matches.get_one::<usize>("page") {
        table.go_to_page(page.saturating_sub(1));
    }
    if matches.get_flag("show-filters") {
        table.toggle_filters();
    }

    debug!(
        "Showing page {} of {} matching rows",
        table.page_index() + 1,
        table.filtered_count()
    );
    Ok(table)
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let rendered = build_table(matches)?.render();
    match matches.get_one::<String>("output").map(String::as_str) {
        Some("json") => Ok(format!("{}\n", serde_json::to_string_pretty(&rendered)?)),
        _ => render::render_table(&rendered),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let matches = build_command().get_matches();

    match run(&matches) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
