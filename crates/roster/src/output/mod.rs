//! Output formatting for CLI commands.
//!
//! This module provides utilities for formatting command output in both
//! human-readable text format and JSON format for programmatic use.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers
//! - [`format`]: Currency and date formatting for display

pub mod color;
pub mod format;

use crate::domain::query::DEFAULT_PAGE_WINDOW;
use crate::domain::{Employee, PageResult};
use serde::Serialize;
use std::env;
use std::io::{self, Write};

pub use color::{error, info, success, warning};
pub use format::{format_currency, format_long_date, format_long_datetime, format_short_date};

use color::{bold, colorize_status, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

const DEFAULT_TERMINAL_WIDTH: u16 = 80;
const DEFAULT_MAX_CONTENT_WIDTH: usize = 160;

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Maximum width of table output.
    pub max_width: usize,
    /// Whether to use colors in output.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create a new `OutputConfig` with explicit values.
    pub fn new(max_width: usize, use_colors: bool) -> Self {
        Self {
            max_width,
            use_colors,
        }
    }

    /// Create an `OutputConfig` by reading from environment variables.
    ///
    /// Reads:
    /// - `ROSTER_MAX_WIDTH`: Maximum table width (default: 160, further
    ///   capped by the terminal width)
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `ROSTER_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_width = match lookup("ROSTER_MAX_WIDTH") {
            Some(s) if !s.is_empty() => match s.parse() {
                Ok(width) => width,
                Err(_) => {
                    tracing::warn!(
                        env_var = "ROSTER_MAX_WIDTH",
                        value = %s,
                        default = DEFAULT_MAX_CONTENT_WIDTH,
                        "Invalid value, using default"
                    );
                    DEFAULT_MAX_CONTENT_WIDTH
                }
            },
            _ => DEFAULT_MAX_CONTENT_WIDTH,
        };

        // NO_COLOR wins over ROSTER_COLOR (https://no-color.org/)
        let use_colors = lookup("NO_COLOR").is_none()
            && lookup("ROSTER_COLOR").is_none_or(|v| v != "0" && !v.eq_ignore_ascii_case("false"));

        Self {
            max_width,
            use_colors,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_CONTENT_WIDTH,
            use_colors: true,
        }
    }
}

/// Get the current terminal width, falling back to default if detection fails.
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_TERMINAL_WIDTH, |(w, _)| w.0)
        .into()
}

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Dispatch Functions
// ============================================================================

/// Print one page of a query result in the specified format
pub fn print_page(page: &PageResult, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => {
            let config = OutputConfig::from_env();
            let width = get_terminal_width().min(config.max_width);
            print_page_text(&mut handle, page, width, &config)
        }
        OutputMode::Json => write_json(&mut handle, &PageJson::from(page)),
    }
}

/// Print a single employee with all fields (for show/add/update)
pub fn print_employee(employee: &Employee, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => print_employee_text(&mut handle, employee, &OutputConfig::from_env()),
        OutputMode::Json => write_json(&mut handle, employee),
    }
}

/// Print a list of group names
pub fn print_groups(groups: &[&str], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match mode {
        OutputMode::Text => print_groups_text(&mut handle, groups),
        OutputMode::Json => write_json(&mut handle, &groups),
    }
}

/// Print a simple message
pub fn print_message(msg: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{msg}")
}

/// Print a JSON-formatted result for any serializable value
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value)
}

fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(w, "{json}")
}

/// JSON shape of a page: the result plus the derived page count.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    data: &'a [Employee],
    total: usize,
    page: usize,
    page_size: usize,
    total_pages: usize,
}

impl<'a> From<&'a PageResult> for PageJson<'a> {
    fn from(page: &'a PageResult) -> Self {
        Self {
            data: &page.items,
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            total_pages: page.total_pages(),
        }
    }
}

// ============================================================================
// Text Formatting
// ============================================================================

const COLUMN_GAP: &str = "  ";

/// Table column headers, in display order
const HEADERS: [&str; 8] = [
    "ID",
    "Username",
    "Name",
    "Email",
    "Birth Date",
    "Salary",
    "Status",
    "Group",
];

/// Index of the email column, dropped first on narrow terminals
const EMAIL_COLUMN: usize = 3;

fn row_cells(employee: &Employee) -> [String; 8] {
    [
        employee.id.to_string(),
        employee.username.clone(),
        employee.full_name(),
        employee.email.clone(),
        format_short_date(employee.birth_date),
        format_currency(employee.basic_salary),
        employee.status.clone(),
        employee.group.clone(),
    ]
}

fn print_page_text<W: Write>(
    w: &mut W,
    page: &PageResult,
    width: usize,
    config: &OutputConfig,
) -> io::Result<()> {
    if page.total == 0 {
        writeln!(w, "No employees found.")?;
        return Ok(());
    }

    if page.items.is_empty() {
        writeln!(
            w,
            "No employees on page {} ({} match, {} page(s)).",
            page.page,
            page.total,
            page.total_pages()
        )?;
        return Ok(());
    }

    let rows: Vec<[String; 8]> = page.items.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let full_width: usize = widths.iter().sum::<usize>() + COLUMN_GAP.len() * (widths.len() - 1);
    let show_email = full_width <= width;
    let visible = |index: usize| show_email || index != EMAIL_COLUMN;

    let header: Vec<String> = HEADERS
        .iter()
        .enumerate()
        .filter(|(i, _)| visible(*i))
        .map(|(i, h)| bold(&pad(h, widths[i]), config))
        .collect();
    writeln!(w, "{}", header.join(COLUMN_GAP).trim_end())?;

    for (row, employee) in rows.iter().zip(&page.items) {
        let cells: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|(i, _)| visible(*i))
            .map(|(i, cell)| {
                let padded = pad(cell, widths[i]);
                match i {
                    0 => info(&padded, config),
                    6 => padded.replace(
                        &employee.status,
                        &colorize_status(&employee.status, config),
                    ),
                    _ => padded,
                }
            })
            .collect();
        writeln!(w, "{}", cells.join(COLUMN_GAP).trim_end())?;
    }

    writeln!(w)?;
    let first = (page.page - 1) * page.page_size + 1;
    let last = first + page.items.len() - 1;
    writeln!(
        w,
        "Showing {first}-{last} of {} employee(s)",
        page.total
    )?;
    writeln!(
        w,
        "Page {} of {}  {}",
        page.page,
        page.total_pages(),
        render_page_window(page, config)
    )?;

    Ok(())
}

/// Render the page-number links, current page in brackets.
fn render_page_window(page: &PageResult, config: &OutputConfig) -> String {
    page.page_window(DEFAULT_PAGE_WINDOW)
        .into_iter()
        .map(|n| {
            if n == page.page {
                info(&format!("[{n}]"), config)
            } else {
                dimmed(&n.to_string(), config)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn print_employee_text<W: Write>(
    w: &mut W,
    employee: &Employee,
    config: &OutputConfig,
) -> io::Result<()> {
    writeln!(
        w,
        "{} {}",
        info(&format!("#{}", employee.id), config),
        bold(&employee.full_name(), config)
    )?;

    let fields = [
        ("Username:", employee.username.clone()),
        ("Email:", employee.email.clone()),
        ("Birth Date:", format_long_date(employee.birth_date)),
        ("Basic Salary:", format_currency(employee.basic_salary)),
        ("Status:", colorize_status(&employee.status, config)),
        ("Group:", employee.group.clone()),
        ("Description:", format_long_datetime(employee.description)),
    ];

    for (label, value) in fields {
        writeln!(w, "  {} {value}", dimmed(&pad(label, 13), config))?;
    }

    Ok(())
}

fn print_groups_text<W: Write>(w: &mut W, groups: &[&str]) -> io::Result<()> {
    if groups.is_empty() {
        writeln!(w, "No groups found.")?;
        return Ok(());
    }

    for group in groups {
        writeln!(w, "{group}")?;
    }

    Ok(())
}
