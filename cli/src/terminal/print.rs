//! Everything the admin views put on screen goes through [`line`], which
//! emits a `flowadmin::print` event the formatter writes verbatim.

use std::cell::Cell;
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use flowadmin_common::{success, warn};
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "flowadmin::print";
pub const RAW_FIELD: &str = "raw_msg";

thread_local! {
    static FIELD_WIDTH: Cell<usize> = const { Cell::new(0) }
}

pub fn line(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn blank() {
    line("");
}

/// `title` centred in a rule of `fill`, padded to [`TOTAL_WIDTH`].
fn labelled_rule(title: &str, fill: &str) -> (String, String) {
    let free: usize = TOTAL_WIDTH.saturating_sub(title.width());
    (fill.repeat(free / 2), fill.repeat(free - free / 2))
}

pub fn banner(api_url: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ FLOWADMIN v{} ⟧", env!("CARGO_PKG_VERSION"));
    let (left, right) = labelled_rule(&title, "═");
    line(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green().bold(),
        right.color(colors::SEPARATOR)
    ));
    centered(&format!("{}", api_url.color(colors::SECONDARY)));
}

/// Opens a view section; hidden from `-q` on.
pub fn section(title: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let title: String = format!("⟦ {} ⟧", title.to_uppercase());
    let (left, right) = labelled_rule(&title, "─");
    line(&format!(
        "{}{}{}",
        left.color(colors::SEPARATOR),
        title.bright_green(),
        right.color(colors::SEPARATOR)
    ));
}

pub fn rule() {
    line(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

/// Closes a view: a centred footer, or a log line once headers are off.
pub fn summary(text: &str, ok: bool, q_level: u8) {
    match q_level {
        0 => {
            rule();
            centered(text);
        }
        1 => {
            blank();
            if ok {
                success!("{}", text);
            } else {
                warn!("{}", text);
            }
        }
        _ => {}
    }
}

/// Pads every following [`field`] key to the widest of `keys`.
pub fn field_keys(keys: &[&str]) {
    FIELD_WIDTH.set(keys.iter().map(|key| key.width()).max().unwrap_or(0));
}

pub fn field(key: &str, value: impl Display) {
    let dots: String = ".".repeat((FIELD_WIDTH.get() + 1).saturating_sub(key.width()));
    line(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

/// Numbered heading of one listed item (a service, a component).
pub fn entry(idx: usize, name: &str) {
    line(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Details hanging below an [`entry`], keys aligned.
pub fn entry_details(details: &[(String, ColoredString)]) {
    let key_width: usize = details.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        let dots: String = ".".repeat(key_width + 1 - key.width());
        line(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Column widths fitting both `headers` and every cell of `rows`.
pub fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.width())
                .chain(std::iter::once(header.width()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn pad(cell: &str, width: usize) -> String {
    format!("{}{}", cell, " ".repeat(width.saturating_sub(cell.width())))
}

pub fn table(headers: &[&str], rows: &[Vec<String>]) {
    let widths: Vec<usize> = column_widths(headers, rows);
    let divider: String = " │ ".color(colors::SEPARATOR).to_string();

    let head: Vec<String> = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width).color(colors::PRIMARY).bold().to_string())
        .collect();
    line(&head.join(&divider));

    let underline: Vec<String> = widths.iter().map(|width| "─".repeat(*width)).collect();
    line(&underline.join("─┼─").color(colors::SEPARATOR).to_string());

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width).color(colors::TEXT_DEFAULT).to_string())
            .collect();
        line(&cells.join(&divider));
    }
}

/// Tab-separated row for `-qq` output.
pub fn bare(cells: &[&str]) {
    line(&cells.join("\t"));
}

pub fn centered(msg: &str) {
    let indent: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    line(&format!("{}{}", " ".repeat(indent), msg));
}

const NO_RESULTS: &str = r#"
         _   _  ___    ____  _____ ____  _   _ _   _____ ____
        | \ | |/ _ \  |  _ \| ____/ ___|| | | | | |_   _/ ___|
        |  \| | | | | | |_) |  _| \___ \| | | | |   | | \___ \
        | |\  | |_| | |  _ <| |___ ___) | |_| | |___| |  ___) |
        |_| \_|\___/  |_| \_\_____|____/ \___/|_____|_| |____/
"#;

/// Big red banner for an empty view; skipped in bare output.
pub fn no_results(q_level: u8) {
    if q_level < 2 {
        line(&NO_RESULTS.red().bold().to_string());
    }
}
