use colored::*;

use crate::terminal::{colors, print, spinner};
use flowadmin_common::config::Config;
use flowadmin_core::admin::AdminService;

pub async fn components(service: &AdminService, cfg: &Config) -> anyhow::Result<()> {
    let loading = spinner::start("component ids", cfg.quiet);
    let component_ids: Vec<String> = service.load_component_ids().await?;
    drop(loading);

    print::section("known components", cfg.quiet);
    print_list(&component_ids, "components", cfg);
    Ok(())
}

/// Prints one component per line, numbered unless output is bare.
pub fn print_list(items: &[String], noun: &str, cfg: &Config) {
    if items.is_empty() {
        print::no_results(cfg.quiet);
        return;
    }

    for (idx, item) in items.iter().enumerate() {
        match cfg.quiet {
            2 => print::bare(&[item.as_str()]),
            _ => print::entry(idx, item),
        }
    }

    let count: ColoredString = format!("{} {noun}", items.len()).bold().green();
    let output: ColoredString = format!("Listed {count}").color(colors::TEXT_DEFAULT);
    print::summary(&output.to_string(), true, cfg.quiet);
}
