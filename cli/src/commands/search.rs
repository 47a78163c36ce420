use std::time::{Duration, Instant};

use colored::*;
use tracing::debug;

use crate::terminal::{colors, format, print, spinner};
use flowadmin_common::model::search::SearchHit;
use flowadmin_common::{config::Config, warn};
use flowadmin_core::admin::AdminService;
use flowadmin_core::search::{self, HitColumn};

const COLUMNS: [&str; 3] = ["Process", "Node", "Category"];

pub async fn search(
    service: &AdminService,
    component_id: &str,
    filter: &str,
    sort: Option<HitColumn>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();
    let loading = spinner::start("processes", cfg.quiet);
    let (processes, component_ids) =
        tokio::join!(service.load_processes(), service.load_component_ids());
    drop(loading);

    let processes = processes?;
    match component_ids {
        Ok(ids) if !ids.iter().any(|id| id == component_id) => {
            warn!("'{component_id}' is not a known component id")
        }
        Ok(_) => {}
        Err(e) => debug!("could not check component id: {e}"),
    }

    let mut hits: Vec<SearchHit> =
        search::filter_hits(&search::search(&processes, Some(component_id)), filter);
    if let Some(column) = sort {
        search::sort_hits(&mut hits, column);
    }

    search_ends(&hits, component_id, start_time.elapsed(), cfg);
    Ok(())
}

fn search_ends(hits: &[SearchHit], component_id: &str, total_time: Duration, cfg: &Config) {
    if hits.is_empty() {
        print::section("component not used", cfg.quiet);
        print::no_results(cfg.quiet);
        return;
    }

    print::section(&format!("usages of {component_id}"), cfg.quiet);
    if cfg.quiet >= 2 {
        for hit in hits {
            print::bare(&[hit.process.as_str(), hit.node.as_str(), hit.category.as_str()]);
        }
        return;
    }

    let rows: Vec<Vec<String>> = hits.iter().map(format::hit_to_row).collect();
    print::table(&COLUMNS, &rows);
    print_summary(hits.len(), total_time, cfg);
}

fn print_summary(count: usize, total_time: Duration, cfg: &Config) {
    let usages: ColoredString = format!("{count} usages").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Search Complete: {usages} found in {total_time}").color(colors::TEXT_DEFAULT);

    print::summary(&output.to_string(), true, cfg.quiet);
}
