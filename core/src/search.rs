//! Component usage search.
//!
//! [`search`] answers "where is this component used?" over an already loaded
//! set of processes. [`filter_hits`] and [`sort_hits`] back the result table.

use std::cmp::Ordering;

use flowadmin_common::model::process::Process;
use flowadmin_common::model::search::SearchHit;

/// Returns every node referencing `component_id`, in process order then node order.
///
/// An absent or empty id matches nothing.
pub fn search(processes: &[Process], component_id: Option<&str>) -> Vec<SearchHit> {
    let Some(component_id) = component_id.filter(|id| !id.is_empty()) else {
        return Vec::new();
    };

    processes
        .iter()
        .flat_map(|process| {
            process
                .nodes()
                .iter()
                .filter(move |node| node.component_id() == Some(component_id))
                .map(move |node| SearchHit {
                    process: process.id.clone(),
                    node: node.id.clone(),
                    category: process.process_category.clone(),
                })
        })
        .collect()
}

/// Keeps hits where any column contains `filter`, ignoring case.
pub fn filter_hits(hits: &[SearchHit], filter: &str) -> Vec<SearchHit> {
    let needle: String = filter.trim().to_lowercase();
    if needle.is_empty() {
        return hits.to_vec();
    }

    hits.iter()
        .filter(|hit| {
            [&hit.process, &hit.node, &hit.category]
                .iter()
                .any(|column| column.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitColumn {
    Process,
    Node,
    Category,
}

impl std::str::FromStr for HitColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "process" => Ok(HitColumn::Process),
            "node" => Ok(HitColumn::Node),
            "category" => Ok(HitColumn::Category),
            _ => Err(format!("unknown column: {s}")),
        }
    }
}

/// Stable ascending sort on one column.
pub fn sort_hits(hits: &mut [SearchHit], column: HitColumn) {
    hits.sort_by(|a, b| compare_column(a, b, column));
}

fn compare_column(a: &SearchHit, b: &SearchHit, column: HitColumn) -> Ordering {
    match column {
        HitColumn::Process => a.process.cmp(&b.process),
        HitColumn::Node => a.node.cmp(&b.node),
        HitColumn::Category => a.category.cmp(&b.category),
    }
}
