use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner currently on screen; log lines are printed above it.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Keeps a spinner alive until dropped.
pub struct SpinnerGuard {
    spinner: Option<ProgressBar>,
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        let Some(spinner) = self.spinner.take() else {
            return;
        };
        spinner.finish_and_clear();
        if let Ok(mut active) = ACTIVE.lock() {
            *active = None;
        }
    }
}

fn style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ])
}

/// Shows `what` as loading. Bare output (`q_level >= 2`) never spins.
pub fn start(what: &str, q_level: u8) -> SpinnerGuard {
    if q_level >= 2 {
        return SpinnerGuard { spinner: None };
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(style());
    pb.set_message(format!("Loading {}...", what.italic()));
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut active) = ACTIVE.lock() {
        *active = Some(pb.clone());
    }
    SpinnerGuard { spinner: Some(pb) }
}

pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let active: Option<ProgressBar> = ACTIVE
            .lock()
            .ok()
            .and_then(|active| active.clone())
            .filter(|spinner| !spinner.is_hidden());
        match active {
            Some(spinner) => {
                let msg = String::from_utf8_lossy(buf);
                spinner.println(msg.trim_end());
                Ok(buf.len())
            }
            None => std::io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
