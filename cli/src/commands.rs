pub mod components;
pub mod invoke;
pub mod search;
pub mod services;
pub mod unused;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use flowadmin_common::config::{Config, DEFAULT_API_URL};
use flowadmin_core::search::HitColumn;

#[derive(Parser)]
#[command(name = "flowadmin")]
#[command(about = "Admin tools for process graphs and backend services.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the backend API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Processing type to load services from (repeatable)
    #[arg(long = "processing-type", global = true, value_name = "TYPE")]
    pub processing_types: Vec<String>,

    /// Give up on an invocation after this many milliseconds
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Print less; repeat for bare results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every node that uses a component
    #[command(alias = "s")]
    Search {
        component_id: String,
        /// Only keep rows containing this text (case-insensitive)
        #[arg(long, default_value = "")]
        filter: String,
        /// Sort rows by process, node or category
        #[arg(long)]
        sort: Option<HitColumn>,
    },
    /// List components no process uses
    #[command(alias = "u")]
    Unused,
    /// List every known component id
    #[command(alias = "c")]
    Components,
    /// List the service catalog
    #[command(alias = "l")]
    Services,
    /// Call a service with ad-hoc parameters
    #[command(alias = "i")]
    Invoke {
        /// Service name; defaults to the first catalog entry
        service: Option<String>,
        /// Pick the service from this processing type when names collide
        #[arg(long = "in", value_name = "TYPE")]
        within: Option<String>,
        /// Parameter expression, as name=expression (repeatable)
        #[arg(short, long = "param", value_name = "NAME=EXPR", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        let defaults = Config::default();
        Config {
            api_url: self.api_url.trim_end_matches('/').to_string(),
            processing_types: if self.processing_types.is_empty() {
                defaults.processing_types
            } else {
                self.processing_types.clone()
            },
            invoke_timeout: Duration::from_millis(self.timeout_ms),
            quiet: self.quiet,
        }
    }
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (name, expression) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=EXPR, got '{s}'"))?;
    if name.trim().is_empty() {
        return Err(format!("missing parameter name in '{s}'"));
    }
    Ok((name.trim().to_string(), expression.to_string()))
}
