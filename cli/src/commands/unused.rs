use crate::commands::components::print_list;
use crate::terminal::{print, spinner};
use flowadmin_common::config::Config;
use flowadmin_core::admin::AdminService;

pub async fn unused(service: &AdminService, cfg: &Config) -> anyhow::Result<()> {
    let loading = spinner::start("unused components", cfg.quiet);
    let unused: Vec<String> = service.load_unused_components().await?;
    drop(loading);

    print::section("unused components", cfg.quiet);
    print_list(&unused, "unused components", cfg);
    Ok(())
}
