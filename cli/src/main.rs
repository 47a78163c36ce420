mod commands;
mod terminal;

use commands::{CommandLine, Commands, components, invoke, search, services, unused};
use flowadmin_client::HttpAdminApi;
use flowadmin_core::admin::AdminService;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet);

    let cfg = commands.config();
    let api = HttpAdminApi::from_config(&cfg)?;
    let service = AdminService::new(Box::new(api), cfg.clone());

    print::banner(&cfg.api_url, cfg.quiet);

    let outcome = match commands.command {
        Commands::Search { component_id, filter, sort } => {
            print::section("searching component usages", cfg.quiet);
            search::search(&service, &component_id, &filter, sort, &cfg).await
        }
        Commands::Unused => unused::unused(&service, &cfg).await,
        Commands::Components => components::components(&service, &cfg).await,
        Commands::Services => services::services(&service, &cfg).await,
        Commands::Invoke { service: name, within, params } => {
            invoke::invoke(&service, name.as_deref(), within.as_deref(), &params, &cfg).await
        }
    };

    if cfg.quiet == 0 {
        print::rule();
    }
    outcome
}
