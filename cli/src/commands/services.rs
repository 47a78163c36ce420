use crate::terminal::{format, print, spinner};
use flowadmin_common::config::Config;
use flowadmin_common::model::catalog::ServiceDescriptor;
use flowadmin_core::admin::AdminService;

pub async fn services(service: &AdminService, cfg: &Config) -> anyhow::Result<()> {
    let loading = spinner::start("service catalog", cfg.quiet);
    let catalog: Vec<ServiceDescriptor> = service.load_catalog().await?;
    drop(loading);

    if catalog.is_empty() {
        print::section("empty catalog", cfg.quiet);
        print::no_results(cfg.quiet);
        return Ok(());
    }

    print::section("service catalog", cfg.quiet);
    for (idx, descriptor) in catalog.iter().enumerate() {
        if cfg.quiet >= 2 {
            print::bare(&[descriptor.processing_type.as_str(), descriptor.name.as_str()]);
            continue;
        }
        if idx > 0 {
            print::blank();
        }
        print::entry(idx, &descriptor.name);
        print::entry_details(&format::service_to_details(descriptor));
    }
    Ok(())
}
