use clap::Parser;
use launch_dash::adapters::console::JsonLineRenderer;
use launch_dash::core::ConfigProvider;
use launch_dash::utils::logger;
use launch_dash::{CliConfig, Dashboard, Dataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting launch-dash");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let settings = match cli.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    // A dataset that fails to load is fatal; there is no degraded mode.
    let dataset = match Dataset::load(settings.data_path()) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load launch data: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        "{} records across {} sites, payload {:.0}..{:.0} kg",
        dataset.len(),
        dataset.site_names().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );

    // Control contracts for the hosting UI: dropdown options and slider spec.
    println!("{}", serde_json::to_string(&dataset.site_options())?);
    println!(
        "{}",
        serde_json::to_string(&dataset.payload_control_spec(settings.payload_slider()))?
    );

    let mut dashboard = Dashboard::new(dataset, JsonLineRenderer::new(), JsonLineRenderer::new());
    dashboard.refresh()?;

    tracing::info!("✅ Initial dashboard views rendered");
    Ok(())
}
