use anyhow::Context;
use clap::Parser;
use oop_demos::app::demos;
use oop_demos::utils::logger;
use oop_demos::{CliConfig, DemoConfig, StdoutSink};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting oop-demos");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = DemoConfig::load(cli.config.as_deref())
        .context("failed to load demo configuration")?;

    if let Err(e) = demos::run(cli.demo, &config, StdoutSink::shared()) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Demonstrations finished");
    Ok(())
}
