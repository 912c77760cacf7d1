use clap::Parser;
use lane_deck::core::ConfigProvider;
use lane_deck::utils::{logger, validation::Validate};
use lane_deck::{CliConfig, FileConfig, FixtureLoader, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // The config file is loaded before logging starts so its [logging]
    // section can take effect; CLI flags act as overrides.
    let file_config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                logger::init_logger(cli.verbose);
                tracing::error!("❌ Failed to load config file: {}", e);
                tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let log = cli.log_settings(file_config.as_ref());
    if log.json {
        logger::init_json_logger();
    } else {
        logger::init_logger(log.verbose);
    }

    tracing::info!("Starting lane-deck server");
    if log.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &file_config {
        Some(config) => run(config).await,
        None => run(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Server failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    Ok(())
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> lane_deck::Result<()> {
    config.validate()?;

    let loader = FixtureLoader::new(LocalStorage::default());
    let snapshot = loader
        .load(config.lanes_file(), config.series_file())
        .await?;
    tracing::info!(
        "Loaded {} lanes and {} series entries",
        snapshot.lane_count(),
        snapshot.series_count()
    );

    lane_deck::app::serve(config, snapshot).await
}
