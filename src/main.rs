use clap::Parser;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use woof_fetch::core::ConfigProvider;
use woof_fetch::utils::{logger, validation::Validate};
use woof_fetch::{CliConfig, FetchAndRender, HtmlFileRegion, HttpDogSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);

    tracing::info!("Starting woof");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = HttpDogSource::from_config(&config);
    let region = HtmlFileRegion::new(config.output_path());
    let app = Arc::new(FetchAndRender::new(source, region));

    let mut in_flight = Vec::new();
    if config.interactive {
        println!("Press Enter to fetch a dog, Ctrl-D to quit.");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while lines.next_line().await?.is_some() {
            in_flight.push(app.spawn_trigger());
        }
    } else {
        for _ in 0..config.clicks() {
            in_flight.push(app.spawn_trigger());
        }
    }

    tracing::debug!("Waiting for {} trigger(s) to settle", in_flight.len());
    for handle in in_flight {
        handle.await?;
    }

    println!("📁 Display region: {}", app.region().path().display());
    Ok(())
}
