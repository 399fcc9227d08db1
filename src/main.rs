use std::fs::OpenOptions;
use std::time::Duration;

use anyhow::Context;
use backon::BlockingRetryable;
use backon::ConstantBuilder;
use log::LevelFilter;
use satellite::SatelliteClient;
use sensor::IndoorSensor;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, TermLogger, TerminalMode, WriteLogger,
};
use tokio::time::Instant;

mod charts;
mod config;
mod cycle;
mod host;
mod measurement;
mod rrd;
mod satellite;
mod scheduler;
mod sensor;
mod units;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .map_err(|_| anyhow::anyhow!("Failed to set time offset to local"))?
        .build();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config::LOG_FILE)
        .context("Failed to open log file")?;
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            log_config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, log_config, log_file),
    ])
    .context("Failed to initialize logger")?;

    if let Err(e) = run().await {
        log::error!("{e:#}");
    }

    Ok(())
}

pub async fn run() -> Result<(), anyhow::Error> {
    let retry_builder = ConstantBuilder::default()
        .with_delay(Duration::from_millis(100))
        .with_max_times(20);

    // The indoor sensor is required hardware; if it never comes up we
    // report and exit instead of entering the loop.
    let mut sensor = IndoorSensor::connect
        .retry(retry_builder)
        .notify(|e, dur| {
            log::error!("{e:#}");
            log::info!("Retrying in {:?}", dur);
        })
        .call()?;

    let satellite = SatelliteClient::new(config::SATELLITE_URL, config::SATELLITE_TIMEOUT)?;

    // Runs until the process is terminated from outside.
    tokio::spawn(async move {
        loop {
            let cycle_started = Instant::now();
            if let Err(e) = cycle::run(&mut sensor, &satellite).await {
                log::error!("Cycle aborted: {e:#}");
            }
            scheduler::idle_until_next_cycle(cycle_started, config::CYCLE_INTERVAL).await;
        }
    });

    tokio::signal::ctrl_c()
        .await
        .context("Failed to wait for Ctrl+C signal")?;

    Ok(())
}
