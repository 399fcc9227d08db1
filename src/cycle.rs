use chrono::Local;

use crate::charts;
use crate::host;
use crate::measurement::Snapshot;
use crate::rrd;
use crate::satellite::SatelliteClient;
use crate::sensor::IndoorSensor;
use crate::units;

/// One full measurement cycle: read everything, persist, re-render charts.
///
/// The satellite, the stores and the charts all fail open. Only the local
/// reads may error out of here, aborting the rest of this cycle; the loop
/// logs that and re-arms for the next one.
pub async fn run(
    sensor: &mut IndoorSensor,
    satellite: &SatelliteClient,
) -> Result<(), anyhow::Error> {
    let outdoor = satellite.fetch().await;

    let indoor = sensor.read()?;
    log::info!(
        "Indoor: {:.2} °C | {:.2} °F, {:.1} %, {:.2} hPa MSLP",
        indoor.temp_c,
        indoor.temp_f,
        indoor.humidity,
        indoor.pressure_hpa
    );

    // The tank probe is disconnected; its store column stays unknown until
    // it is replaced.
    let tank_temp_c = None;

    let host_temp_c = host::read_cpu_temp_c().await?;
    log::info!(
        "Host CPU: {:.2} °C | {:.2} °F",
        host_temp_c,
        units::celsius_to_fahrenheit(host_temp_c)
    );

    let snapshot = Snapshot {
        timestamp: Local::now(),
        outdoor,
        indoor,
        tank_temp_c,
        host_temp_c,
    };

    rrd::persist(&snapshot).await;
    charts::render_all().await;

    Ok(())
}
