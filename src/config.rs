use std::time::Duration;

// Deployment constants, fixed for the installation site rather than exposed
// as flags. Adjust here and redeploy.

/// Time between cycle starts. A cycle that overruns this interval is
/// followed immediately by the next one.
pub const CYCLE_INTERVAL: Duration = Duration::from_secs(60);

/// Station altitude above mean sea level, for pressure reduction.
pub const STATION_ALTITUDE_M: f64 = 276.0;

/// Correction added to the raw BME280 temperature reading.
pub const TEMP_CALIBRATION_OFFSET_C: f64 = -0.5;

/// Satellite sensor endpoint on the LAN. Plain HTTP; the Pico W on the
/// other end does not speak TLS.
pub const SATELLITE_URL: &str = "http://192.168.0.5";
pub const SATELLITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Round-robin stores, relative to the working directory.
pub const TEMPERATURES_RRD: &str = "temperatures.rrd";
pub const HUMIDITIES_RRD: &str = "humidities.rrd";
pub const PRESSURES_RRD: &str = "pressures.rrd";

/// Rendered chart images, served from the tmpfs mount.
pub const TEMPERATURE_CHART: &str = "/mnt/tmp/temperatures.png";
pub const HUMIDITY_CHART: &str = "/mnt/tmp/humidities.png";
pub const PRESSURE_CHART: &str = "/mnt/tmp/pressures.png";
pub const HOST_CHART: &str = "/mnt/tmp/host.png";

pub const LOG_FILE: &str = "./home-weather-logger.log";
