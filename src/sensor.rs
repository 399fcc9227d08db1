use anyhow::Context as _;
use bme280::i2c::BME280;
use bme280::{Configuration, IIRFilter, Oversampling};
use rppal::{hal::Delay, i2c::I2c};

use crate::config;
use crate::measurement::IndoorReading;
use crate::units;

/// Indoor BME280, polled over I2C once per cycle.
#[derive(Debug)]
pub struct IndoorSensor {
    delay: Delay,
    bme280: BME280<I2c>,
}

impl IndoorSensor {
    /// Brings the sensor up at the primary I2C address, falling back to the
    /// secondary one. The sensor is required hardware; if neither address
    /// responds the caller should give up rather than enter the loop.
    pub fn connect() -> Result<IndoorSensor, anyhow::Error> {
        let mut delay = Delay;

        let mut bme280 = BME280::new_primary(I2c::new().context("Failed to initialize I2C")?);
        if let Err(e) = bme280.init_with_config(&mut delay, sampling_config()) {
            log::warn!("No BME280 at the primary I2C address ({e}), trying the secondary address");
            bme280 = BME280::new_secondary(I2c::new().context("Failed to initialize I2C")?);
            bme280
                .init_with_config(&mut delay, sampling_config())
                .context("Failed to initialize BME280 at either I2C address")?;
        }

        Ok(IndoorSensor { delay, bme280 })
    }

    /// One temperature/humidity/pressure reading, calibration-corrected and
    /// with pressure reduced to mean sea level.
    pub fn read(&mut self) -> Result<IndoorReading, anyhow::Error> {
        let m = self
            .bme280
            .measure(&mut self.delay)
            .context("Failed to read BME280 measurements")?;

        let temp_c = f64::from(m.temperature) + config::TEMP_CALIBRATION_OFFSET_C;
        let humidity = f64::from(m.humidity);
        // The BME280 driver reports pascals; the stores and charts work in hPa.
        let station_hpa = f64::from(m.pressure) / 100.0;
        log::debug!("{station_hpa:.2} hPa raw station pressure");

        Ok(IndoorReading {
            temp_c,
            temp_f: units::celsius_to_fahrenheit(temp_c),
            humidity,
            pressure_hpa: units::station_to_sea_level_pressure(
                station_hpa,
                temp_c,
                config::STATION_ALTITUDE_M,
            ),
        })
    }
}

// These oversampling settings can be tweaked to change the balance between
// accuracy and noise in the data. Set once at bring-up.
fn sampling_config() -> Configuration {
    Configuration::default()
        .with_humidity_oversampling(Oversampling::Oversampling2X)
        .with_pressure_oversampling(Oversampling::Oversampling4X)
        .with_temperature_oversampling(Oversampling::Oversampling8X)
        .with_iir_filter(IIRFilter::Coefficient4)
}
