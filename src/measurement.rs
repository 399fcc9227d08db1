use chrono::{DateTime, Local};

/// Everything one cycle measured, handed to the stores and discarded.
#[derive(Debug)]
pub struct Snapshot {
    pub timestamp: DateTime<Local>,
    pub outdoor: OutdoorReading,
    pub indoor: IndoorReading,
    pub tank_temp_c: Option<f64>,
    pub host_temp_c: f64,
}

/// Reading from the satellite sensor. `None` means the fetch failed this
/// cycle; the store boundary renders it as the unknown-value token so the
/// row keeps its full width.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutdoorReading {
    pub temp_c: Option<f64>,
    pub humidity: Option<f64>,
}

impl OutdoorReading {
    pub fn unavailable() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IndoorReading {
    pub temp_c: f64,
    pub temp_f: f64,
    pub humidity: f64,
    /// Mean-sea-level pressure, hPa.
    pub pressure_hpa: f64,
}
