pub fn celsius_to_fahrenheit(temp_c: f64) -> f64 {
    temp_c * 1.8 + 32.0
}

/// Reduces station pressure to mean-sea-level pressure.
/// Formula source: https://gist.github.com/cubapp/23dd4e91814a995b8ff06f406679abcf
pub fn station_to_sea_level_pressure(station_hpa: f64, temp_c: f64, altitude_m: f64) -> f64 {
    station_hpa
        + (station_hpa * 9.80665 * altitude_m) / (287.0 * (273.0 + temp_c + altitude_m / 400.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_fixed_points() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    }

    #[test]
    fn sea_level_reduction_is_identity_at_zero_altitude() {
        for station_hpa in [950.0, 1000.0, 1035.5] {
            for temp_c in [-20.0, 0.0, 35.0] {
                assert_eq!(
                    station_to_sea_level_pressure(station_hpa, temp_c, 0.0),
                    station_hpa
                );
            }
        }
    }

    #[test]
    fn sea_level_reduction_at_station_altitude() {
        let mslp = station_to_sea_level_pressure(1000.0, 20.0, 276.0);
        assert!((mslp - 1032.11).abs() < 0.1, "got {mslp}");
    }
}
