use anyhow::Context;
use tokio::process::Command;

use crate::config;
use crate::measurement::Snapshot;

/// Appends one row per store for this cycle's snapshot. Store failures are
/// reported and swallowed; whatever the stores now hold is what the charts
/// get rendered from.
pub async fn persist(snapshot: &Snapshot) {
    log::info!("Updating round-robin databases");
    for (store, row) in rows(snapshot) {
        let args = ["updatev".to_string(), store.to_string(), row];
        if let Err(e) = invoke(&args).await {
            log::error!("{store} update failed: {e:#}");
        }
    }
}

/// Runs `rrdtool` with captured output. A non-zero exit or anything on
/// stderr is reported here and the call still counts as handled; only a
/// spawn failure surfaces to the caller.
pub(crate) async fn invoke(args: &[String]) -> Result<(), anyhow::Error> {
    let op = args.first().map(String::as_str).unwrap_or("rrdtool");
    let output = Command::new("rrdtool")
        .args(args)
        .output()
        .await
        .with_context(|| format!("Failed to run rrdtool {op}"))?;

    log::info!("rrdtool {op}: {}", output.status);
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !stdout.trim().is_empty() {
        log::debug!("rrdtool {op}: {}", stdout.trim());
    }

    if !output.status.success() {
        log::error!("rrdtool {op} exited with {}", output.status);
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        log::error!("rrdtool {op}: {}", stderr.trim());
    }

    Ok(())
}

/// One fixed-width row per store. Unavailable readings become the unknown
/// token, never a narrower row; the stores' schemas stay fixed-width.
fn rows(snapshot: &Snapshot) -> [(&'static str, String); 3] {
    let epoch = snapshot.timestamp.timestamp();
    [
        (
            config::TEMPERATURES_RRD,
            format_row(
                epoch,
                &[
                    snapshot.outdoor.temp_c,
                    Some(snapshot.indoor.temp_c),
                    snapshot.tank_temp_c,
                    Some(snapshot.host_temp_c),
                ],
            ),
        ),
        (
            config::HUMIDITIES_RRD,
            format_row(
                epoch,
                &[snapshot.outdoor.humidity, Some(snapshot.indoor.humidity)],
            ),
        ),
        (
            config::PRESSURES_RRD,
            format_row(epoch, &[Some(snapshot.indoor.pressure_hpa)]),
        ),
    ]
}

fn format_row(epoch: i64, fields: &[Option<f64>]) -> String {
    let mut row = epoch.to_string();
    for field in fields {
        row.push(':');
        match field {
            Some(value) => row.push_str(&value.to_string()),
            None => row.push('U'),
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::{IndoorReading, OutdoorReading};
    use chrono::Local;

    fn snapshot(outdoor: OutdoorReading) -> Snapshot {
        Snapshot {
            timestamp: Local::now(),
            outdoor,
            indoor: IndoorReading {
                temp_c: 21.5,
                temp_f: 70.7,
                humidity: 43.2,
                pressure_hpa: 1013.9,
            },
            tank_temp_c: None,
            host_temp_c: 48.3,
        }
    }

    #[test]
    fn unavailable_fields_keep_row_width() {
        assert_eq!(format_row(1000, &[None, Some(21.5), None]), "1000:U:21.5:U");
        assert_eq!(format_row(1000, &[Some(48.0)]), "1000:48");
    }

    #[test]
    fn one_row_per_store_with_fixed_arity() {
        let rows = rows(&snapshot(OutdoorReading::unavailable()));

        assert_eq!(rows.len(), 3);
        for (store, row, fields) in [
            (config::TEMPERATURES_RRD, &rows[0], 4),
            (config::HUMIDITIES_RRD, &rows[1], 2),
            (config::PRESSURES_RRD, &rows[2], 1),
        ] {
            assert_eq!(row.0, store);
            assert_eq!(row.1.split(':').count(), 1 + fields);
        }
    }

    #[test]
    fn unavailable_outdoor_readings_become_unknown_tokens() {
        let rows = rows(&snapshot(OutdoorReading::unavailable()));
        let epoch = rows[0].1.split(':').next().unwrap().to_string();

        assert_eq!(rows[0].1, format!("{epoch}:U:21.5:U:48.3"));
        assert_eq!(rows[1].1, format!("{epoch}:U:43.2"));
        assert_eq!(rows[2].1, format!("{epoch}:1013.9"));
    }
}
