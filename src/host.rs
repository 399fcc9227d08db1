use anyhow::Context;
use tokio::process::Command;

/// Reads the host CPU temperature through `vcgencmd`. The firmware utility
/// is local and effectively infallible; an error here aborts the cycle.
pub async fn read_cpu_temp_c() -> Result<f64, anyhow::Error> {
    let output = Command::new("vcgencmd")
        .arg("measure_temp")
        .output()
        .await
        .context("Failed to run vcgencmd")?;

    if !output.status.success() {
        return Err(anyhow::anyhow!(
            "vcgencmd measure_temp exited with {}",
            output.status
        ));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_measure_temp(&stdout)
        .with_context(|| format!("Unexpected vcgencmd output: {:?}", stdout.trim()))
}

/// Parses the `temp=48.3'C` form printed by `vcgencmd measure_temp`.
fn parse_measure_temp(output: &str) -> Option<f64> {
    let rest = output.trim().strip_prefix("temp=")?;
    let mut raw = String::new();
    for ch in rest.chars() {
        if ch.is_ascii_digit() || ch == '.' || ch == '-' {
            raw.push(ch);
        } else {
            break;
        }
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_firmware_output() {
        assert_eq!(parse_measure_temp("temp=48.3'C\n"), Some(48.3));
        assert_eq!(parse_measure_temp("temp=-1.0'C"), Some(-1.0));
    }

    #[test]
    fn rejects_unexpected_output() {
        assert_eq!(parse_measure_temp(""), None);
        assert_eq!(parse_measure_temp("VCHI initialization failed"), None);
        assert_eq!(parse_measure_temp("temp='C"), None);
    }
}
