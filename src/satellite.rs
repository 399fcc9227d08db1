use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::measurement::OutdoorReading;
use crate::units;

/// Body served by the Pico W satellite.
#[derive(Debug, Deserialize)]
struct SatelliteReport {
    temperature: f64,
    humidity: f64,
}

/// HTTP client for the outdoor sensor satellite. The satellite is the one
/// flaky collaborator in the system: every failure mode here is absorbed and
/// turned into an unavailable reading so the cycle never stalls on it.
#[derive(Debug)]
pub struct SatelliteClient {
    client: reqwest::Client,
    url: String,
}

impl SatelliteClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<SatelliteClient, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(SatelliteClient {
            client,
            url: url.into(),
        })
    }

    /// Fetches the current outdoor reading. Connection errors, timeouts,
    /// error statuses and malformed bodies are logged and reported as
    /// unavailable; the next cycle is the retry.
    pub async fn fetch(&self) -> OutdoorReading {
        match self.try_fetch().await {
            Ok(report) => {
                log::info!(
                    "Outdoor: {:.2} °C | {:.2} °F, {:.1} %",
                    report.temperature,
                    units::celsius_to_fahrenheit(report.temperature),
                    report.humidity
                );
                OutdoorReading {
                    temp_c: Some(report.temperature),
                    humidity: Some(report.humidity),
                }
            }
            Err(e) => {
                log::error!("Satellite fetch failed: {e:#}");
                OutdoorReading::unavailable()
            }
        }
    }

    async fn try_fetch(&self) -> Result<SatelliteReport, anyhow::Error> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Request to satellite failed")?
            .error_for_status()
            .context("Satellite returned an error status")?;

        response
            .json()
            .await
            .context("Satellite response was not valid JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    async fn serve_once(response: &'static str) -> SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf).await;
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });
        addr
    }

    fn client_for(addr: SocketAddr, timeout: Duration) -> SatelliteClient {
        SatelliteClient::new(format!("http://{addr}"), timeout).unwrap()
    }

    #[tokio::test]
    async fn parses_well_formed_report() {
        let addr = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 38\r\n\r\n{\"temperature\": -3.25, \"humidity\": 81}",
        )
        .await;

        let reading = client_for(addr, Duration::from_secs(1)).fetch().await;
        assert_eq!(reading.temp_c, Some(-3.25));
        assert_eq!(reading.humidity, Some(81.0));
    }

    #[tokio::test]
    async fn server_error_yields_unavailable_reading() {
        let addr =
            serve_once("HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\n\r\n").await;

        let reading = client_for(addr, Duration::from_secs(1)).fetch().await;
        assert!(reading.temp_c.is_none());
        assert!(reading.humidity.is_none());
    }

    #[tokio::test]
    async fn malformed_body_yields_unavailable_reading() {
        let addr = serve_once("HTTP/1.1 200 OK\r\ncontent-length: 9\r\n\r\nnot json!").await;

        let reading = client_for(addr, Duration::from_secs(1)).fetch().await;
        assert!(reading.temp_c.is_none());
        assert!(reading.humidity.is_none());
    }

    #[tokio::test]
    async fn unresponsive_server_times_out_within_bound() {
        // Accept the connection but never answer.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.unwrap();
            std::future::pending::<()>().await;
        });

        let timeout = Duration::from_millis(250);
        let started = std::time::Instant::now();
        let reading = client_for(addr, timeout).fetch().await;

        assert!(reading.temp_c.is_none());
        assert!(reading.humidity.is_none());
        assert!(
            started.elapsed() < timeout + Duration::from_secs(2),
            "fetch hung for {:?}",
            started.elapsed()
        );
    }
}
