use crate::config;
use crate::rrd;

/// Shared dark styling for every chart.
const STYLE: &[&str] = &[
    "--font",
    "DEFAULT:10:",
    "--font",
    "AXIS:8:",
    "--x-grid",
    "MINUTE:30:HOUR:1:HOUR:2:0:%H:00",
    "--border",
    "0",
    "--slope-mode",
    "-c",
    "BACK#333333",
    "-c",
    "CANVAS#18191A",
    "-c",
    "FONT#DDDDDD",
    "-c",
    "GRID#DDDDDD1A",
    "-c",
    "MGRID#DDDDDD33",
    "-c",
    "FRAME#18191A",
    "-c",
    "ARROW#333333",
];

/// Re-renders all four chart images from the stores. Render failures are
/// reported and skipped; the stale image stays in place until the next
/// cycle replaces it.
pub async fn render_all() {
    log::info!("Rendering charts");
    let charts = [
        ("temperature", temperature_chart()),
        ("humidity", humidity_chart()),
        ("pressure", pressure_chart()),
        ("host temperature", host_chart()),
    ];
    for (name, args) in charts {
        if let Err(e) = rrd::invoke(&args).await {
            log::error!("{name} chart render failed: {e:#}");
        }
    }
}

/// Outdoor/indoor/tank temperatures with a Fahrenheit overlay axis and a
/// last-value readout per series in both scales.
fn temperature_chart() -> Vec<String> {
    assemble(
        &[
            "graph",
            config::TEMPERATURE_CHART,
            "--title",
            "Temperature",
            "--vertical-label",
            "Celsius",
            "--right-axis-label",
            "Fahrenheit",
            "--right-axis",
            "1.8:32",
            "--width",
            "860",
            "--height",
            "340",
            "--alt-autoscale",
        ],
        vec![
            format!("DEF:outdoor={}:outdoor:MAX", config::TEMPERATURES_RRD),
            format!("DEF:indoor={}:indoor:MAX", config::TEMPERATURES_RRD),
            format!("DEF:tank={}:tank:MAX", config::TEMPERATURES_RRD),
            "LINE1:outdoor#ff0000:Outdoor".into(),
            "GPRINT:outdoor:LAST:%2.1lf °C".into(),
            "CDEF:outdoor-f=outdoor,1.8,*,32,+".into(),
            "GPRINT:outdoor-f:LAST:%2.1lf °F".into(),
            "COMMENT:\\l".into(),
            "LINE1:indoor#0000ff:Indoor".into(),
            "GPRINT:indoor:LAST: %2.1lf °C".into(),
            "CDEF:indoor-f=indoor,1.8,*,32,+".into(),
            "GPRINT:indoor-f:LAST:%2.1lf °F".into(),
            "COMMENT:\\l".into(),
            "LINE1:tank#00ff00:Tank".into(),
            "GPRINT:tank:LAST:   %2.1lf °C".into(),
            "CDEF:tank-f=tank,1.8,*,32,+".into(),
            "GPRINT:tank-f:LAST:%2.1lf °F".into(),
            "COMMENT:\\l".into(),
        ],
    )
}

fn humidity_chart() -> Vec<String> {
    assemble(
        &[
            "graph",
            config::HUMIDITY_CHART,
            "--title",
            "Humidity",
            "--vertical-label",
            "Relative (%)",
            "--right-axis",
            "1:0",
            "--width",
            "865",
            "--height",
            "300",
            "--alt-autoscale",
        ],
        vec![
            format!("DEF:outdoor={}:outdoor:MAX", config::HUMIDITIES_RRD),
            format!("DEF:indoor={}:indoor:MAX", config::HUMIDITIES_RRD),
            "LINE1:outdoor#ff0000:Outdoor".into(),
            "GPRINT:outdoor:LAST:%2.1lf%%".into(),
            "COMMENT:\\l".into(),
            "LINE1:indoor#0000ff:Indoor".into(),
            "GPRINT:indoor:LAST: %2.1lf%%".into(),
            "COMMENT:\\l".into(),
        ],
    )
}

/// Sea-level pressure, windowed to the interesting band instead of
/// autoscaled so synoptic swings stay readable.
fn pressure_chart() -> Vec<String> {
    assemble(
        &[
            "graph",
            config::PRESSURE_CHART,
            "--title",
            "Barometric Pressure (MSL)",
            "--vertical-label",
            "hPa",
            "--right-axis",
            "1:0",
            "--right-axis-format",
            "%4.0lf",
            "--width",
            "865",
            "--height",
            "535",
            "--lower-limit",
            "994",
            "--upper-limit",
            "1030",
            "--y-grid",
            "1:2",
            "--units-exponent",
            "0",
        ],
        vec![
            format!("DEF:indoor={}:indoor:MAX", config::PRESSURES_RRD),
            "LINE1:indoor#00ff00:Local".into(),
            "GPRINT:indoor:LAST: %.2lf hPa".into(),
            "COMMENT:\\l".into(),
        ],
    )
}

fn host_chart() -> Vec<String> {
    assemble(
        &[
            "graph",
            config::HOST_CHART,
            "--title",
            "CPU Temperature",
            "--vertical-label",
            "Celsius",
            "--right-axis-label",
            "Fahrenheit",
            "--right-axis",
            "1.8:32",
            "--width",
            "860",
            "--height",
            "100",
        ],
        vec![
            format!("DEF:host={}:host:MAX", config::TEMPERATURES_RRD),
            "AREA:host#ff0000#320000:CPU".into(),
            "GPRINT:host:LAST:%2.1lf °C".into(),
            "CDEF:host-f=host,1.8,*,32,+".into(),
            "GPRINT:host-f:LAST:%2.1lf °F".into(),
            "COMMENT:\\l".into(),
        ],
    )
}

fn assemble(head: &[&str], series: Vec<String>) -> Vec<String> {
    head.iter()
        .chain(STYLE)
        .map(|s| s.to_string())
        .chain(series)
        .collect()
}
