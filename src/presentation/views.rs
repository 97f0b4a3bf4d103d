// JSON view models - convert domain models to wire types
use crate::domain::category::TemperatureCategory;
use crate::domain::chart::TemperatureChart;
use crate::domain::formatting::{format_temperature, format_time_ms};
use crate::domain::segmentation::{PlotPoint, SegmentedRun};
use crate::domain::sensor::Sensor;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SensorView {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct PointView {
    pub x: f64,
    pub y: f64,
    pub category: &'static str,
    /// Set on real samples when the resolution draws markers; crossing
    /// points never carry one.
    pub marker: bool,
    pub time_label: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RunView {
    pub points: Vec<PointView>,
    /// Per-segment colors, one entry per consecutive point pair. `null` marks
    /// the duplicated single-sample segment, where any color will do.
    pub colors: Vec<Option<&'static str>>,
}

#[derive(Debug, Serialize)]
pub struct ChartView {
    pub sensor_id: String,
    pub title: String,
    pub unit: String,
    pub resolution: &'static str,
    pub y_min: f64,
    pub y_max: f64,
    pub moderate: f64,
    pub high: f64,
    pub moderate_label: String,
    pub high_label: String,
    pub time_format: &'static str,
    pub runs: Vec<RunView>,
}

fn category_name(category: TemperatureCategory) -> &'static str {
    match category {
        TemperatureCategory::Low => "low",
        TemperatureCategory::Middle => "middle",
        TemperatureCategory::High => "high",
    }
}

pub fn sensor_to_view(sensor: Sensor) -> SensorView {
    SensorView {
        id: sensor.id,
        name: sensor.name,
    }
}

pub fn chart_to_view(chart: TemperatureChart) -> ChartView {
    let profile = chart.resolution.profile();

    let runs = chart
        .runs
        .iter()
        .map(|run| run_to_view(run, chart.show_markers, profile.time_format))
        .collect();

    ChartView {
        sensor_id: chart.sensor.id,
        title: chart.title,
        unit: chart.unit.suffix().to_string(),
        resolution: chart.resolution.as_str(),
        y_min: chart.y_min,
        y_max: chart.y_max,
        moderate: chart.thresholds.moderate,
        high: chart.thresholds.high,
        moderate_label: format_temperature(chart.thresholds.moderate, chart.unit),
        high_label: format_temperature(chart.thresholds.high, chart.unit),
        time_format: profile.time_format,
        runs,
    }
}

fn run_to_view(run: &SegmentedRun, show_markers: bool, time_format: &str) -> RunView {
    let points = run
        .points
        .iter()
        .map(|p| point_to_view(p, show_markers, time_format))
        .collect();
    let colors = run
        .colors
        .iter()
        .map(|c| c.map(category_name))
        .collect();

    RunView { points, colors }
}

fn point_to_view(point: &PlotPoint, show_markers: bool, time_format: &str) -> PointView {
    let time_label = point
        .from_sample
        .then(|| format_time_ms(point.x as i64, time_format));

    PointView {
        x: point.x,
        y: point.y,
        category: category_name(point.category),
        marker: show_markers && point.from_sample,
        time_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Thresholds;
    use crate::domain::resolution::ChartResolution;
    use crate::domain::sample::TemperatureSample;
    use crate::domain::segmentation::{partition_runs, segment};

    fn sample_chart(show_markers: bool) -> TemperatureChart {
        let thresholds = Thresholds::new(37.5, 38.5).unwrap();
        let samples = vec![
            TemperatureSample::new(0, 36.0),
            TemperatureSample::new(60_000, 38.0),
        ];
        let runs = segment(&partition_runs(&samples, 70_000), thresholds).unwrap();
        TemperatureChart::new(
            Sensor::new("ward_3_probe".to_string()),
            "Ward 3 Probe temperature (last 6h)".to_string(),
            crate::domain::formatting::TemperatureUnit::Celsius,
            ChartResolution::Minute,
            34.0,
            42.0,
            thresholds,
            show_markers,
            runs,
        )
    }

    #[test]
    fn test_crossing_points_never_get_markers() {
        let view = chart_to_view(sample_chart(true));

        let points = &view.runs[0].points;
        assert_eq!(points.len(), 3);
        assert!(points[0].marker);
        assert!(!points[1].marker);
        assert!(points[1].time_label.is_none());
        assert!(points[2].marker);
    }

    #[test]
    fn test_markers_follow_resolution() {
        let view = chart_to_view(sample_chart(false));
        assert!(view.runs[0].points.iter().all(|p| !p.marker));
    }

    #[test]
    fn test_threshold_labels_are_formatted() {
        let view = chart_to_view(sample_chart(true));
        assert_eq!(view.moderate_label, "37.5°C");
        assert_eq!(view.high_label, "38.5°C");
        assert_eq!(view.unit, "°C");
    }

    #[test]
    fn test_categories_serialize_lowercase() {
        let view = chart_to_view(sample_chart(true));
        let colors = &view.runs[0].colors;
        assert_eq!(colors, &vec![Some("low"), Some("middle")]);
    }
}
