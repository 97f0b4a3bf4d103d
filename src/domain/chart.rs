// Temperature chart domain model - segmenter output plus axis context
use crate::domain::category::Thresholds;
use crate::domain::formatting::TemperatureUnit;
use crate::domain::resolution::ChartResolution;
use crate::domain::segmentation::SegmentedRun;
use crate::domain::sensor::Sensor;

#[derive(Debug, Clone)]
pub struct TemperatureChart {
    pub sensor: Sensor,
    pub title: String,
    pub unit: TemperatureUnit,
    pub resolution: ChartResolution,
    pub y_min: f64,
    pub y_max: f64,
    pub thresholds: Thresholds,
    pub show_markers: bool,
    pub runs: Vec<SegmentedRun>,
}

impl TemperatureChart {
    pub fn new(
        sensor: Sensor,
        title: String,
        unit: TemperatureUnit,
        resolution: ChartResolution,
        y_min: f64,
        y_max: f64,
        thresholds: Thresholds,
        show_markers: bool,
        runs: Vec<SegmentedRun>,
    ) -> Self {
        Self {
            sensor,
            title,
            unit,
            resolution,
            y_min,
            y_max,
            thresholds,
            show_markers,
            runs,
        }
    }
}
