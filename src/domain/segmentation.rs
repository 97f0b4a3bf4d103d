// Threshold segmentation - splits a sample series into gap-separated runs and
// inserts synthetic points where the line crosses a threshold, so a renderer
// can switch segment colors exactly at the crossing instead of at the nearest
// sample.
use crate::domain::category::{TemperatureCategory, Thresholds};
use crate::domain::sample::TemperatureSample;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SegmentationError {
    #[error("cannot segment an empty run")]
    EmptyRun,
}

/// Maximal stretch of consecutive samples with no internal gap above the
/// configured maximum.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub samples: Vec<TemperatureSample>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
    pub category: TemperatureCategory,
    /// False for synthetic crossing points; those carry no marker.
    pub from_sample: bool,
}

impl PlotPoint {
    fn at_sample(sample: &TemperatureSample, category: TemperatureCategory) -> Self {
        Self {
            x: sample.time_ms as f64,
            y: sample.temperature,
            category,
            from_sample: true,
        }
    }

    fn boundary(x: f64, y: f64, category: TemperatureCategory) -> Self {
        Self {
            x,
            y,
            category,
            from_sample: false,
        }
    }
}

/// One run ready for line rendering. `colors[i]` colors the segment between
/// `points[i]` and `points[i + 1]`. `None` appears only on the duplicated
/// segment of a single-sample run, where the color does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedRun {
    pub points: Vec<PlotPoint>,
    pub colors: Vec<Option<TemperatureCategory>>,
}

/// Split chronologically ordered samples into runs. A gap strictly greater
/// than `max_gap_ms` closes the current run; no sample is dropped or
/// reordered, and a run of length one is valid.
pub fn partition_runs(samples: &[TemperatureSample], max_gap_ms: i64) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut current: Vec<TemperatureSample> = Vec::new();

    for &sample in samples {
        if let Some(previous) = current.last() {
            if sample.time_ms - previous.time_ms > max_gap_ms {
                runs.push(Run {
                    samples: std::mem::take(&mut current),
                });
            }
        }
        current.push(sample);
    }

    if !current.is_empty() {
        runs.push(Run { samples: current });
    }

    runs
}

/// X coordinate where the segment from (x1, y1) to (x2, y2) reaches `y`.
/// A flat segment has no true crossing; the midpoint stands in for it.
pub fn crossing_x(x1: f64, x2: f64, y1: f64, y2: f64, y: f64) -> f64 {
    if y1 < y2 {
        x1 + (y - y1) / (y2 - y1) * (x2 - x1)
    } else if y1 > y2 {
        x1 + (y1 - y) / (y1 - y2) * (x2 - x1)
    } else {
        x1 + (x2 - x1) / 2.0
    }
}

pub fn segment(
    runs: &[Run],
    thresholds: Thresholds,
) -> Result<Vec<SegmentedRun>, SegmentationError> {
    runs.iter().map(|run| segment_run(run, thresholds)).collect()
}

/// Walk one run and emit plot points plus per-segment colors. When the
/// category changes between two samples, boundary points are inserted at the
/// exact threshold crossings; a LOW/HIGH jump inserts both crossings in
/// traversal order.
pub fn segment_run(
    run: &Run,
    thresholds: Thresholds,
) -> Result<SegmentedRun, SegmentationError> {
    let first = run.samples.first().ok_or(SegmentationError::EmptyRun)?;

    let mut points: Vec<PlotPoint> = Vec::with_capacity(run.samples.len());
    let mut colors: Vec<Option<TemperatureCategory>> = Vec::new();

    let mut previous_x = first.time_ms as f64;
    let mut previous_y = first.temperature;
    let mut previous_category = thresholds.categorize(first.temperature);
    points.push(PlotPoint::at_sample(first, previous_category));

    for sample in &run.samples[1..] {
        let x = sample.time_ms as f64;
        let y = sample.temperature;
        let category = thresholds.categorize(y);

        if category != previous_category {
            let x_moderate = crossing_x(previous_x, x, previous_y, y, thresholds.moderate);
            let x_high = crossing_x(previous_x, x, previous_y, y, thresholds.high);

            match previous_category {
                TemperatureCategory::Low => {
                    points.push(PlotPoint::boundary(
                        x_moderate,
                        thresholds.moderate,
                        thresholds.categorize(thresholds.moderate),
                    ));
                    colors.push(Some(TemperatureCategory::Low));
                    if category == TemperatureCategory::High {
                        points.push(PlotPoint::boundary(
                            x_high,
                            thresholds.high,
                            thresholds.categorize(thresholds.high),
                        ));
                        colors.push(Some(TemperatureCategory::Middle));
                    }
                }
                TemperatureCategory::Middle => {
                    if category == TemperatureCategory::Low {
                        points.push(PlotPoint::boundary(
                            x_moderate,
                            thresholds.moderate,
                            thresholds.categorize(thresholds.moderate),
                        ));
                    } else {
                        points.push(PlotPoint::boundary(
                            x_high,
                            thresholds.high,
                            thresholds.categorize(thresholds.high),
                        ));
                    }
                    colors.push(Some(TemperatureCategory::Middle));
                }
                TemperatureCategory::High => {
                    points.push(PlotPoint::boundary(
                        x_high,
                        thresholds.high,
                        thresholds.categorize(thresholds.high),
                    ));
                    colors.push(Some(TemperatureCategory::High));
                    if category == TemperatureCategory::Low {
                        points.push(PlotPoint::boundary(
                            x_moderate,
                            thresholds.moderate,
                            thresholds.categorize(thresholds.moderate),
                        ));
                        colors.push(Some(TemperatureCategory::Middle));
                    }
                }
            }

            previous_category = category;
        }

        points.push(PlotPoint::at_sample(sample, category));
        colors.push(Some(category));

        previous_x = x;
        previous_y = y;
    }

    // A lone point cannot form a line segment; duplicate it so renderers
    // always get at least two points. The segment color is irrelevant.
    if points.len() == 1 && colors.is_empty() {
        points.push(points[0]);
        colors.push(None);
    }

    Ok(SegmentedRun { points, colors })
}
