// Chart service - Use case for building segmented temperature charts
use crate::application::temperature_repository::TemperatureRepository;
use crate::domain::bucketing::bucket_average;
use crate::domain::category::Thresholds;
use crate::domain::chart::TemperatureChart;
use crate::domain::formatting::TemperatureUnit;
use crate::domain::resolution::ChartResolution;
use crate::domain::segmentation::{partition_runs, segment};
use crate::domain::sensor::Sensor;
use crate::infrastructure::config::ChartsConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct ChartService {
    repository: Arc<dyn TemperatureRepository>,
    charts_config: ChartsConfig,
}

impl ChartService {
    pub fn new(repository: Arc<dyn TemperatureRepository>, charts_config: ChartsConfig) -> Self {
        Self {
            repository,
            charts_config,
        }
    }

    pub async fn get_chart(
        &self,
        sensor_id: &str,
        resolution: ChartResolution,
        hours: i32,
    ) -> anyhow::Result<TemperatureChart> {
        let sensor = Sensor::new(sensor_id.to_string());
        let profile = resolution.profile();
        let thresholds = Thresholds::new(
            self.charts_config.thresholds.moderate,
            self.charts_config.thresholds.high,
        )?;

        let readings = self.repository.fetch_samples(sensor_id, hours).await?;
        tracing::debug!(
            "Fetched {} readings for sensor {} over {}h",
            readings.len(),
            sensor_id,
            hours
        );

        let samples = bucket_average(&readings, profile.bucket_minutes);
        let runs = partition_runs(&samples, profile.max_gap_ms);
        let segmented = segment(&runs, thresholds)?;

        let unit = match self.charts_config.unit.as_str() {
            "fahrenheit" => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Celsius,
        };

        let title = format!("{} temperature (last {}h)", sensor.name, hours);

        Ok(TemperatureChart::new(
            sensor,
            title,
            unit,
            resolution,
            self.charts_config.y_min,
            self.charts_config.y_max,
            thresholds,
            profile.show_markers,
            segmented,
        ))
    }
}
