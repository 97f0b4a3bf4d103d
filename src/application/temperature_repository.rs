// Repository trait for temperature data access
use crate::domain::sample::TemperatureSample;
use async_trait::async_trait;

#[async_trait]
pub trait TemperatureRepository: Send + Sync {
    /// List all sensor ids that have reported temperature readings
    async fn list_sensor_ids(&self) -> anyhow::Result<Vec<String>>;

    /// Fetch raw samples for a sensor over the trailing time window,
    /// chronologically ordered
    async fn fetch_samples(
        &self,
        sensor_id: &str,
        hours: i32,
    ) -> anyhow::Result<Vec<TemperatureSample>>;
}
