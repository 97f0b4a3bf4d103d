// Sensor service - Use case for listing temperature sensors
use crate::application::temperature_repository::TemperatureRepository;
use crate::domain::sensor::Sensor;
use std::sync::Arc;

#[derive(Clone)]
pub struct SensorService {
    repository: Arc<dyn TemperatureRepository>,
}

impl SensorService {
    pub fn new(repository: Arc<dyn TemperatureRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_sensors(&self) -> anyhow::Result<Vec<Sensor>> {
        let ids = self.repository.list_sensor_ids().await?;
        Ok(ids.into_iter().map(Sensor::new).collect())
    }
}
