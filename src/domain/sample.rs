// Temperature sample domain model

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSample {
    pub time_ms: i64,
    pub temperature: f64,
}

impl TemperatureSample {
    pub fn new(time_ms: i64, temperature: f64) -> Self {
        Self {
            time_ms,
            temperature,
        }
    }
}
