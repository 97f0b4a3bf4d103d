use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxConfig {
    pub influx: InfluxSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InfluxSettings {
    pub host: String,
    pub token: String,
    pub database: String,
    pub retention_policy: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChartsConfig {
    pub thresholds: ThresholdsConfig,
    pub y_min: f64,
    pub y_max: f64,
    pub unit: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThresholdsConfig {
    pub moderate: f64,
    pub high: f64,
}

pub fn load_influx_config() -> anyhow::Result<InfluxConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/influx"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

pub fn load_charts_config() -> anyhow::Result<ChartsConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/charts"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charts_config_deserializes() {
        let toml = r#"
            y_min = 34.0
            y_max = 42.0
            unit = "celsius"

            [thresholds]
            moderate = 37.5
            high = 38.5
        "#;
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap();
        let charts: ChartsConfig = settings.try_deserialize().unwrap();

        assert_eq!(charts.thresholds.moderate, 37.5);
        assert_eq!(charts.thresholds.high, 38.5);
        assert_eq!(charts.y_min, 34.0);
        assert_eq!(charts.unit, "celsius");
    }
}
