// InfluxDB repository implementation
use crate::application::temperature_repository::TemperatureRepository;
use crate::domain::sample::TemperatureSample;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct InfluxRepository {
    client: reqwest::Client,
    host: String,
    token: String,
    database: String,
    retention_policy: String,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResponse {
    results: Vec<InfluxQLResult>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLResult {
    #[serde(default)]
    series: Option<Vec<InfluxQLSeries>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InfluxQLSeries {
    #[allow(dead_code)]
    name: String,
    columns: Vec<String>,
    values: Vec<Vec<serde_json::Value>>,
}

impl InfluxQLResponse {
    fn series(&self) -> impl Iterator<Item = &InfluxQLSeries> {
        self.results
            .iter()
            .filter_map(|result| result.series.as_deref())
            .flatten()
    }
}

impl InfluxQLSeries {
    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Decode one InfluxQL result row into a sample. Rows with a missing column,
/// a non-numeric value or an unparseable timestamp are skipped.
fn sample_from_row(
    row: &[serde_json::Value],
    time_idx: usize,
    value_idx: usize,
) -> Option<TemperatureSample> {
    let time_str = row.get(time_idx)?.as_str()?;
    let value = row.get(value_idx)?.as_f64()?;
    let time = chrono::DateTime::parse_from_rfc3339(time_str).ok()?;
    Some(TemperatureSample::new(time.timestamp_millis(), value))
}

/// Escape a value for interpolation into a single-quoted InfluxQL string.
fn escape_tag_value(value: &str) -> String {
    value.replace('\'', "\\'")
}

impl InfluxRepository {
    pub fn new(host: String, token: String, database: String, retention_policy: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            host: host.trim_end_matches('/').to_string(),
            token,
            database,
            retention_policy,
        }
    }

    fn build_query_url(&self, query: &str) -> String {
        let encoded_query = urlencoding::encode(query);
        format!(
            "{}/query?db={}&rp={}&q={}",
            self.host, self.database, self.retention_policy, encoded_query
        )
    }

    async fn execute_query(&self, query: &str) -> Result<InfluxQLResponse> {
        let url = self.build_query_url(query);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Token {}", self.token))
            .header("Accept", "application/json")
            .send()
            .await
            .context("Failed to send request to InfluxDB")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("InfluxDB query failed with status {}: {}", status, body);
        }

        let data = response
            .json::<InfluxQLResponse>()
            .await
            .context("Failed to parse InfluxDB response")?;

        if let Some(result) = data.results.first() {
            if let Some(error) = &result.error {
                anyhow::bail!("InfluxDB query error: {}", error);
            }
        }

        Ok(data)
    }
}

#[async_trait]
impl TemperatureRepository for InfluxRepository {
    async fn list_sensor_ids(&self) -> Result<Vec<String>> {
        let query = "SHOW TAG VALUES FROM temperature WITH KEY = sensor";
        let response = self.execute_query(query).await?;

        // SHOW TAG VALUES rows are [key, value] pairs
        let sensors = response
            .series()
            .flat_map(|series| series.values.iter())
            .filter_map(|row| row.get(1)?.as_str().map(str::to_string))
            .collect();

        Ok(sensors)
    }

    async fn fetch_samples(&self, sensor_id: &str, hours: i32) -> Result<Vec<TemperatureSample>> {
        let query = format!(
            "SELECT value FROM temperature WHERE sensor = '{}' AND time >= now() - {}h ORDER BY time ASC",
            escape_tag_value(sensor_id),
            hours
        );
        tracing::debug!("Executing sample query: {}", query);

        let response = self.execute_query(&query).await?;

        let mut samples = Vec::new();
        for series in response.series() {
            let time_idx = series.column_index("time").unwrap_or(0);
            let value_idx = series.column_index("value").unwrap_or(1);
            samples.extend(
                series
                    .values
                    .iter()
                    .filter_map(|row| sample_from_row(row, time_idx, value_idx)),
            );
        }

        tracing::debug!("Parsed {} samples for sensor {}", samples.len(), sensor_id);
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sample_from_row() {
        let row = vec![json!("2021-03-01T12:34:00Z"), json!(36.5)];
        let sample = sample_from_row(&row, 0, 1).unwrap();

        assert_eq!(sample.time_ms, 1_614_602_040_000);
        assert!((sample.temperature - 36.5).abs() < 1e-9);
    }

    #[test]
    fn test_sample_from_row_skips_malformed_rows() {
        let bad_time = vec![json!("not-a-time"), json!(36.5)];
        assert!(sample_from_row(&bad_time, 0, 1).is_none());

        let missing_value = vec![json!("2021-03-01T12:34:00Z")];
        assert!(sample_from_row(&missing_value, 0, 1).is_none());

        let null_value = vec![json!("2021-03-01T12:34:00Z"), json!(null)];
        assert!(sample_from_row(&null_value, 0, 1).is_none());
    }

    #[test]
    fn test_escape_tag_value_quotes() {
        assert_eq!(escape_tag_value("ward_3_probe"), "ward_3_probe");
        assert_eq!(escape_tag_value("a' OR '1'='1"), "a\\' OR \\'1\\'=\\'1");
    }
}
