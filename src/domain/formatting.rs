// Pure label formatting for axis and threshold values
use chrono::DateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn suffix(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Format an epoch-millisecond instant with an explicit chrono format string.
/// Out-of-range instants format to an empty string.
pub fn format_time_ms(time_ms: i64, format: &str) -> String {
    DateTime::from_timestamp_millis(time_ms)
        .map(|dt| dt.format(format).to_string())
        .unwrap_or_default()
}

/// One-decimal temperature label with the unit suffix, e.g. "38.5°C".
pub fn format_temperature(value: f64, unit: TemperatureUnit) -> String {
    format!("{:.1}{}", value, unit.suffix())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_ms() {
        // 2021-03-01T12:34:00Z
        let time_ms = 1_614_602_040_000;
        assert_eq!(format_time_ms(time_ms, "%H:%M"), "12:34");
        assert_eq!(format_time_ms(time_ms, "%d %b %H:%M"), "01 Mar 12:34");
    }

    #[test]
    fn test_format_temperature() {
        assert_eq!(
            format_temperature(38.54, TemperatureUnit::Celsius),
            "38.5°C"
        );
        assert_eq!(
            format_temperature(101.0, TemperatureUnit::Fahrenheit),
            "101.0°F"
        );
    }
}
