// Temperature categories and the thresholds that define them
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureCategory {
    Low,
    Middle,
    High,
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("moderate threshold {moderate} is above high threshold {high}")]
    Unordered { moderate: f64, high: f64 },
    #[error("thresholds must be finite (moderate={moderate}, high={high})")]
    NonFinite { moderate: f64, high: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub moderate: f64,
    pub high: f64,
}

impl Thresholds {
    pub fn new(moderate: f64, high: f64) -> Result<Self, ThresholdError> {
        if !moderate.is_finite() || !high.is_finite() {
            return Err(ThresholdError::NonFinite { moderate, high });
        }
        if moderate > high {
            return Err(ThresholdError::Unordered { moderate, high });
        }
        Ok(Self { moderate, high })
    }

    /// Values equal to either threshold classify as Middle.
    pub fn categorize(&self, temperature: f64) -> TemperatureCategory {
        if temperature < self.moderate {
            TemperatureCategory::Low
        } else if temperature > self.high {
            TemperatureCategory::High
        } else {
            TemperatureCategory::Middle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_boundaries_are_middle() {
        let thresholds = Thresholds::new(37.5, 38.5).unwrap();

        assert_eq!(thresholds.categorize(37.4), TemperatureCategory::Low);
        assert_eq!(thresholds.categorize(37.5), TemperatureCategory::Middle);
        assert_eq!(thresholds.categorize(38.0), TemperatureCategory::Middle);
        assert_eq!(thresholds.categorize(38.5), TemperatureCategory::Middle);
        assert_eq!(thresholds.categorize(38.6), TemperatureCategory::High);
    }

    #[test]
    fn test_rejects_unordered_thresholds() {
        let result = Thresholds::new(38.5, 37.5);
        assert_eq!(
            result,
            Err(ThresholdError::Unordered {
                moderate: 38.5,
                high: 37.5
            })
        );
    }

    #[test]
    fn test_rejects_non_finite_thresholds() {
        assert!(matches!(
            Thresholds::new(f64::NAN, 38.5),
            Err(ThresholdError::NonFinite { .. })
        ));
        assert!(matches!(
            Thresholds::new(37.5, f64::INFINITY),
            Err(ThresholdError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_equal_thresholds_are_valid() {
        let thresholds = Thresholds::new(38.0, 38.0).unwrap();
        assert_eq!(thresholds.categorize(38.0), TemperatureCategory::Middle);
        assert_eq!(thresholds.categorize(37.9), TemperatureCategory::Low);
        assert_eq!(thresholds.categorize(38.1), TemperatureCategory::High);
    }
}
