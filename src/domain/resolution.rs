// Chart resolution profiles - the per-resolution tuning knobs in one record
use crate::domain::bucketing::{ONE_MINUTE_MS, ONE_SECOND_MS};

const TIME_FORMAT_SHORT: &str = "%H:%M";
const TIME_FORMAT_FULL: &str = "%d %b %H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartResolution {
    Minute,
    Hour,
    Day,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionProfile {
    /// Step the chart origin is rounded to, in minutes.
    pub step_minutes: i64,
    /// Width of one averaged sample bucket, in minutes.
    pub bucket_minutes: i64,
    /// Largest gap between consecutive samples that still joins one run.
    pub max_gap_ms: i64,
    /// Whether sample points carry a marker at this resolution.
    pub show_markers: bool,
    /// chrono format string for time axis labels.
    pub time_format: &'static str,
}

impl ChartResolution {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartResolution::Minute => "minute",
            ChartResolution::Hour => "hour",
            ChartResolution::Day => "day",
        }
    }

    pub fn profile(self) -> ResolutionProfile {
        match self {
            ChartResolution::Minute => ResolutionProfile {
                step_minutes: 15,
                bucket_minutes: 1,
                max_gap_ms: 70 * ONE_SECOND_MS,
                show_markers: true,
                time_format: TIME_FORMAT_SHORT,
            },
            ChartResolution::Hour => ResolutionProfile {
                step_minutes: 120,
                bucket_minutes: 12,
                max_gap_ms: 13 * ONE_MINUTE_MS,
                show_markers: false,
                time_format: TIME_FORMAT_SHORT,
            },
            ChartResolution::Day => ResolutionProfile {
                step_minutes: 720,
                bucket_minutes: 48,
                max_gap_ms: 60 * ONE_MINUTE_MS,
                show_markers: true,
                time_format: TIME_FORMAT_FULL,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minute_profile() {
        let profile = ChartResolution::Minute.profile();
        assert_eq!(profile.bucket_minutes, 1);
        assert_eq!(profile.max_gap_ms, 70_000);
        assert!(profile.show_markers);
    }

    #[test]
    fn test_hour_profile_gap_covers_one_missed_bucket() {
        let profile = ChartResolution::Hour.profile();
        assert_eq!(profile.bucket_minutes, 12);
        assert_eq!(profile.max_gap_ms, 13 * ONE_MINUTE_MS);
        assert!(!profile.show_markers);
    }

    #[test]
    fn test_day_profile_uses_full_time_format() {
        let profile = ChartResolution::Day.profile();
        assert_eq!(profile.bucket_minutes, 48);
        assert_eq!(profile.max_gap_ms, 60 * ONE_MINUTE_MS);
        assert_ne!(profile.time_format, ChartResolution::Hour.profile().time_format);
    }
}
