// Time bucketing - collapses raw readings into one averaged sample per bucket
use crate::domain::sample::TemperatureSample;

pub const ONE_SECOND_MS: i64 = 1000;
pub const ONE_MINUTE_MS: i64 = 60 * ONE_SECOND_MS;

/// Floor an epoch-millisecond instant to the start of its `step_minutes`
/// bucket.
pub fn round_to_step(time_ms: i64, step_minutes: i64) -> i64 {
    let step_ms = step_minutes * ONE_MINUTE_MS;
    time_ms - time_ms.rem_euclid(step_ms)
}

/// Average chronologically ordered samples into one sample per
/// `bucket_minutes` bucket, stamped at the bucket start. Bucket order follows
/// input order.
pub fn bucket_average(samples: &[TemperatureSample], bucket_minutes: i64) -> Vec<TemperatureSample> {
    let mut averaged: Vec<TemperatureSample> = Vec::new();
    let mut bucket_start: Option<i64> = None;
    let mut sum = 0.0;
    let mut count = 0usize;

    for sample in samples {
        let start = round_to_step(sample.time_ms, bucket_minutes);
        match bucket_start {
            Some(current) if current == start => {
                sum += sample.temperature;
                count += 1;
            }
            Some(current) => {
                averaged.push(TemperatureSample::new(current, sum / count as f64));
                bucket_start = Some(start);
                sum = sample.temperature;
                count = 1;
            }
            None => {
                bucket_start = Some(start);
                sum = sample.temperature;
                count = 1;
            }
        }
    }

    if let Some(current) = bucket_start {
        averaged.push(TemperatureSample::new(current, sum / count as f64));
    }

    averaged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_step_floors() {
        assert_eq!(round_to_step(0, 15), 0);
        assert_eq!(round_to_step(14 * ONE_MINUTE_MS + 59_000, 15), 0);
        assert_eq!(round_to_step(15 * ONE_MINUTE_MS, 15), 15 * ONE_MINUTE_MS);
        assert_eq!(round_to_step(31 * ONE_MINUTE_MS, 15), 30 * ONE_MINUTE_MS);
    }

    #[test]
    fn test_bucket_average_merges_same_bucket() {
        let samples = vec![
            TemperatureSample::new(0, 36.0),
            TemperatureSample::new(20_000, 36.4),
            TemperatureSample::new(40_000, 36.8),
        ];
        let averaged = bucket_average(&samples, 1);

        assert_eq!(averaged.len(), 1);
        assert_eq!(averaged[0].time_ms, 0);
        assert!((averaged[0].temperature - 36.4).abs() < 1e-9);
    }

    #[test]
    fn test_bucket_average_keeps_separate_buckets() {
        let samples = vec![
            TemperatureSample::new(30_000, 36.0),
            TemperatureSample::new(90_000, 37.0),
            TemperatureSample::new(150_000, 38.0),
        ];
        let averaged = bucket_average(&samples, 1);

        assert_eq!(averaged.len(), 3);
        assert_eq!(averaged[0].time_ms, 0);
        assert_eq!(averaged[1].time_ms, 60_000);
        assert_eq!(averaged[2].time_ms, 120_000);
    }

    #[test]
    fn test_bucket_average_empty_input() {
        assert!(bucket_average(&[], 1).is_empty());
    }
}
