// Domain layer - pure segmentation core and chart models
pub mod bucketing;
pub mod category;
pub mod chart;
pub mod formatting;
pub mod resolution;
pub mod sample;
pub mod segmentation;
pub mod sensor;
