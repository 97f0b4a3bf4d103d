// Application layer - use cases and data access ports
pub mod chart_service;
pub mod sensor_service;
pub mod temperature_repository;
