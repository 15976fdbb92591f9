pub mod drink_service;
pub mod metrics_service;
pub mod pizza_service;
